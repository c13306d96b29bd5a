use super::Decorated;
use crate::node::{Frame, Renderer, TextNode};
use crate::sink::Output;
use ctable_core::bounds::SizeBounds;
use ctable_core::style::BoxStyle;
use ctable_text::StyledRun;

/// Renderer for one cell: its text inside padding, border and margin.
///
/// Borrows the cell's runs and style for one render.
#[derive(Debug, Clone)]
pub struct CellRenderer<'a> {
    layers: Decorated<'a, TextNode<'a>>,
}

impl<'a> CellRenderer<'a> {
    /// Builds the renderer for a cell with the given text and configuration.
    pub fn new(
        runs: &'a [StyledRun],
        style: &'a BoxStyle,
        width: SizeBounds,
        height: SizeBounds,
    ) -> Self {
        let text = TextNode::new(runs, width, height).with_align(style.align);
        Self {
            layers: Decorated::new(text, style),
        }
    }

    /// The text node.
    pub fn text(&self) -> &TextNode<'a> {
        self.layers.content()
    }

    /// The text node, mutably.
    pub fn text_mut(&mut self) -> &mut TextNode<'a> {
        self.layers.content_mut()
    }

    /// Padding, border and margin around the text.
    pub fn layers(&self) -> &Decorated<'a, TextNode<'a>> {
        &self.layers
    }

    /// Padding, border and margin around the text, mutably.
    pub fn layers_mut(&mut self) -> &mut Decorated<'a, TextNode<'a>> {
        &mut self.layers
    }

    /// Sizes the cell on its own to fit in `max_total_width` columns.
    ///
    /// The text gets its preferred width clamped into its bounds, then cut to
    /// whatever the margin, border and padding leave; the height follows from
    /// wrapping at that width, clamped into the height bounds.
    pub fn auto_size(&mut self, max_total_width: usize) {
        tracing::debug!(max_total_width, "sizing cell");
        self.text_mut().set_width(0);
        let fixed_width = self.width();

        let text = self.text();
        let width = text
            .pref_width()
            .max(text.min_width())
            .min(text.max_width())
            .min(max_total_width.saturating_sub(fixed_width));
        self.text_mut().set_width(width);

        let text = self.text();
        let height = text
            .pref_height(width)
            .max(text.min_height())
            .min(text.max_height());
        self.text_mut().set_height(height);
    }

    /// Freezes the cell and merges its border corners. Call once per render.
    pub fn combine_border_corners(&mut self) {
        self.layers.combine_corners();
    }
}

impl Renderer for CellRenderer<'_> {
    fn frame(&self) -> &Frame {
        self.layers.frame()
    }

    fn frame_mut(&mut self) -> &mut Frame {
        self.layers.frame_mut()
    }

    fn measure_width(&self) -> usize {
        self.layers.measure_width()
    }

    fn measure_height(&self) -> usize {
        self.layers.measure_height()
    }

    fn freeze_children(&mut self) {
        self.layers.freeze_children();
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        self.layers.render_line(out);
    }
}
