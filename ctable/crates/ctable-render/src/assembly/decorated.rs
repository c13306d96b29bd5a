use crate::node::{Bordered, Frame, Padding, Renderer};
use crate::sink::Output;
use ctable_core::style::{BoxStyle, Edges, Side};

type Layers<'a, R> = Padding<Bordered<'a, Padding<R>>>;

/// Content wrapped in padding, border and margin, as a [`BoxStyle`] describes.
///
/// From the inside out: padding in the box colors, the border strip, then
/// the margin in the ambient colors. A side's `margin` value counts its
/// border, so margin `m > 0` gives one border glyph and `m - 1` margin cells.
#[derive(Debug, Clone)]
pub struct Decorated<'a, R> {
    layers: Layers<'a, R>,
}

impl<'a, R: Renderer> Decorated<'a, R> {
    /// Wraps `content` in the layers of `style`.
    pub fn new(content: R, style: &'a BoxStyle) -> Self {
        let padding = Padding::new(content)
            .with_amount(edges(|side| usize::from(style.side(side).padding)))
            .with_colors(style.fg, style.bg);
        let border = Bordered::new(padding, style);
        let margin = Padding::new(border)
            .with_amount(edges(|side| usize::from(style.side(side).margin.saturating_sub(1))));
        Self { layers: margin }
    }

    /// The outermost layer.
    pub fn margin(&self) -> &Padding<Bordered<'a, Padding<R>>> {
        &self.layers
    }

    /// The outermost layer, mutably.
    pub fn margin_mut(&mut self) -> &mut Padding<Bordered<'a, Padding<R>>> {
        &mut self.layers
    }

    /// The border layer.
    pub fn border(&self) -> &Bordered<'a, Padding<R>> {
        self.layers.inner()
    }

    /// The border layer, mutably.
    pub fn border_mut(&mut self) -> &mut Bordered<'a, Padding<R>> {
        self.layers.inner_mut()
    }

    /// The padding layer.
    pub fn padding(&self) -> &Padding<R> {
        self.border().inner()
    }

    /// The padding layer, mutably.
    pub fn padding_mut(&mut self) -> &mut Padding<R> {
        self.border_mut().inner_mut()
    }

    /// The wrapped content.
    pub fn content(&self) -> &R {
        self.padding().inner()
    }

    /// The wrapped content, mutably.
    pub fn content_mut(&mut self) -> &mut R {
        self.padding_mut().inner_mut()
    }

    /// Width or height taken outside the padding on `side`: margin plus border.
    pub fn external(&self, side: Side) -> usize {
        self.margin().get(side) + usize::from(self.border().is_enabled(side))
    }

    /// Makes the margin and border on `side` take exactly `external` cells.
    ///
    /// Zero turns the border off. Otherwise the border stays as configured
    /// and the margin takes the rest.
    pub fn set_external(&mut self, side: Side, external: usize) {
        if external == 0 {
            self.margin_mut().set(side, 0);
            self.border_mut().set_enabled(side, false);
        } else {
            let border = usize::from(self.border().is_enabled(side));
            self.margin_mut().set(side, external - border);
        }
    }

    /// Takes `deficit` cells of padding from `first` and `second`, always
    /// from the larger one and from `first` on a tie.
    pub fn shrink_padding(&mut self, first: Side, second: Side, deficit: usize) {
        let padding = self.padding_mut();
        let mut a = padding.get(first);
        let mut b = padding.get(second);
        shrink_pair(&mut a, &mut b, deficit);
        padding.set(first, a);
        padding.set(second, b);
    }

    /// Merges the corner glyphs of the border; see [`Bordered::combine_corners`].
    pub fn combine_corners(&mut self) {
        self.freeze();
        self.border_mut().combine_corners();
    }
}

/// Takes `deficit` units from the larger of two amounts, from `first` on a
/// tie, never going below zero.
pub(crate) fn shrink_pair(first: &mut usize, second: &mut usize, deficit: usize) {
    for _ in 0..deficit {
        if *second > *first {
            *second -= 1;
        } else if *first > 0 {
            *first -= 1;
        } else {
            break;
        }
    }
}

fn edges(amount: impl Fn(Side) -> usize) -> Edges<usize> {
    Edges {
        top: amount(Side::Top),
        right: amount(Side::Right),
        bottom: amount(Side::Bottom),
        left: amount(Side::Left),
    }
}

impl<R: Renderer> Renderer for Decorated<'_, R> {
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
