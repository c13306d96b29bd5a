use super::{CellRenderer, Decorated};
use crate::node::{Frame, HSeq, Renderer};
use crate::sink::Output;
use crate::sizer::TableSizer;
use ctable_core::style::{Alignment, BoxStyle};
use std::slice;

/// Renderer for one row: its cells side by side inside padding, border and
/// margin.
///
/// When the row freezes, cells that inherit an alignment axis take it from
/// the row.
#[derive(Debug, Clone)]
pub struct RowRenderer<'a> {
    layers: Decorated<'a, HSeq<CellRenderer<'a>>>,
    align: Alignment,
}

impl<'a> RowRenderer<'a> {
    /// Builds the renderer for a row with the given style and cells.
    pub fn new(style: &'a BoxStyle, cells: Vec<CellRenderer<'a>>) -> Self {
        Self {
            layers: Decorated::new(HSeq::new(cells), style),
            align: style.align,
        }
    }

    /// The cell renderers in order.
    pub fn cells(&self) -> &[CellRenderer<'a>] {
        self.layers.content().children()
    }

    /// The cell renderers in order, mutably.
    pub fn cells_mut(&mut self) -> &mut [CellRenderer<'a>] {
        self.layers.content_mut().children_mut()
    }

    /// Padding, border and margin around the cells.
    pub fn layers(&self) -> &Decorated<'a, HSeq<CellRenderer<'a>>> {
        &self.layers
    }

    /// Padding, border and margin around the cells, mutably.
    pub fn layers_mut(&mut self) -> &mut Decorated<'a, HSeq<CellRenderer<'a>>> {
        &mut self.layers
    }

    /// The alignment cells inherit.
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Replaces the alignment cells inherit.
    pub fn set_align(&mut self, align: Alignment) {
        debug_assert!(!self.is_frozen(), "alignment changed after freeze");
        self.align = align;
    }

    /// Sizes the row on its own to fit in `max_total_width` columns, each
    /// cell being a column of its own.
    pub fn auto_size(&mut self, max_total_width: usize) {
        tracing::debug!(max_total_width, cells = self.cells().len(), "sizing row");
        TableSizer::new(slice::from_mut(self)).set_sizes(max_total_width);
    }

    /// Freezes the row and merges the border corners of every cell and of the
    /// row itself. Call once per render.
    pub fn combine_border_corners(&mut self) {
        self.freeze();
        for cell in self.cells_mut() {
            cell.combine_border_corners();
        }
        self.layers.combine_corners();
    }
}

impl Renderer for RowRenderer<'_> {
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
        let align = self.align;
        for cell in self.cells_mut() {
            let mut inherited = cell.text().align();
            inherited.inherit_from(align);
            cell.text_mut().set_align(inherited);
        }
        self.layers.freeze_children();
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        self.layers.render_line(out);
    }
}
