use super::{shrink_pair, Decorated, RowRenderer};
use crate::node::{Frame, Renderer, VSeq};
use crate::sink::Output;
use crate::sizer::TableSizer;
use ctable_core::style::{Alignment, BoxStyle, Side};

/// Renderer for a whole table: rows stacked inside padding, border and
/// margin.
///
/// When the table freezes, rows that inherit an alignment axis take it from
/// the table, and pass it on to their cells.
#[derive(Debug, Clone)]
pub struct TableRenderer<'a> {
    layers: Decorated<'a, VSeq<RowRenderer<'a>>>,
    align: Alignment,
}

impl<'a> TableRenderer<'a> {
    /// Builds the renderer for a table with the given style and rows.
    pub fn new(style: &'a BoxStyle, rows: Vec<RowRenderer<'a>>) -> Self {
        Self {
            layers: Decorated::new(VSeq::new(rows), style),
            align: style.align,
        }
    }

    /// The row renderers in order.
    pub fn rows(&self) -> &[RowRenderer<'a>] {
        self.layers.content().children()
    }

    /// The row renderers in order, mutably.
    pub fn rows_mut(&mut self) -> &mut [RowRenderer<'a>] {
        self.layers.content_mut().children_mut()
    }

    /// Padding, border and margin around the rows.
    pub fn layers(&self) -> &Decorated<'a, VSeq<RowRenderer<'a>>> {
        &self.layers
    }

    /// Padding, border and margin around the rows, mutably.
    pub fn layers_mut(&mut self) -> &mut Decorated<'a, VSeq<RowRenderer<'a>>> {
        &mut self.layers
    }

    /// The alignment rows inherit.
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Sizes the whole table to fit in `max_total_width` columns.
    ///
    /// The table's own margin and padding give way first, larger side first:
    /// margin down to one blank per side, then padding, then the remaining
    /// margin. Borders stay. What is left is the row budget for the
    /// [`TableSizer`].
    pub fn auto_size(&mut self, max_total_width: usize) {
        let layers = &mut self.layers;
        let mut margin = [layers.margin().get(Side::Left), layers.margin().get(Side::Right)];
        let mut padding = [layers.padding().get(Side::Left), layers.padding().get(Side::Right)];
        let borders = usize::from(layers.border().is_enabled(Side::Left))
            + usize::from(layers.border().is_enabled(Side::Right));

        let fixed = margin[0] + margin[1] + padding[0] + padding[1] + borders;
        let max_row_width = max_total_width.saturating_sub(fixed);
        for _ in 0..fixed.saturating_sub(max_total_width) {
            let [left_margin, right_margin] = &mut margin;
            let [left_padding, right_padding] = &mut padding;
            if *left_margin <= 1 && *right_margin <= 1 && (*left_padding > 0 || *right_padding > 0) {
                shrink_pair(left_padding, right_padding, 1);
            } else {
                shrink_pair(left_margin, right_margin, 1);
            }
        }
        layers.margin_mut().set(Side::Left, margin[0]);
        layers.margin_mut().set(Side::Right, margin[1]);
        layers.padding_mut().set(Side::Left, padding[0]);
        layers.padding_mut().set(Side::Right, padding[1]);

        tracing::debug!(max_total_width, max_row_width, rows = self.rows().len(), "sizing table");
        TableSizer::new(self.rows_mut()).set_sizes(max_row_width);
    }

    /// Freezes the table and merges the border corners of every row, cell
    /// and of the table itself. Call once per render.
    pub fn combine_border_corners(&mut self) {
        self.freeze();
        for row in self.rows_mut() {
            row.combine_border_corners();
        }
        self.layers.combine_corners();
    }
}

impl Renderer for TableRenderer<'_> {
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
        for row in self.rows_mut() {
            let mut inherited = row.align();
            inherited.inherit_from(align);
            row.set_align(inherited);
        }
        self.layers.freeze_children();
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        self.layers.render_line(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::CellRenderer;
    use crate::node::testing::lines;
    use ctable_core::bounds::SizeBounds;
    use ctable_core::corner::CornerMerge;
    use ctable_core::style::{HAlign, VAlign};
    use ctable_text::StyledRun;
    use pretty_assertions::assert_eq;

    struct Content {
        cells: Vec<Vec<Vec<StyledRun>>>,
    }

    impl Content {
        fn new(rows: &[&[&str]]) -> Self {
            Self {
                cells: rows
                    .iter()
                    .map(|row| row.iter().map(|text| vec![StyledRun::plain(*text)]).collect())
                    .collect(),
            }
        }

        fn table<'a>(&'a self, table: &'a BoxStyle, row: &'a BoxStyle, cell: &'a BoxStyle) -> TableRenderer<'a> {
            let rows = self
                .cells
                .iter()
                .map(|cells| {
                    let cells = cells
                        .iter()
                        .map(|runs| CellRenderer::new(runs, cell, SizeBounds::new(), SizeBounds::new()))
                        .collect();
                    RowRenderer::new(row, cells)
                })
                .collect();
            TableRenderer::new(table, rows)
        }
    }

    #[test]
    fn single_cell_wraps_at_budget() {
        let content = Content::new(&[&["hello world"]]);
        let plain = BoxStyle::new();
        let mut table = content.table(&plain, &plain, &plain);
        table.auto_size(5);
        table.combine_border_corners();
        assert_eq!(lines(&mut table), vec!["hello", "world"]);
    }

    #[test]
    fn boxed_grid() {
        let content = Content::new(&[&["a", "bb"], &["ccc", "d"]]);
        let table_style = BoxStyle::new()
            .with_margin(1u8)
            .with_pattern(("─", "│"))
            .with_corners(CornerMerge::BoxDrawing);
        let row_style = BoxStyle::new();
        let cell_style = BoxStyle::new()
            .with_margin((0u8, 1u8, 0u8, 0u8))
            .with_padding((0u8, 1u8))
            .with_pattern("│");
        let mut table = content.table(&table_style, &row_style, &cell_style);
        table.auto_size(80);
        table.combine_border_corners();
        assert_eq!(
            lines(&mut table),
            vec![
                "┌───────────┐",
                "│ a   │ bb ││",
                "│ ccc │ d  ││",
                "└───────────┘",
            ]
        );
    }

    #[test]
    fn table_margin_and_padding_give_way() {
        let content = Content::new(&[&["abc"]]);
        let table_style = BoxStyle::new().with_margin((0u8, 3u8)).with_padding((0u8, 1u8));
        let plain = BoxStyle::new();
        let mut table = content.table(&table_style, &plain, &plain);
        table.auto_size(6);
        let layers = table.layers();
        assert_eq!(layers.margin().get(Side::Left), 1);
        assert_eq!(layers.margin().get(Side::Right), 1);
        assert_eq!(layers.padding().get(Side::Left), 1);
        assert_eq!(layers.padding().get(Side::Right), 1);
        assert_eq!(table.rows()[0].cells()[0].text().text_width(), 0);
        assert!(table.width() <= 8);
    }

    #[test]
    fn alignment_flows_from_table_to_cells() {
        let content = Content::new(&[&["x"], &["yy"], &["zzzz"]]);
        let table_style = BoxStyle::new().with_horizontal_align(HAlign::Center);
        let row_style = BoxStyle::new().with_vertical_align(VAlign::Middle);
        let plain = BoxStyle::new();
        let mut table = content.table(&table_style, &row_style, &plain);
        table.auto_size(80);
        table.freeze();
        assert_eq!(table.rows()[0].align(), Alignment::new(HAlign::Center, VAlign::Middle));
        assert_eq!(lines(&mut table), vec![" x  ", " yy ", "zzzz"]);
    }

    #[test]
    fn empty_table_renders_nothing() {
        let content = Content::new(&[]);
        let plain = BoxStyle::new();
        let mut table = content.table(&plain, &plain, &plain);
        table.auto_size(80);
        table.combine_border_corners();
        assert!(lines(&mut table).is_empty());
    }
}
