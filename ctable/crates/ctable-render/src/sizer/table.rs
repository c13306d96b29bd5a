use super::{ColumnSizer, RowSizer};
use crate::assembly::{shrink_pair, RowRenderer};
use ctable_core::style::Side;

/// How a [`TableSizer`] split the row width between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// Every column got its preferred width.
    Preferred,
    /// Every column got its minimum plus a share of the slack.
    Proportional,
    /// Columns got their minimum left to right until the budget ran out.
    Truncated,
}

/// Width and height solver for a grid of rows.
///
/// Column `i` is made of the `i`-th cell of every row; rows with fewer cells
/// simply do not contribute to the later columns.
#[derive(Debug)]
pub struct TableSizer<'r, 'a> {
    rows: &'r mut [RowRenderer<'a>],
    columns: Vec<ColumnSizer>,
    left_margin: usize,
    right_margin: usize,
    left_padding: usize,
    right_padding: usize,
}

impl<'r, 'a> TableSizer<'r, 'a> {
    /// Collects column and row bounds from `rows`.
    pub fn new(rows: &'r mut [RowRenderer<'a>]) -> Self {
        let mut columns: Vec<ColumnSizer> = Vec::new();
        let (mut left_margin, mut right_margin) = (0, 0);
        let (mut left_padding, mut right_padding) = (0, 0);

        for row in rows.iter() {
            if columns.len() < row.cells().len() {
                columns.resize(row.cells().len(), ColumnSizer::new());
            }
            for (column, cell) in columns.iter_mut().zip(row.cells()) {
                column.add(cell);
            }

            let layers = row.layers();
            left_margin = layers.external(Side::Left).max(left_margin);
            right_margin = layers.external(Side::Right).max(right_margin);
            left_padding = layers.padding().get(Side::Left).max(left_padding);
            right_padding = layers.padding().get(Side::Right).max(right_padding);
        }

        Self {
            rows,
            columns,
            left_margin,
            right_margin,
            left_padding,
            right_padding,
        }
    }

    /// Per-column bounds, in column order.
    pub fn columns(&self) -> &[ColumnSizer] {
        &self.columns
    }

    /// Sizes every row and cell so each row is at most `max_row_width` wide,
    /// then sizes heights.
    pub fn set_sizes(mut self, max_row_width: usize) -> Allocation {
        let internal = self.fit_rows(max_row_width);
        let allocation = self.set_column_widths(internal);

        for row in self.rows.iter_mut() {
            RowSizer::new(row).set_heights(row);
        }
        allocation
    }

    /// Shrinks the rows' margins and padding into `max_row_width` and
    /// returns the width left for the columns.
    fn fit_rows(&mut self, max_row_width: usize) -> usize {
        let fixed = self.left_margin + self.right_margin + self.left_padding + self.right_padding;
        let internal = max_row_width.saturating_sub(fixed);
        for _ in 0..fixed.saturating_sub(max_row_width) {
            let only_borders_left = self.left_margin <= 1 && self.right_margin <= 1;
            if only_borders_left && (self.left_padding > 0 || self.right_padding > 0) {
                shrink_pair(&mut self.left_padding, &mut self.right_padding, 1);
            } else {
                shrink_pair(&mut self.left_margin, &mut self.right_margin, 1);
            }
        }

        for row in self.rows.iter_mut() {
            let layers = row.layers_mut();
            layers.padding_mut().set(Side::Left, self.left_padding);
            layers.padding_mut().set(Side::Right, self.right_padding);
            layers.set_external(Side::Left, self.left_margin);
            layers.set_external(Side::Right, self.right_margin);
        }
        internal
    }

    fn set_column_widths(&mut self, budget: usize) -> Allocation {
        let external: usize = self.columns.iter().map(ColumnSizer::external_width).sum();
        let min: usize = self.columns.iter().map(ColumnSizer::min_internal_width).sum();
        let pref: usize = self.columns.iter().map(ColumnSizer::clamped_pref_width).sum();

        let (allocation, widths): (Allocation, Vec<usize>) = if pref + external <= budget {
            let widths = self
                .columns
                .iter()
                .map(|column| column.external_width() + column.clamped_pref_width())
                .collect();
            (Allocation::Preferred, widths)
        } else if min + external <= budget {
            let extras = distribute(budget - (min + external), &self.columns);
            let widths = self
                .columns
                .iter()
                .zip(extras)
                .map(|(column, extra)| column.external_width() + column.min_internal_width() + extra)
                .collect();
            (Allocation::Proportional, widths)
        } else {
            let mut remaining = budget;
            let widths = self
                .columns
                .iter()
                .map(|column| {
                    let width = (column.external_width() + column.min_internal_width()).min(remaining);
                    remaining -= width;
                    width
                })
                .collect();
            (Allocation::Truncated, widths)
        };

        tracing::debug!(
            ?allocation,
            budget,
            columns = self.columns.len(),
            "allocated column widths"
        );

        for (index, (column, width)) in self.columns.iter_mut().zip(widths).enumerate() {
            let cells = self
                .rows
                .iter_mut()
                .filter_map(|row| row.cells_mut().get_mut(index));
            column.set_widths(width, cells);
        }
        allocation
    }
}

/// Splits `slack` between columns in proportion to how far each one's
/// preferred width, clamped into its bounds, is above its minimum.
///
/// Each column first gets the floor of its exact share. Units lost to
/// rounding then go one at a time to the column with the smallest
/// extra-to-wanted ratio, the earliest on a tie.
fn distribute(slack: usize, columns: &[ColumnSizer]) -> Vec<usize> {
    let wanted: Vec<usize> = columns
        .iter()
        .map(|column| column.clamped_pref_width().saturating_sub(column.min_internal_width()))
        .collect();
    let total_wanted: usize = wanted.iter().sum();
    if total_wanted == 0 {
        return vec![0; columns.len()];
    }

    let mut extras: Vec<usize> = wanted
        .iter()
        .map(|&want| slack * want / total_wanted)
        .collect();
    let mut used: usize = extras.iter().sum();

    while used < slack {
        let neediest = (0..extras.len())
            .filter(|&i| wanted[i] > 0)
            .min_by(|&a, &b| {
                // extras[a] / wanted[a] against extras[b] / wanted[b]
                (extras[a] * wanted[b]).cmp(&(extras[b] * wanted[a]))
            });
        if let Some(index) = neediest {
            extras[index] += 1;
        }
        used += 1;
    }
    extras
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::CellRenderer;
    use crate::node::testing::lines;
    use crate::node::Renderer;
    use ctable_core::bounds::SizeBounds;
    use ctable_core::style::BoxStyle;
    use ctable_text::StyledRun;
    use pretty_assertions::assert_eq;

    fn column(pref: usize, min: usize) -> ColumnSizer {
        let runs: [StyledRun; 0] = [];
        let style = BoxStyle::new();
        let cell = CellRenderer::new(
            &runs,
            &style,
            SizeBounds::new().with_pref(pref).with_min(min),
            SizeBounds::new(),
        );
        let mut column = ColumnSizer::new();
        column.add(&cell);
        column
    }

    fn text_widths(rows: &[RowRenderer<'_>]) -> Vec<Vec<usize>> {
        rows.iter()
            .map(|row| row.cells().iter().map(|cell| cell.text().text_width()).collect())
            .collect()
    }

    #[test]
    fn distribute_rounds_toward_neediest() {
        let columns = [column(10, 2), column(20, 2)];
        assert_eq!(distribute(12, &columns), vec![4, 8]);
    }

    #[test]
    fn distribute_skips_satisfied_columns() {
        let columns = [column(2, 2), column(5, 1), column(5, 1)];
        assert_eq!(distribute(3, &columns), vec![0, 2, 1]);
        assert_eq!(distribute(0, &columns), vec![0, 0, 0]);
        assert_eq!(distribute(4, &[column(1, 1)]), vec![0]);
    }

    struct Grid {
        runs: Vec<Vec<StyledRun>>,
        style: BoxStyle,
        bounds: Vec<SizeBounds>,
    }

    impl Grid {
        fn new(texts: &[&str], bounds: Vec<SizeBounds>) -> Self {
            Self {
                runs: texts.iter().map(|text| vec![StyledRun::plain(*text)]).collect(),
                style: BoxStyle::new(),
                bounds,
            }
        }

        fn rows(&self, count: usize) -> Vec<RowRenderer<'_>> {
            (0..count)
                .map(|_| {
                    let cells = self
                        .runs
                        .iter()
                        .zip(&self.bounds)
                        .map(|(runs, &width)| CellRenderer::new(runs, &self.style, width, SizeBounds::new()))
                        .collect();
                    RowRenderer::new(&self.style, cells)
                })
                .collect()
        }
    }

    #[test]
    fn preferred_widths_when_they_fit() {
        let grid = Grid::new(&["abc", "de"], vec![SizeBounds::new(); 2]);
        let mut rows = grid.rows(2);
        let allocation = TableSizer::new(&mut rows).set_sizes(10);
        assert_eq!(allocation, Allocation::Preferred);
        assert_eq!(text_widths(&rows), vec![vec![3, 2], vec![3, 2]]);
    }

    #[test]
    fn proportional_widths_between_min_and_pref() {
        let bounds = vec![
            SizeBounds::new().with_pref(10).with_min(2),
            SizeBounds::new().with_pref(20).with_min(2),
        ];
        let grid = Grid::new(&["", ""], bounds);
        let mut rows = grid.rows(1);
        let allocation = TableSizer::new(&mut rows).set_sizes(16);
        assert_eq!(allocation, Allocation::Proportional);
        assert_eq!(text_widths(&rows), vec![vec![6, 10]]);
    }

    #[test]
    fn exact_minimum_budget() {
        let bounds = vec![
            SizeBounds::new().with_pref(10).with_min(2),
            SizeBounds::new().with_pref(20).with_min(3),
        ];
        let grid = Grid::new(&["", ""], bounds);
        let mut rows = grid.rows(1);
        TableSizer::new(&mut rows).set_sizes(5);
        assert_eq!(text_widths(&rows), vec![vec![2, 3]]);
    }

    #[test]
    fn truncates_left_to_right_below_minimum() {
        let bounds = vec![SizeBounds::new().with_min(3); 3];
        let grid = Grid::new(&["", "", ""], bounds);
        let mut rows = grid.rows(1);
        let allocation = TableSizer::new(&mut rows).set_sizes(5);
        assert_eq!(allocation, Allocation::Truncated);
        assert_eq!(text_widths(&rows), vec![vec![3, 2, 0]]);
    }

    #[test]
    fn widths_grow_monotonically_with_budget() {
        let bounds = vec![
            SizeBounds::new().with_pref(7).with_min(1),
            SizeBounds::new().with_pref(13).with_min(4),
            SizeBounds::new().with_pref(3).with_min(3),
        ];
        let grid = Grid::new(&["", "", ""], bounds);
        let mut previous = vec![0; 3];
        for budget in 0..40 {
            let mut rows = grid.rows(1);
            TableSizer::new(&mut rows).set_sizes(budget);
            let widths = text_widths(&rows).remove(0);
            for (now, before) in widths.iter().zip(&previous) {
                assert!(now >= before, "budget {budget}: {widths:?} after {previous:?}");
            }
            previous = widths;
        }
        assert_eq!(previous, vec![7, 13, 3]);
    }

    #[test]
    fn max_bound_caps_proportional_widths() {
        let bounds = vec![
            SizeBounds::new().with_pref(10).with_max(3),
            SizeBounds::new().with_pref(10),
        ];
        let grid = Grid::new(&["", ""], bounds);

        let mut rows = grid.rows(1);
        let allocation = TableSizer::new(&mut rows).set_sizes(12);
        assert_eq!(allocation, Allocation::Proportional);
        assert_eq!(text_widths(&rows), vec![vec![3, 9]]);

        let mut previous = vec![0; 2];
        for budget in 0..30 {
            let mut rows = grid.rows(1);
            TableSizer::new(&mut rows).set_sizes(budget);
            let widths = text_widths(&rows).remove(0);
            assert!(widths[0] <= 3, "budget {budget}: {widths:?}");
            for (now, before) in widths.iter().zip(&previous) {
                assert!(now >= before, "budget {budget}: {widths:?} after {previous:?}");
            }
            previous = widths;
        }
        assert_eq!(previous, vec![3, 10]);
    }

    #[test]
    fn row_padding_and_margin_shrink_first() {
        let runs = [StyledRun::plain("abcdef")];
        let cell_style = BoxStyle::new();
        let row_style = BoxStyle::new().with_margin((0u8, 2u8)).with_padding((0u8, 2u8));
        let cells = vec![CellRenderer::new(&runs, &cell_style, SizeBounds::new(), SizeBounds::new())];
        let mut rows = vec![RowRenderer::new(&row_style, cells)];
        TableSizer::new(&mut rows).set_sizes(4);

        let layers = rows[0].layers();
        // margins give way until only the borders are left, then padding
        assert_eq!(layers.external(Side::Left), 1);
        assert_eq!(layers.external(Side::Right), 1);
        assert_eq!(layers.padding().get(Side::Left), 1);
        assert_eq!(layers.padding().get(Side::Right), 1);
        assert_eq!(rows[0].cells()[0].text().text_width(), 0);
        assert_eq!(rows[0].width(), 4);
    }

    #[test]
    fn ragged_rows_share_leading_columns() {
        let short = [StyledRun::plain("a")];
        let long = [StyledRun::plain("abcd")];
        let style = BoxStyle::new();
        let bounds = SizeBounds::new();
        let mut rows = vec![
            RowRenderer::new(
                &style,
                vec![
                    CellRenderer::new(&short, &style, bounds, bounds),
                    CellRenderer::new(&short, &style, bounds, bounds),
                ],
            ),
            RowRenderer::new(&style, vec![CellRenderer::new(&long, &style, bounds, bounds)]),
        ];
        let sizer = TableSizer::new(&mut rows);
        assert_eq!(sizer.columns().len(), 2);
        sizer.set_sizes(80);
        assert_eq!(text_widths(&rows), vec![vec![4, 1], vec![4]]);
        assert_eq!(lines(&mut rows[1]), vec!["abcd"]);
    }
}
