//! Tables.

use crate::config::TableConfig;
use crate::render::{self, Render};
use crate::row::Row;
use ctable_render::TableRenderer;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Rows of cells with a [`TableConfig`].
///
/// Header and body rows are configured from separate template lists. The
/// template is picked by the row's position in the whole table, headers and
/// body rows counted together.
///
/// ```
/// use ctable::{Render, Table};
/// use ctable::core::{BoxStyle, CornerMerge};
/// use std::fmt::Write;
///
/// let mut table = Table::new();
/// table.config_mut().style = BoxStyle::new()
///     .with_margin(1)
///     .with_pattern(("─", "│"))
///     .with_corners(CornerMerge::BoxDrawing);
///
/// write!(table.push_row().push_cell(), "hello world").unwrap();
/// assert_eq!(table.render_lines(7), ["┌─────┐", "│hello│", "│world│", "└─────┘"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    config: TableConfig,
}

impl Table {
    /// An empty table with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table with `config`.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            rows: Vec::new(),
            config,
        }
    }

    /// The table's config.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The table's config, mutably.
    pub fn config_mut(&mut self) -> &mut TableConfig {
        &mut self.config
    }

    /// Adds an empty body row configured from the template for its position.
    pub fn push_row(&mut self) -> &mut Row {
        let index = self.rows.len();
        self.insert_row(index)
    }

    /// Adds an empty header row configured from the template for its position.
    pub fn push_header(&mut self) -> &mut Row {
        let index = self.rows.len();
        self.insert_header(index)
    }

    /// Inserts an empty body row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_row(&mut self, index: usize) -> &mut Row {
        let row = Row::with_config(self.config.row(index));
        self.rows.insert(index, row);
        &mut self.rows[index]
    }

    /// Inserts an empty header row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_header(&mut self, index: usize) -> &mut Row {
        let row = Row::header(self.config.header(index));
        self.rows.insert(index, row);
        &mut self.rows[index]
    }

    /// Adds a row as is, keeping its own config.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Adds a templated copy of `row`: a new header or body row, with one
    /// templated cell per source cell.
    pub fn append_row(&mut self, row: &Row) {
        let target = if row.is_header() {
            self.push_header()
        } else {
            self.push_row()
        };
        target.append_row(row);
    }

    /// Adds a templated copy of every row of `other`.
    pub fn append_table(&mut self, other: &Table) {
        self.rows.reserve(other.len());
        for row in other {
            self.append_row(row);
        }
    }

    /// The rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The rows in order, mutably.
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Number of rows, headers included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The last row, a new body row if the table is empty.
    pub fn last_row(&mut self) -> &mut Row {
        if self.rows.is_empty() {
            return self.push_row();
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub(crate) fn renderer(&self) -> TableRenderer<'_> {
        TableRenderer::new(
            &self.config.style,
            self.rows.iter().map(Row::renderer).collect(),
        )
    }
}

impl Index<usize> for Table {
    type Output = Row;

    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Table {
    fn index_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }
}

impl<'t> IntoIterator for &'t Table {
    type Item = &'t Row;
    type IntoIter = std::slice::Iter<'t, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Write for Table {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.last_row().write_str(s)
    }
}

impl Render for Table {
    type Renderer<'a> = TableRenderer<'a>;

    fn layout(&self, width: usize) -> TableRenderer<'_> {
        let mut renderer = self.renderer();
        renderer.auto_size(width);
        renderer.combine_border_corners();
        renderer
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::display(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowConfig;
    use ctable_core::{BoxStyle, HAlign};
    use pretty_assertions::assert_eq;
    use std::fmt::Write;

    fn aligned(align: HAlign) -> RowConfig {
        RowConfig {
            style: BoxStyle::new().with_horizontal_align(align),
            ..RowConfig::default()
        }
    }

    fn config() -> TableConfig {
        TableConfig {
            headers: vec![aligned(HAlign::Center)],
            rows: vec![aligned(HAlign::Left), aligned(HAlign::Right)],
            row_repeat_modulo: 0,
            ..TableConfig::default()
        }
    }

    fn alignments(table: &Table) -> Vec<Option<HAlign>> {
        table.iter().map(|row| row.config().style.align.horizontal).collect()
    }

    #[test]
    fn row_templates_by_table_position() {
        let mut table = Table::with_config(config());
        table.push_header();
        table.push_row();
        table.push_row();
        table.push_row();
        table.push_header();
        assert_eq!(
            alignments(&table),
            [
                Some(HAlign::Center),
                Some(HAlign::Right),
                Some(HAlign::Left),
                Some(HAlign::Right),
                Some(HAlign::Center),
            ]
        );
        assert!(table[0].is_header());
        assert!(!table[1].is_header());
    }

    #[test]
    fn append_table_retemplates_rows() {
        let mut source = Table::new();
        write!(source.push_header().push_cell(), "name").unwrap();
        write!(source.push_row().push_cell(), "x").unwrap();

        let mut table = Table::with_config(config());
        table.append_table(&source);
        assert_eq!(alignments(&table), [Some(HAlign::Center), Some(HAlign::Right)]);
        assert!(table[0].is_header());
        assert_eq!(table[1][0].runs()[0].text, "x");
    }

    #[test]
    fn writing_creates_row_and_cell() {
        let mut table = Table::new();
        write!(table, "a").unwrap();
        assert_eq!((table.len(), table[0].len()), (1, 1));
        assert_eq!(table.render_lines(80), ["a"]);
    }

    #[test]
    fn display_pads_columns() {
        let mut table = Table::new();
        let header = table.push_header();
        write!(header.push_cell(), "key").unwrap();
        write!(header.push_cell(), "value").unwrap();
        let row = table.push_row();
        write!(row.push_cell(), "a").unwrap();
        write!(row.push_cell(), "1").unwrap();
        assert_eq!(format!("{table:80}"), "keyvalue\na  1    ");
    }
}
