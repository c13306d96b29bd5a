//! Table rows.

use crate::cell::Cell;
use crate::config::RowConfig;
use crate::render::{self, Render};
use ctable_render::RowRenderer;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A row of cells with its [`RowConfig`].
///
/// New cells take their config from the row's cell templates by position.
/// Writing to a row writes to its last cell, adding one if the row is empty.
///
/// ```
/// use ctable::{Render, Row};
/// use std::fmt::Write;
///
/// let mut row = Row::new();
/// write!(row.push_cell(), "left").unwrap();
/// write!(row.push_cell(), "right").unwrap();
/// assert_eq!(row.render_lines(80), ["leftright"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<Cell>,
    config: RowConfig,
    header: bool,
}

impl Row {
    /// An empty body row with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty body row with `config`.
    pub fn with_config(config: RowConfig) -> Self {
        Self {
            cells: Vec::new(),
            config,
            header: false,
        }
    }

    /// An empty header row with `config`.
    pub fn header(config: RowConfig) -> Self {
        Self {
            header: true,
            ..Self::with_config(config)
        }
    }

    /// Returns `true` for header rows.
    pub fn is_header(&self) -> bool {
        self.header
    }

    /// Marks the row as a header or body row.
    pub fn set_header(&mut self, header: bool) {
        self.header = header;
    }

    /// The row's config.
    pub fn config(&self) -> &RowConfig {
        &self.config
    }

    /// The row's config, mutably.
    pub fn config_mut(&mut self) -> &mut RowConfig {
        &mut self.config
    }

    /// Adds an empty cell configured from the template for its position.
    pub fn push_cell(&mut self) -> &mut Cell {
        let index = self.cells.len();
        self.insert_cell(index)
    }

    /// Inserts an empty cell at `index`, configured from the template for
    /// that position.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_cell(&mut self, index: usize) -> &mut Cell {
        let cell = Cell::with_config(self.config.cell(index));
        self.cells.insert(index, cell);
        &mut self.cells[index]
    }

    /// Adds a cell as is, keeping its own config.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Adds one templated cell per cell of `other`, copying their text.
    pub fn append_row(&mut self, other: &Row) {
        self.cells.reserve(other.len());
        for cell in other {
            self.push_cell().append(cell);
        }
    }

    /// The cells in order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells in order, mutably.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterates over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The last cell, added on demand.
    pub fn last_cell(&mut self) -> &mut Cell {
        if self.cells.is_empty() {
            return self.push_cell();
        }
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    pub(crate) fn renderer(&self) -> RowRenderer<'_> {
        RowRenderer::new(
            &self.config.style,
            self.cells.iter().map(Cell::renderer).collect(),
        )
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}

impl<'r> IntoIterator for &'r Row {
    type Item = &'r Cell;
    type IntoIter = std::slice::Iter<'r, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Write for Row {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.last_cell().write_str(s)
    }
}

impl Render for Row {
    type Renderer<'a> = RowRenderer<'a>;

    fn layout(&self, width: usize) -> RowRenderer<'_> {
        let mut renderer = self.renderer();
        renderer.auto_size(width);
        renderer.combine_border_corners();
        renderer
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::display(self, f)
    }
}
