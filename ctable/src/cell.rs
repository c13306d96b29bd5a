//! Table cells.

use crate::config::CellConfig;
use crate::render::{self, Render};
use ctable_core::ColorToken;
use ctable_render::CellRenderer;
use ctable_text::{RunBuffer, StyledRun};
use std::fmt;

/// One cell: styled text plus its [`CellConfig`].
///
/// Text is written with [`std::fmt::Write`]; `\n`, `\r` and `\r\n` become
/// forced line breaks.
///
/// ```
/// use ctable::{Cell, Render};
/// use std::fmt::Write;
///
/// let mut cell = Cell::new();
/// write!(cell, "hello world").unwrap();
/// assert_eq!(cell.render_lines(5), ["hello", "world"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cell {
    text: RunBuffer,
    config: CellConfig,
}

impl Cell {
    /// An empty cell with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cell with `config`.
    pub fn with_config(config: CellConfig) -> Self {
        Self {
            text: RunBuffer::new(),
            config,
        }
    }

    /// The cell's config.
    pub fn config(&self) -> &CellConfig {
        &self.config
    }

    /// The cell's config, mutably.
    pub fn config_mut(&mut self) -> &mut CellConfig {
        &mut self.config
    }

    /// The text written so far.
    pub fn runs(&self) -> &[StyledRun] {
        self.text.runs()
    }

    /// Colors for text written from now on.
    ///
    /// A pair of `Current` tokens is ignored: it neither resets the colors
    /// nor ends the current run.
    pub fn set_color(&mut self, fg: ColorToken, bg: ColorToken) {
        if fg.is_current() && bg.is_current() {
            return;
        }
        self.text.set_color(fg, bg);
    }

    /// Appends a copy of `other`'s text; this cell's config and colors stay.
    pub fn append(&mut self, other: &Cell) {
        self.text.extend_from_runs(other.runs());
    }

    /// Returns `true` if no text was written.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn renderer(&self) -> CellRenderer<'_> {
        CellRenderer::new(
            self.text.runs(),
            &self.config.style,
            self.config.width,
            self.config.height,
        )
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        let mut cell = Self::new();
        cell.text.push_str(text);
        cell
    }
}

impl fmt::Write for Cell {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl Render for Cell {
    type Renderer<'a> = CellRenderer<'a>;

    fn layout(&self, width: usize) -> CellRenderer<'_> {
        let mut renderer = self.renderer();
        renderer.auto_size(width);
        renderer.combine_border_corners();
        renderer
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::display(self, f)
    }
}
