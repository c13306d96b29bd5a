//! Template configuration for cells, rows and tables.
//!
//! A [`TableConfig`] holds template [`RowConfig`]s for header and body rows,
//! and each row config holds template [`CellConfig`]s. New rows and cells
//! pick their template by position with a repeat-modulo rule, see
//! [`template_index`].
//!
//! Every config type deserializes from TOML with all fields optional:
//!
//! ```
//! use ctable::config::TableConfig;
//!
//! let config = TableConfig::from_toml_str(
//!     r#"
//!     row_repeat_modulo = 2
//!
//!     [box.top]
//!     margin = 1
//!     pattern = "(─)"
//!
//!     [[rows]]
//!     [[rows.cells]]
//!     width = { max = 20 }
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.rows.len(), 1);
//! assert_eq!(config.rows[0].cells[0].width.max(), 20);
//! assert_eq!(config.style.top.margin, 1);
//! ```

use crate::error::Result;
use ctable_core::{BoxStyle, SizeBounds};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Style and size bounds of one cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    /// Border, margin, padding, colors and alignment of the cell.
    #[serde(rename = "box")]
    pub style: BoxStyle,
    /// Bounds of the text width, padding and borders excluded.
    pub width: SizeBounds,
    /// Bounds of the text height, padding and borders excluded.
    pub height: SizeBounds,
}

/// Style of a row and templates for its cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RowConfig {
    /// Templates for the cells, by position.
    pub cells: Vec<CellConfig>,
    /// How many trailing cell templates repeat past the end of `cells`.
    pub cell_repeat_modulo: usize,
    /// Border, margin, padding, colors and alignment of the row.
    #[serde(rename = "box")]
    pub style: BoxStyle,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            cell_repeat_modulo: 1,
            style: BoxStyle::default(),
        }
    }
}

impl RowConfig {
    /// The template for the cell at `index`, or the default config when
    /// there are no templates.
    pub fn cell(&self, index: usize) -> CellConfig {
        template(&self.cells, self.cell_repeat_modulo, index)
    }
}

/// Style of a table and templates for its rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Templates for header rows, by row position.
    pub headers: Vec<RowConfig>,
    /// Templates for body rows, by row position.
    pub rows: Vec<RowConfig>,
    /// How many trailing header templates repeat past the end of `headers`.
    pub header_repeat_modulo: usize,
    /// How many trailing row templates repeat past the end of `rows`.
    pub row_repeat_modulo: usize,
    /// Border, margin, padding, colors and alignment of the table.
    #[serde(rename = "box")]
    pub style: BoxStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            header_repeat_modulo: 1,
            row_repeat_modulo: 1,
            style: BoxStyle::default(),
        }
    }
}

impl TableConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded table config");
        Self::from_toml_str(&text)
    }

    /// The template for a header row at `index`.
    pub fn header(&self, index: usize) -> RowConfig {
        template(&self.headers, self.header_repeat_modulo, index)
    }

    /// The template for a body row at `index`.
    pub fn row(&self, index: usize) -> RowConfig {
        template(&self.rows, self.row_repeat_modulo, index)
    }
}

/// Picks which of `count` templates applies at position `index`.
///
/// Positions below `count` use their own template. Past the end, the last
/// `repeat_modulo` templates repeat in order; a modulo of zero or above
/// `count` repeats all of them. Returns `None` when there are no templates.
///
/// ```
/// use ctable::config::template_index;
///
/// let picks: Vec<_> = (0..7).filter_map(|i| template_index(3, 2, i)).collect();
/// assert_eq!(picks, [0, 1, 2, 1, 2, 1, 2]);
/// ```
pub fn template_index(count: usize, repeat_modulo: usize, index: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if index < count {
        return Some(index);
    }
    let modulo = if repeat_modulo == 0 || repeat_modulo > count {
        count
    } else {
        repeat_modulo
    };
    Some(count - modulo + (index - count) % modulo)
}

fn template<T: Clone + Default>(templates: &[T], repeat_modulo: usize, index: usize) -> T {
    template_index(templates.len(), repeat_modulo, index)
        .and_then(|i| templates.get(i))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ctable_core::{HAlign, Side};
    use pretty_assertions::assert_eq;

    fn picks(count: usize, modulo: usize) -> Vec<usize> {
        (0..8).filter_map(|i| template_index(count, modulo, i)).collect()
    }

    #[test]
    fn last_template_repeats_by_default() {
        assert_eq!(picks(3, 1), [0, 1, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn out_of_range_modulo_repeats_everything() {
        assert_eq!(picks(3, 0), [0, 1, 2, 0, 1, 2, 0, 1]);
        assert_eq!(picks(3, 7), [0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn no_templates() {
        assert!(picks(0, 1).is_empty());
        let config = RowConfig::default();
        assert_eq!(config.cell(4).width, SizeBounds::new());
    }

    #[test]
    fn row_config_picks_cell_templates() {
        let narrow = CellConfig {
            width: SizeBounds::new().with_max(3),
            ..CellConfig::default()
        };
        let config = RowConfig {
            cells: vec![CellConfig::default(), narrow],
            ..RowConfig::default()
        };
        assert_eq!(config.cell(0).width.max(), SizeBounds::new().max());
        assert_eq!(config.cell(1).width.max(), 3);
        assert_eq!(config.cell(5).width.max(), 3);
    }

    #[test]
    fn table_config_from_toml() {
        let config = TableConfig::from_toml_str(
            r#"
            header_repeat_modulo = 0

            [box.align]
            horizontal = "right"

            [[headers]]
            box = { fg = "bright_yellow" }

            [[rows]]
            cell_repeat_modulo = 2
            [[rows.cells]]
            box = { left = { margin = 1, pattern = "|" } }
            [[rows.cells]]
            height = { max = 1 }
            "#,
        )
        .unwrap();

        assert_eq!(config.header_repeat_modulo, 0);
        assert_eq!(config.row_repeat_modulo, 1);
        assert_eq!(config.style.align.horizontal, Some(HAlign::Right));
        assert_eq!(config.headers.len(), 1);
        let row = config.row(3);
        assert_eq!(row.cell_repeat_modulo, 2);
        assert!(row.cells[0].style.has_border(Side::Left));
        assert_eq!(row.cells[1].height.max(), 1);
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = TableConfig::from_toml_str("box = { fg = \"mauve\" }").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
