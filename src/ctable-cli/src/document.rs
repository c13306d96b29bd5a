//! Table documents.
//!
//! A document is a TOML file with the table config and its rows:
//!
//! ```toml
//! [table.box.top]
//! margin = 1
//! pattern = "(─)"
//!
//! [[rows]]
//! header = true
//! cells = ["name", "size"]
//!
//! [[rows]]
//! cells = ["Cargo.toml", { text = "1.2K", fg = "bright_green" }]
//! ```
//!
//! Rows and cells without their own `config` take the table's templates.

use anyhow::{Context, Result};
use ctable::core::ColorToken;
use ctable::{Cell, CellConfig, Row, RowConfig, Table, TableConfig};
use serde::Deserialize;
use std::fmt::Write;

/// A parsed table document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Table style and row templates.
    pub table: TableConfig,
    /// Rows in order.
    pub rows: Vec<RowSpec>,
}

/// One row of a document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RowSpec {
    /// Header rows use the header templates.
    pub header: bool,
    /// Overrides the template for this row.
    pub config: Option<RowConfig>,
    /// Cells in order.
    pub cells: Vec<CellSpec>,
}

/// One cell of a document: plain text or text with colors and config.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CellSpec {
    /// Text in the surrounding colors.
    Text(String),
    /// Text with optional colors and config.
    Styled {
        /// Cell text.
        text: String,
        /// Text foreground.
        #[serde(default)]
        fg: ColorToken,
        /// Text background.
        #[serde(default)]
        bg: ColorToken,
        /// Overrides the template for this cell.
        #[serde(default)]
        config: Option<CellConfig>,
    },
}

impl Document {
    /// Parses a document from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse table document")
    }

    /// Builds the table the document describes.
    pub fn build(&self) -> Result<Table> {
        let mut table = Table::with_config(self.table.clone());
        for spec in &self.rows {
            let row = match &spec.config {
                Some(config) => {
                    let mut row = Row::with_config(config.clone());
                    row.set_header(spec.header);
                    table.push(row);
                    table.last_row()
                }
                None if spec.header => table.push_header(),
                None => table.push_row(),
            };
            for cell in &spec.cells {
                add_cell(row, cell)?;
            }
        }
        tracing::debug!(rows = table.len(), "built table from document");
        Ok(table)
    }
}

fn add_cell(row: &mut Row, spec: &CellSpec) -> Result<()> {
    match spec {
        CellSpec::Text(text) => write!(row.push_cell(), "{text}")?,
        CellSpec::Styled {
            text,
            fg,
            bg,
            config,
        } => {
            let cell = match config {
                Some(config) => {
                    row.push(Cell::with_config(config.clone()));
                    row.last_cell()
                }
                None => row.push_cell(),
            };
            cell.set_color(*fg, *bg);
            write!(cell, "{text}")?;
        }
    }
    Ok(())
}
