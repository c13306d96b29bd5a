//! ctable: console tables with word-wrapped cells, pattern borders and
//! palette colors.
//!
//! Content is built from [`Table`]s, [`Row`]s and [`Cell`]s. Text goes into
//! cells through [`std::fmt::Write`]; styles and size bounds come from
//! template configs ([`config`]), which can also be loaded from TOML.
//!
//! Anything that implements [`Render`] can be laid out for a width budget and
//! rendered to plain lines, to ANSI-colored text or through `Display`:
//! `{}` renders plain, `{:#}` with colors, and `{:40}` picks the width. Without
//! a width, the terminal's width minus one is used.
//!
//! The layout engine itself lives in the re-exported crates:
//!
//! - [`core`]: colors, box styles, size bounds and corner merges
//! - [`text`]: styled runs and word wrapping
//! - [`engine`]: border patterns, renderer nodes and width solvers
//!
//! # Example
//!
//! ```
//! use ctable::config::{CellConfig, RowConfig, TableConfig};
//! use ctable::core::BoxStyle;
//! use ctable::{Render, Table};
//! use std::fmt::Write;
//!
//! let divider = CellConfig {
//!     style: BoxStyle::new().with_margin((0, 2, 0, 0)).with_pattern("|"),
//!     ..CellConfig::default()
//! };
//! let mut table = Table::with_config(TableConfig {
//!     rows: vec![RowConfig {
//!         cells: vec![divider, CellConfig::default()],
//!         ..RowConfig::default()
//!     }],
//!     ..TableConfig::default()
//! });
//!
//! for (name, size) in [("Cargo.toml", "1.2K"), ("src", "4.0K")] {
//!     let row = table.push_row();
//!     write!(row.push_cell(), "{name}").unwrap();
//!     write!(row.push_cell(), "{size}").unwrap();
//! }
//!
//! assert_eq!(table.render_lines(80), ["Cargo.toml| 1.2K", "src       | 4.0K"]);
//! ```

#![warn(missing_docs)]

pub mod cell;
pub mod config;
pub mod error;
pub mod render;
pub mod row;
pub mod table;
pub mod terminal;

pub use ctable_core as core;
pub use ctable_render as engine;
pub use ctable_text as text;

pub use cell::Cell;
pub use config::{CellConfig, RowConfig, TableConfig};
pub use error::{Error, Result};
pub use render::Render;
pub use row::Row;
pub use table::Table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{CellConfig, RowConfig, TableConfig};
    pub use crate::render::Render;
    pub use crate::{Cell, Row, Table};
    pub use ctable_core::prelude::*;
}
