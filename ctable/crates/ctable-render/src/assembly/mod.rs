//! Cell, row and table renderers.
//!
//! Each renderer wraps its content in the margin, border and padding its
//! [`BoxStyle`](ctable_core::style::BoxStyle) describes:
//!
//! - [`CellRenderer`]: wrapped text
//! - [`RowRenderer`]: cells side by side
//! - [`TableRenderer`]: rows stacked top to bottom
//!
//! A render builds the tree over borrowed content, calls `auto_size` with
//! the width budget, then `combine_border_corners`, then drains it.

mod cell;
mod decorated;
mod row;
mod table;

pub use cell::CellRenderer;
pub use decorated::Decorated;
pub(crate) use decorated::shrink_pair;
pub use row::RowRenderer;
pub use table::TableRenderer;
