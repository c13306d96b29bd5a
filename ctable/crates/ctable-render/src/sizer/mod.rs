//! Width and height solvers.
//!
//! Sizes are negotiated before anything freezes. A [`TableSizer`] collects
//! one [`ColumnSizer`] per grid column, splits the row width budget between
//! them and then runs a [`RowSizer`] over every row, since wrapped heights
//! depend on the widths just assigned.
//!
//! Every sizer works in two steps: accumulate bounds from the renderers, then
//! write the decided sizes back into them. Budgets that are too small never
//! fail; margins and padding shrink first, larger side first, and content
//! ends up zero-sized at worst.

mod column;
mod row;
mod table;

pub use column::ColumnSizer;
pub use row::RowSizer;
pub use table::{Allocation, TableSizer};
