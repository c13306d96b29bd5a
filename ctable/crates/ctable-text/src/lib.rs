//! Styled text runs and word wrapping for `ctable`.
//!
//! Cell content is a sequence of [`StyledRun`]s: a piece of text in one pair
//! of colors, optionally ending in an explicit line break. This crate builds
//! runs from streamed text and reflows them into lines of a bounded width.
//!
//! Widths are counted in `char`s. There is no grapheme or East Asian width
//! handling.
//!
//! # Features
//!
//! - **Run accumulation**: [`RunBuffer`] splits streamed text at `\n`, `\r`
//!   and `\r\n` and keeps track of the current colors
//! - **Measurement**: natural (unwrapped) width of a run sequence
//! - **Wrapping**: greedy word wrap with hard splits for overlong words
//!
//! # Example
//!
//! ```
//! use ctable_text::{measurement::natural_width, wrap::wrap_runs, RunBuffer};
//! use std::fmt::Write;
//!
//! let mut buf = RunBuffer::new();
//! write!(buf, "hello world\nbye").unwrap();
//!
//! assert_eq!(natural_width(buf.runs()), 11);
//!
//! let lines = wrap_runs(buf.runs(), 5);
//! let text: Vec<String> = lines.iter().map(|l| l.iter().map(|s| s.text).collect()).collect();
//! assert_eq!(text, ["hello", "world", "bye"]);
//! ```

#![warn(missing_docs)]

pub mod measurement;
pub mod styled;
pub mod wrap;

pub use styled::{RunBuffer, StyledRun};
pub use wrap::{wrap_runs, Segment, WrappedLine};
