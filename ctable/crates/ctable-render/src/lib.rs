//! Layout and rendering engine for `ctable`.
//!
//! Tables are rendered by building a tree of [`node::Renderer`]s over the
//! borrowed content, negotiating sizes with the [`sizer`]s and then emitting
//! the frozen tree one line at a time into a [`sink::Sink`].
//!
//! # Modules
//!
//! - [`pattern`]: the border pattern language
//! - [`sink`]: output sinks and color tracking
//! - [`node`]: padding, border, sequence and text nodes
//! - [`sizer`]: column, row and table width/height solvers
//! - [`assembly`]: cell, row and table renderers built from the nodes
//!
//! # Example
//!
//! ```
//! use ctable_core::{BoxStyle, SizeBounds};
//! use ctable_render::assembly::CellRenderer;
//! use ctable_render::render_lines;
//! use ctable_text::StyledRun;
//!
//! let runs = [StyledRun::plain("hello world")];
//! let style = BoxStyle::new().with_margin(1).with_pattern(("-", "|"));
//!
//! let mut cell = CellRenderer::new(&runs, &style, SizeBounds::new(), SizeBounds::new());
//! cell.auto_size(7);
//! cell.combine_border_corners();
//!
//! assert_eq!(render_lines(&mut cell), ["-------", "|hello|", "|world|", "-------"]);
//! ```

#![warn(missing_docs)]

pub mod assembly;
pub mod node;
pub mod pattern;
pub mod sink;
pub mod sizer;

pub use assembly::{CellRenderer, RowRenderer, TableRenderer};
pub use node::{drain, Renderer};
pub use sink::{AnsiSink, LineCollector, Output, PlainSink, Sink};

/// Drains `renderer` into one `String` per line, without colors.
pub fn render_lines<R: Renderer + ?Sized>(renderer: &mut R) -> Vec<String> {
    let mut collector = LineCollector::new();
    {
        let mut out = Output::new(&mut collector);
        drain(renderer, &mut out);
    }
    collector.into_lines()
}

/// Drains `renderer` into a string with ANSI color sequences.
///
/// Every line, including the first, is preceded by a newline; the output
/// ends in the terminal's default colors.
pub fn render_ansi<R: Renderer + ?Sized>(renderer: &mut R) -> String {
    let mut sink = AnsiSink::new();
    {
        let mut out = Output::new(&mut sink);
        drain(renderer, &mut out);
        out.finish();
    }
    sink.into_string()
}

/// Drains `renderer` into a string of plain text lines.
///
/// Every line, including the first, is preceded by a newline.
pub fn render_plain<R: Renderer + ?Sized>(renderer: &mut R) -> String {
    let mut sink = PlainSink::new();
    {
        let mut out = Output::new(&mut sink);
        drain(renderer, &mut out);
    }
    sink.into_string()
}
