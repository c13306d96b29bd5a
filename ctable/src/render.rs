//! Rendering entry points shared by cells, rows and tables.

use crate::terminal;
use ctable_render::Renderer;
use std::fmt;
use std::io;

/// Content that lays itself out into a renderer tree.
///
/// Implementors only provide [`layout`](Render::layout); the output
/// helpers are shared.
pub trait Render {
    /// The renderer tree for this content, borrowing it.
    type Renderer<'a>: Renderer
    where
        Self: 'a;

    /// Builds the renderer tree, sizes it to `width` columns and joins the
    /// border corners. The result is frozen and ready to drain.
    fn layout(&self, width: usize) -> Self::Renderer<'_>;

    /// Renders to one plain `String` per line.
    fn render_lines(&self, width: usize) -> Vec<String> {
        ctable_render::render_lines(&mut self.layout(width))
    }

    /// Renders to text with ANSI color sequences, one `\n` after each line.
    fn render_ansi(&self, width: usize) -> String {
        terminate(ctable_render::render_ansi(&mut self.layout(width)))
    }

    /// Renders to plain text, one `\n` after each line.
    fn render_plain(&self, width: usize) -> String {
        terminate(ctable_render::render_plain(&mut self.layout(width)))
    }

    /// Writes the rendered content to `writer`.
    ///
    /// `width` defaults to the terminal's output width.
    fn write_to<W: io::Write + ?Sized>(
        &self,
        writer: &mut W,
        width: Option<usize>,
        color: bool,
    ) -> io::Result<()> {
        let width = width.unwrap_or_else(terminal::output_width);
        let text = if color {
            self.render_ansi(width)
        } else {
            self.render_plain(width)
        };
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

/// Turns the sinks' "newline before each line" into "newline after each
/// line", keeping a trailing color reset on the last line.
fn terminate(rendered: String) -> String {
    match rendered.strip_prefix('\n') {
        Some(body) => {
            let mut text = String::with_capacity(rendered.len());
            text.push_str(body);
            text.push('\n');
            text
        }
        None => rendered,
    }
}

/// Shared `Display` body: the formatter's width or the terminal's, ANSI
/// colors with `{:#}`, no trailing newline.
pub(crate) fn display<T: Render>(content: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let width = f.width().unwrap_or_else(terminal::output_width);
    let text = if f.alternate() {
        content.render_ansi(width)
    } else {
        content.render_plain(width)
    };
    f.write_str(text.strip_suffix('\n').unwrap_or(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminate_moves_newlines() {
        assert_eq!(terminate("\na\nb".to_string()), "a\nb\n");
        assert_eq!(terminate(String::new()), "");
    }
}
