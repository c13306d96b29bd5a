//! The renderer pipeline.
//!
//! Every layout node implements [`Renderer`]. A node goes through two
//! phases:
//!
//! 1. **Configuration**: sizes, paddings and borders may still change;
//!    [`Renderer::width`] and [`Renderer::height`] are computed on demand.
//! 2. **Frozen**: after [`Renderer::freeze`] (which freezes children first)
//!    the size is cached and setters must not be called anymore.
//!
//! Once frozen, [`Renderer::render_next_line`] emits one line per call. A
//! line cursor advances with every call inside the frozen height; past it
//! the node keeps emitting blank lines of its width, so an exhausted node
//! can always be asked for another line.

mod blank;
mod border;
mod padding;
mod sequence;
mod text;

pub use blank::Blank;
pub use border::Bordered;
pub use padding::Padding;
pub use sequence::{HSeq, VSeq};
pub use text::TextNode;

use crate::sink::Output;

/// A frozen node size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in character cells.
    pub width: usize,
    /// Height in lines.
    pub height: usize,
}

/// Per-node render state: frozen size and line cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    size: Option<Size>,
    line: usize,
}

impl Frame {
    /// An unfrozen frame at line 0.
    pub const fn new() -> Self {
        Self {
            size: None,
            line: 0,
        }
    }

    /// The frozen size, `None` while configuring.
    #[inline]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Index of the next line to render.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` once the size is fixed.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.size.is_some()
    }
}

/// Common contract of all layout nodes.
pub trait Renderer {
    /// Render state of this node.
    fn frame(&self) -> &Frame;

    /// Mutable render state of this node.
    fn frame_mut(&mut self) -> &mut Frame;

    /// Computes the current width from configuration and children.
    fn measure_width(&self) -> usize;

    /// Computes the current height from configuration and children.
    fn measure_height(&self) -> usize;

    /// Freezes child nodes and prepares anything that needs final child sizes.
    fn freeze_children(&mut self) {}

    /// Emits the content of line [`Frame::line`], exactly [`width`](Self::width) cells wide.
    fn render_line(&mut self, out: &mut Output<'_>);

    /// Emits a blank line of this node's width.
    fn render_blank(&mut self, out: &mut Output<'_>) {
        let width = self.width();
        out.blank(width);
    }

    /// Frozen width, or the measured width while configuring.
    fn width(&self) -> usize {
        self.frame()
            .size()
            .map_or_else(|| self.measure_width(), |size| size.width)
    }

    /// Frozen height, or the measured height while configuring.
    fn height(&self) -> usize {
        self.frame()
            .size()
            .map_or_else(|| self.measure_height(), |size| size.height)
    }

    /// Returns `true` once the size is fixed.
    fn is_frozen(&self) -> bool {
        self.frame().is_frozen()
    }

    /// Freezes children, then caches this node's size. A no-op when frozen.
    fn freeze(&mut self) {
        if self.is_frozen() {
            return;
        }
        self.freeze_children();
        let size = Size {
            width: self.measure_width(),
            height: self.measure_height(),
        };
        self.frame_mut().size = Some(size);
    }

    /// `true` while the line cursor is inside the height.
    fn has_more_lines(&self) -> bool {
        self.frame().line() < self.height()
    }

    /// Freezes if needed and emits the next line, or a blank one once exhausted.
    fn render_next_line(&mut self, out: &mut Output<'_>) {
        self.freeze();
        if self.has_more_lines() {
            self.render_line(out);
            self.frame_mut().line += 1;
        } else {
            self.render_blank(out);
        }
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn frame(&self) -> &Frame {
        (**self).frame()
    }

    fn frame_mut(&mut self) -> &mut Frame {
        (**self).frame_mut()
    }

    fn measure_width(&self) -> usize {
        (**self).measure_width()
    }

    fn measure_height(&self) -> usize {
        (**self).measure_height()
    }

    fn freeze_children(&mut self) {
        (**self).freeze_children();
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        (**self).render_line(out);
    }

    fn render_blank(&mut self, out: &mut Output<'_>) {
        (**self).render_blank(out);
    }
}

/// Renders every remaining line of `renderer`, each preceded by a line break.
pub fn drain<R: Renderer + ?Sized>(renderer: &mut R, out: &mut Output<'_>) {
    renderer.freeze();
    while renderer.has_more_lines() {
        out.newline();
        renderer.render_next_line(out);
    }
}
