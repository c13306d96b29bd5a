use super::{Frame, Renderer};
use crate::sink::Output;
use ctable_core::color::ColorToken;
use ctable_core::style::{Edges, Side};

/// Blank space around an inner node, filled in the padding's own colors.
///
/// The first `top` lines are entirely blank. Every following line is `left`
/// blanks, one line of the inner node and `right` blanks; once the inner node
/// is exhausted it contributes blank lines, which make up the bottom padding.
/// The padding colors are also the ambient colors the inner line resolves
/// against.
#[derive(Debug, Clone)]
pub struct Padding<R> {
    frame: Frame,
    inner: R,
    amount: Edges<usize>,
    fg: ColorToken,
    bg: ColorToken,
}

impl<R: Renderer> Padding<R> {
    /// Wraps `inner` with no padding in the surrounding colors.
    pub fn new(inner: R) -> Self {
        Self {
            frame: Frame::new(),
            inner,
            amount: Edges::default(),
            fg: ColorToken::Current,
            bg: ColorToken::Current,
        }
    }

    /// Sets all four amounts CSS-style.
    pub fn with_amount(mut self, amount: impl Into<Edges<usize>>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Sets the fill colors.
    pub fn with_colors(mut self, fg: ColorToken, bg: ColorToken) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Padding on one side.
    pub fn get(&self, side: Side) -> usize {
        *self.amount.get(side)
    }

    /// Sets the padding on one side while configuring.
    pub fn set(&mut self, side: Side, amount: usize) {
        debug_assert!(!self.is_frozen(), "padding changed after freeze");
        match side {
            Side::Top => self.amount.top = amount,
            Side::Right => self.amount.right = amount,
            Side::Bottom => self.amount.bottom = amount,
            Side::Left => self.amount.left = amount,
        }
    }

    /// Left plus right padding.
    pub fn horizontal(&self) -> usize {
        self.amount.left + self.amount.right
    }

    /// Top plus bottom padding.
    pub fn vertical(&self) -> usize {
        self.amount.top + self.amount.bottom
    }

    /// The wrapped node.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// The wrapped node, mutably.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }
}

impl<R: Renderer> Renderer for Padding<R> {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn measure_width(&self) -> usize {
        self.inner.width() + self.horizontal()
    }

    fn measure_height(&self) -> usize {
        self.inner.height() + self.vertical()
    }

    fn freeze_children(&mut self) {
        self.inner.freeze();
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        let base = out.color();
        out.apply(base, self.fg, self.bg);
        if self.frame.line() < self.amount.top {
            out.blank(self.width());
        } else {
            out.blank(self.amount.left);
            self.inner.render_next_line(out);
            out.blank(self.amount.right);
        }
        out.set_color(base);
    }
}
