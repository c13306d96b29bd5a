use super::{Frame, Renderer};
use crate::sink::Output;
use ctable_core::color::ColorToken;

/// A fixed-size block of spaces in its own colors.
#[derive(Debug, Clone)]
pub struct Blank {
    frame: Frame,
    width: usize,
    height: usize,
    fg: ColorToken,
    bg: ColorToken,
}

impl Blank {
    /// A `width` x `height` block in the surrounding colors.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: Frame::new(),
            width,
            height,
            fg: ColorToken::Current,
            bg: ColorToken::Current,
        }
    }

    /// Sets the fill colors.
    pub fn with_colors(mut self, fg: ColorToken, bg: ColorToken) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Sets the width while configuring.
    pub fn set_width(&mut self, width: usize) {
        debug_assert!(!self.is_frozen(), "resized a frozen node");
        self.width = width;
    }

    /// Sets the height while configuring.
    pub fn set_height(&mut self, height: usize) {
        debug_assert!(!self.is_frozen(), "resized a frozen node");
        self.height = height;
    }
}

impl Renderer for Blank {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn measure_width(&self) -> usize {
        self.width
    }

    fn measure_height(&self) -> usize {
        self.height
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        let base = out.color();
        out.apply(base, self.fg, self.bg);
        out.blank(self.width());
        out.set_color(base);
    }
}
