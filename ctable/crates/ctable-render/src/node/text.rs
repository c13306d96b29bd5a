use super::{Frame, Renderer};
use crate::sink::Output;
use ctable_core::bounds::SizeBounds;
use ctable_core::style::{Alignment, HAlign, VAlign};
use ctable_text::measurement::{byte_offset, natural_width};
use ctable_text::wrap::{line_len, wrap_runs, WrappedLine};
use ctable_text::StyledRun;

/// Wrapped, aligned cell text.
///
/// The node borrows the cell's runs. Its width is assigned by a sizer with
/// [`set_width`](Self::set_width), which rewraps the text; its height with
/// [`set_height`](Self::set_height). Lines beyond the wrapped text are blank.
#[derive(Debug, Clone)]
pub struct TextNode<'a> {
    frame: Frame,
    runs: &'a [StyledRun],
    width_bounds: SizeBounds,
    height_bounds: SizeBounds,
    natural_width: usize,
    width: usize,
    height: usize,
    lines: Vec<WrappedLine<'a>>,
    align: Alignment,
}

impl<'a> TextNode<'a> {
    /// Creates a node of size 0x0 over `runs`.
    pub fn new(runs: &'a [StyledRun], width_bounds: SizeBounds, height_bounds: SizeBounds) -> Self {
        Self {
            frame: Frame::new(),
            runs,
            width_bounds,
            height_bounds,
            natural_width: natural_width(runs),
            width: 0,
            height: 0,
            lines: Vec::new(),
            align: Alignment::INHERIT,
        }
    }

    /// Sets the alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Configured minimum width.
    pub fn min_width(&self) -> usize {
        self.width_bounds.min()
    }

    /// Configured maximum width.
    pub fn max_width(&self) -> usize {
        self.width_bounds.max()
    }

    /// Configured preferred width, or the widest unwrapped line.
    pub fn pref_width(&self) -> usize {
        self.width_bounds.pref().unwrap_or(self.natural_width)
    }

    /// Configured minimum height.
    pub fn min_height(&self) -> usize {
        self.height_bounds.min()
    }

    /// Configured maximum height.
    pub fn max_height(&self) -> usize {
        self.height_bounds.max()
    }

    /// Number of lines when wrapped at `width`.
    ///
    /// Reuses the current wrap when `width` is the assigned width.
    pub fn pref_height(&self, width: usize) -> usize {
        if width == 0 {
            0
        } else if width == self.width {
            self.lines.len()
        } else {
            wrap_runs(self.runs, width).len()
        }
    }

    /// Assigned width.
    pub fn text_width(&self) -> usize {
        self.width
    }

    /// Assigns the width and rewraps.
    pub fn set_width(&mut self, width: usize) {
        debug_assert!(!self.is_frozen(), "text resized after freeze");
        self.width = width;
        self.lines = wrap_runs(self.runs, width);
    }

    /// Assigns the height.
    pub fn set_height(&mut self, height: usize) {
        debug_assert!(!self.is_frozen(), "text resized after freeze");
        self.height = height;
    }

    /// Current alignment.
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Replaces the alignment.
    pub fn set_align(&mut self, align: Alignment) {
        self.align = align;
    }

    /// Index into the wrapped lines for output line `line`, after vertical alignment.
    fn wrapped_index(&self, line: usize) -> Option<usize> {
        let count = self.lines.len();
        let offset = if count < self.height {
            match self.align.vertical_or_default() {
                VAlign::Top => 0,
                VAlign::Middle => (self.height - count) >> 1,
                VAlign::Bottom => self.height - count,
            }
        } else {
            0
        };
        line.checked_sub(offset).filter(|&index| index < count)
    }
}

impl Renderer for TextNode<'_> {
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
        let width = self.width;
        let Some(line) = self
            .wrapped_index(self.frame.line())
            .and_then(|index| self.lines.get(index))
        else {
            out.blank(width);
            return;
        };

        let len = line_len(line);
        let mut written = 0;
        if len < width {
            written = match self.align.horizontal_or_default() {
                HAlign::Left => 0,
                HAlign::Center => (width - len) >> 1,
                HAlign::Right => width - len,
            };
            out.blank(written);
        }

        let base = out.color();
        for segment in line {
            out.apply(base, segment.fg, segment.bg);
            let len = segment.char_len();
            if written + len <= width {
                out.text(segment.text);
                written += len;
            } else {
                let fits = width - written;
                out.text(&segment.text[..byte_offset(segment.text, fits)]);
                written = width;
                break;
            }
        }
        out.set_color(base);
        out.blank(width - written);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::testing::lines;
    use crate::sink::{AnsiSink, Output};
    use ctable_core::color::{ColorToken, PaletteColor};
    use pretty_assertions::assert_eq;

    fn node(runs: &[StyledRun], width: usize, height: usize, align: Alignment) -> TextNode<'_> {
        let mut node = TextNode::new(runs, SizeBounds::new(), SizeBounds::new()).with_align(align);
        node.set_width(width);
        node.set_height(height);
        node
    }

    #[test]
    fn pref_width_is_longest_unwrapped_line() {
        let runs = [
            StyledRun::plain("ab"),
            StyledRun::plain("cde").with_break(),
            StyledRun::plain("fghijk"),
        ];
        let text = TextNode::new(&runs, SizeBounds::new(), SizeBounds::new());
        assert_eq!(text.pref_width(), 6);
        assert_eq!(text.min_width(), 0);
        assert_eq!(text.max_width(), 32767);

        let text = TextNode::new(&runs, SizeBounds::new().with_pref(3), SizeBounds::new());
        assert_eq!(text.pref_width(), 3);
    }

    #[test]
    fn pref_height_follows_width() {
        let runs = [StyledRun::plain("hello world")];
        let mut text = TextNode::new(&runs, SizeBounds::new(), SizeBounds::new());
        assert_eq!(text.pref_height(0), 0);
        assert_eq!(text.pref_height(11), 1);
        assert_eq!(text.pref_height(5), 2);
        text.set_width(5);
        assert_eq!(text.pref_height(5), 2);
        assert_eq!(text.pref_height(3), 4);
    }

    #[test]
    fn renders_left_aligned_and_filled() {
        let runs = [StyledRun::plain("hello world")];
        let mut text = node(&runs, 7, 3, Alignment::INHERIT);
        assert_eq!(lines(&mut text), vec!["hello  ", "world  ", "       "]);
    }

    #[test]
    fn horizontal_alignment() {
        let runs = [StyledRun::plain("ab")];
        let align = |h| Alignment {
            horizontal: Some(h),
            vertical: None,
        };
        assert_eq!(lines(&mut node(&runs, 7, 1, align(HAlign::Center))), vec!["  ab   "]);
        assert_eq!(lines(&mut node(&runs, 7, 1, align(HAlign::Right))), vec!["     ab"]);
    }

    #[test]
    fn vertical_alignment() {
        let runs = [StyledRun::plain("x")];
        let align = |v| Alignment {
            horizontal: None,
            vertical: Some(v),
        };
        assert_eq!(
            lines(&mut node(&runs, 1, 4, align(VAlign::Middle))),
            vec![" ", "x", " ", " "]
        );
        assert_eq!(
            lines(&mut node(&runs, 1, 3, align(VAlign::Bottom))),
            vec![" ", " ", "x"]
        );
    }

    #[test]
    fn truncates_when_height_is_short() {
        let runs = [StyledRun::plain("aaa bbb ccc")];
        let mut text = node(&runs, 3, 2, Alignment::INHERIT);
        assert_eq!(lines(&mut text), vec!["aaa", "bbb"]);
    }

    #[test]
    fn zero_width_renders_nothing() {
        let runs = [StyledRun::plain("abc")];
        let mut text = node(&runs, 0, 2, Alignment::INHERIT);
        assert_eq!(lines(&mut text), vec!["", ""]);
    }

    #[test]
    fn segments_resolve_against_line_color() {
        let red = ColorToken::Explicit(PaletteColor::Red);
        let runs = [
            StyledRun::new("r", red, ColorToken::Current),
            StyledRun::plain("p"),
        ];
        let mut text = node(&runs, 2, 1, Alignment::INHERIT);
        let mut sink = AnsiSink::new();
        {
            let mut out = Output::new(&mut sink);
            text.render_next_line(&mut out);
            // the plain run goes back to the ambient color
            assert_eq!(out.color(), ctable_core::color::ColorState::DEFAULT);
        }
        let ansi = sink.into_string();
        assert!(ansi.contains('r'));
        assert!(ansi.ends_with("\x1b[0mp"));
    }
}
