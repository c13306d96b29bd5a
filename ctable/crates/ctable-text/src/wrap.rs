//! Greedy word wrapping of styled runs.
//!
//! [`wrap_runs`] lays runs out left to right, line by line:
//!
//! - a run that fits in the rest of the line is appended whole
//! - otherwise it is split at the last space that still fits, the space is
//!   dropped and so are any spaces starting the next line
//! - with no usable space the whole run moves to a fresh line if it fits there
//! - failing that it is hard-split at the line boundary
//!
//! A run with a forced break always ends its line. Widths are `char` counts.

use crate::measurement::{byte_offset, char_len};
use crate::styled::StyledRun;
use ctable_core::color::ColorToken;
use smallvec::SmallVec;

/// A slice of one run placed on one wrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of this piece.
    pub text: &'a str,
    /// Foreground token of the source run.
    pub fg: ColorToken,
    /// Background token of the source run.
    pub bg: ColorToken,
}

impl Segment<'_> {
    /// Width in `char`s.
    #[inline]
    pub fn char_len(&self) -> usize {
        char_len(self.text)
    }
}

/// The segments of one output line.
pub type WrappedLine<'a> = SmallVec<[Segment<'a>; 4]>;

/// Total width of a wrapped line in `char`s.
pub fn line_len(line: &[Segment<'_>]) -> usize {
    line.iter().map(Segment::char_len).sum()
}

/// Wraps runs into lines no wider than `width`.
///
/// Returns no lines when `width` is zero or there are no runs. A trailing
/// forced break leaves an empty last line.
///
/// # Example
///
/// ```
/// use ctable_text::{wrap::{line_len, wrap_runs}, StyledRun};
///
/// let runs = [StyledRun::plain("the quick brown fox")];
/// let lines = wrap_runs(&runs, 10);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0][0].text, "the quick");
/// assert!(lines.iter().all(|l| line_len(l) <= 10));
/// ```
pub fn wrap_runs(runs: &[StyledRun], width: usize) -> Vec<WrappedLine<'_>> {
    if width == 0 || runs.is_empty() {
        return Vec::new();
    }

    let mut wrapper = Wrapper {
        lines: vec![WrappedLine::new()],
        width,
        remaining: width,
    };
    for run in runs {
        wrapper.add_run(run);
    }
    wrapper.lines
}

struct Wrapper<'a> {
    lines: Vec<WrappedLine<'a>>,
    width: usize,
    remaining: usize,
}

impl<'a> Wrapper<'a> {
    fn push(&mut self, text: &'a str, run: &StyledRun) {
        if text.is_empty() {
            return;
        }
        let segment = Segment {
            text,
            fg: run.fg,
            bg: run.bg,
        };
        if let Some(line) = self.lines.last_mut() {
            line.push(segment);
        }
    }

    fn new_line(&mut self) {
        self.lines.push(WrappedLine::new());
        self.remaining = self.width;
    }

    /// Last space at a char position `p <= remaining`; on a fresh line `p`
    /// must be positive so the line does not come out empty.
    fn soft_split(&self, text: &str) -> Option<usize> {
        let fresh = self.remaining == self.width;
        text.char_indices()
            .take(self.remaining + 1)
            .enumerate()
            .filter(|&(pos, (_, ch))| ch == ' ' && (pos > 0 || !fresh))
            .last()
            .map(|(_, (byte, _))| byte)
    }

    fn add_run(&mut self, run: &'a StyledRun) {
        let mut text = run.text.as_str();

        loop {
            let len = char_len(text);

            if self.remaining >= len {
                self.push(text, run);
                self.remaining -= len;
                if run.forced_break {
                    self.new_line();
                }
                return;
            }

            if let Some(split) = self.soft_split(text) {
                self.push(&text[..split], run);
                self.new_line();
                text = text[split..].trim_start_matches(' ');
                continue;
            }

            if self.width >= len {
                self.new_line();
                self.push(text, run);
                self.remaining = self.width - len;
                if run.forced_break {
                    self.new_line();
                }
                return;
            }

            let split = byte_offset(text, self.remaining);
            self.push(&text[..split], run);
            self.new_line();
            text = &text[split..];
        }
    }
}
