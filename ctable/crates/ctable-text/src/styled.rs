//! Styled text runs and their accumulation from streamed text.

use crate::measurement::char_len;
use ctable_core::color::ColorToken;
use std::fmt;

/// A piece of cell text in one pair of colors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledRun {
    /// The text, without line terminators.
    pub text: String,
    /// Foreground token.
    pub fg: ColorToken,
    /// Background token.
    pub bg: ColorToken,
    /// The source had an explicit line break after this run.
    pub forced_break: bool,
}

impl StyledRun {
    /// Creates a run without a trailing break.
    pub fn new(text: impl Into<String>, fg: ColorToken, bg: ColorToken) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
            forced_break: false,
        }
    }

    /// Creates a run in the surrounding colors.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, ColorToken::Current, ColorToken::Current)
    }

    /// Marks the run as ending in an explicit line break.
    pub fn with_break(mut self) -> Self {
        self.forced_break = true;
        self
    }

    /// Width of the run in `char`s.
    #[inline]
    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}

/// Accumulates streamed text into [`StyledRun`]s.
///
/// Text is split at `\n`, `\r` and `\r\n`; a `\r\n` pair yields a single
/// break even when the two halves arrive in separate writes. Consecutive text
/// in the same colors on the same line is merged into one run.
///
/// ```
/// use ctable_core::color::{ColorToken, PaletteColor};
/// use ctable_text::RunBuffer;
///
/// let mut buf = RunBuffer::new();
/// buf.push_str("plain ");
/// buf.set_color(PaletteColor::Red.into(), ColorToken::Current);
/// buf.push_str("red\r\nnext");
///
/// let runs = buf.runs();
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs[1].text, "red");
/// assert!(runs[1].forced_break);
/// assert_eq!(runs[2].fg, ColorToken::Explicit(PaletteColor::Red));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunBuffer {
    runs: Vec<StyledRun>,
    fg: ColorToken,
    bg: ColorToken,
    after_cr: bool,
}

impl RunBuffer {
    /// Creates an empty buffer in the surrounding colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current foreground and background tokens.
    pub fn color(&self) -> (ColorToken, ColorToken) {
        (self.fg, self.bg)
    }

    /// Sets the colors for text written from now on.
    pub fn set_color(&mut self, fg: ColorToken, bg: ColorToken) {
        self.fg = fg;
        self.bg = bg;
    }

    /// Appends streamed text.
    pub fn push_str(&mut self, text: &str) {
        let mut rest = text;
        while let Some(pos) = rest.find(['\n', '\r']) {
            let (line, tail) = rest.split_at(pos);
            let is_cr = tail.starts_with('\r');

            if is_cr || !line.is_empty() || !self.after_cr {
                self.push_text(line);
                self.push_break();
            }
            self.after_cr = is_cr;
            rest = &tail[1..];
        }
        if !rest.is_empty() {
            self.after_cr = false;
            self.push_text(rest);
        }
    }

    /// Appends a complete run, breaking any pending `\r\n` pair.
    pub fn push_run(&mut self, run: StyledRun) {
        self.after_cr = false;
        self.runs.push(run);
    }

    /// Appends copies of other runs; the buffer's own colors are unchanged.
    pub fn extend_from_runs(&mut self, runs: &[StyledRun]) {
        self.after_cr = false;
        self.runs.extend_from_slice(runs);
    }

    /// The accumulated runs.
    #[inline]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Consumes the buffer, returning its runs.
    pub fn into_runs(self) -> Vec<StyledRun> {
        self.runs
    }

    /// Returns `true` if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Drops all runs and resets the colors.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn open_run(&mut self) -> Option<&mut StyledRun> {
        let (fg, bg) = (self.fg, self.bg);
        self.runs
            .last_mut()
            .filter(|run| !run.forced_break && run.fg == fg && run.bg == bg)
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(run) = self.open_run() {
            run.text.push_str(text);
        } else {
            self.runs.push(StyledRun::new(text, self.fg, self.bg));
        }
    }

    fn push_break(&mut self) {
        if let Some(run) = self.open_run() {
            run.forced_break = true;
        } else {
            self.runs
                .push(StyledRun::new(String::new(), self.fg, self.bg).with_break());
        }
    }
}

impl fmt::Write for RunBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
