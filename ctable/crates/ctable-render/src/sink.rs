//! Output sinks and the color-tracking [`Output`] handle.
//!
//! Renderers never write to a device directly. They write text, color
//! changes and line breaks to an [`Output`], which remembers the color state
//! currently in effect and forwards only actual changes to a [`Sink`].
//!
//! The ambient state is threaded explicitly: a node reads
//! [`Output::color`] at the start of its line, resolves its own tokens
//! against that base, and restores it before returning.

use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;
use ctable_core::color::{ColorState, ColorToken, PaletteColor};
use ctable_core::style::StyledGlyph;

/// Destination of rendered output.
pub trait Sink {
    /// Writes visible text.
    fn write_str(&mut self, text: &str);

    /// Writes one visible character.
    fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write_str(ch.encode_utf8(&mut buf));
    }

    /// Switches to a new color state. Only called when the state changes.
    fn set_color(&mut self, color: ColorState);

    /// Ends the current line.
    fn line_break(&mut self);
}

/// Color-tracking handle over a [`Sink`].
pub struct Output<'s> {
    sink: &'s mut dyn Sink,
    color: ColorState,
}

impl<'s> Output<'s> {
    /// Wraps a sink that starts in the device default colors.
    pub fn new(sink: &'s mut dyn Sink) -> Self {
        Self::with_color(sink, ColorState::DEFAULT)
    }

    /// Wraps a sink already in `color`.
    pub fn with_color(sink: &'s mut dyn Sink, color: ColorState) -> Self {
        Self { sink, color }
    }

    /// The color state currently in effect.
    #[inline]
    pub fn color(&self) -> ColorState {
        self.color
    }

    /// Switches to `color`, emitting a change only if it differs.
    pub fn set_color(&mut self, color: ColorState) {
        if color != self.color {
            self.sink.set_color(color);
            self.color = color;
        }
    }

    /// Resolves tokens against `base` and switches to the result.
    pub fn apply(&mut self, base: ColorState, fg: ColorToken, bg: ColorToken) {
        self.set_color(base.resolve(fg, bg));
    }

    /// Writes text in the current color.
    pub fn text(&mut self, text: &str) {
        if !text.is_empty() {
            self.sink.write_str(text);
        }
    }

    /// Writes a glyph, resolving its tokens against `base`.
    pub fn glyph(&mut self, base: ColorState, glyph: StyledGlyph) {
        self.apply(base, glyph.fg, glyph.bg);
        self.sink.write_char(glyph.glyph);
    }

    /// Writes `count` spaces in the current color.
    pub fn blank(&mut self, count: usize) {
        for _ in 0..count {
            self.sink.write_char(' ');
        }
    }

    /// Ends the current line.
    pub fn newline(&mut self) {
        self.sink.line_break();
    }

    /// Returns the sink to the device default colors.
    pub fn finish(&mut self) {
        self.set_color(ColorState::DEFAULT);
    }
}

/// Collects text into a `String`, ignoring colors.
#[derive(Debug, Default, Clone)]
pub struct PlainSink {
    out: String,
}

impl PlainSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected text.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the sink, returning the collected text.
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Sink for PlainSink {
    fn write_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn set_color(&mut self, _color: ColorState) {}

    fn line_break(&mut self) {
        self.out.push('\n');
    }
}

/// Collects one `String` per line, ignoring colors.
///
/// Text written before the first line break starts the first line.
#[derive(Debug, Default, Clone)]
pub struct LineCollector {
    lines: Vec<String>,
}

impl LineCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the collector, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Sink for LineCollector {
    fn write_str(&mut self, text: &str) {
        match self.lines.last_mut() {
            Some(line) => line.push_str(text),
            None => self.lines.push(text.to_string()),
        }
    }

    fn set_color(&mut self, _color: ColorState) {}

    fn line_break(&mut self) {
        self.lines.push(String::new());
    }
}

/// Collects text with ANSI color escape sequences into a `String`.
#[derive(Debug, Default, Clone)]
pub struct AnsiSink {
    out: String,
}

impl AnsiSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected text.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the sink, returning the collected text.
    pub fn into_string(self) -> String {
        self.out
    }

    fn command(&mut self, command: impl Command) {
        // fmt::Write for String never fails
        let _ = command.write_ansi(&mut self.out);
    }
}

impl Sink for AnsiSink {
    fn write_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn set_color(&mut self, color: ColorState) {
        self.command(ResetColor);
        if let Some(fg) = color.fg {
            self.command(SetForegroundColor(terminal_color(fg)));
        }
        if let Some(bg) = color.bg {
            self.command(SetBackgroundColor(terminal_color(bg)));
        }
    }

    fn line_break(&mut self) {
        self.out.push('\n');
    }
}

/// Maps a palette entry to the matching 16-color terminal color.
pub fn terminal_color(color: PaletteColor) -> Color {
    match color {
        PaletteColor::Black => Color::Black,
        PaletteColor::Red => Color::DarkRed,
        PaletteColor::Green => Color::DarkGreen,
        PaletteColor::Yellow => Color::DarkYellow,
        PaletteColor::Blue => Color::DarkBlue,
        PaletteColor::Purple => Color::DarkMagenta,
        PaletteColor::Cyan => Color::DarkCyan,
        PaletteColor::Gray => Color::Grey,
        PaletteColor::DarkGray => Color::DarkGrey,
        PaletteColor::BrightRed => Color::Red,
        PaletteColor::BrightGreen => Color::Green,
        PaletteColor::BrightYellow => Color::Yellow,
        PaletteColor::BrightBlue => Color::Blue,
        PaletteColor::BrightPurple => Color::Magenta,
        PaletteColor::BrightCyan => Color::Cyan,
        PaletteColor::White => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Sink for Recorder {
        fn write_str(&mut self, text: &str) {
            self.events.push(format!("text:{text}"));
        }

        fn set_color(&mut self, color: ColorState) {
            self.events.push(format!("color:{:?}/{:?}", color.fg, color.bg));
        }

        fn line_break(&mut self) {
            self.events.push("nl".into());
        }
    }

    #[test]
    fn unchanged_color_is_not_reemitted() {
        let mut rec = Recorder::default();
        let mut out = Output::new(&mut rec);
        let base = out.color();
        out.apply(base, PaletteColor::Red.into(), ColorToken::Current);
        out.apply(base, PaletteColor::Red.into(), ColorToken::Current);
        out.text("x");
        out.finish();
        assert_eq!(
            rec.events,
            vec!["color:Some(Red)/None", "text:x", "color:None/None"]
        );
    }

    #[test]
    fn glyph_resolves_against_base() {
        let mut rec = Recorder::default();
        let base = ColorState::new(Some(PaletteColor::White), Some(PaletteColor::Blue));
        let mut out = Output::with_color(&mut rec, base);
        out.glyph(base, StyledGlyph::new('#', ColorToken::Other, ColorToken::Current));
        assert_eq!(out.color(), ColorState::new(Some(PaletteColor::Blue), Some(PaletteColor::Blue)));
    }

    #[test]
    fn line_collector_splits_lines() {
        let mut lines = LineCollector::new();
        let mut out = Output::new(&mut lines);
        out.text("a");
        out.newline();
        out.blank(2);
        assert_eq!(lines.lines(), ["a", "  "]);
    }

    #[test]
    fn ansi_sink_emits_sgr() {
        let mut sink = AnsiSink::new();
        let mut out = Output::new(&mut sink);
        out.apply(ColorState::DEFAULT, PaletteColor::BrightRed.into(), PaletteColor::Black.into());
        out.text("hi");
        out.finish();
        let s = sink.into_string();
        assert!(s.starts_with("\x1b[0m"));
        assert!(s.contains("hi"));
        assert!(s.ends_with("\x1b[0m"));
    }
}
