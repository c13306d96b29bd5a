//! Palette colors, color tokens and the ambient color state.
//!
//! Every place a table can be styled takes a pair of [`ColorToken`]s, one per
//! channel. A token is either an explicit [`PaletteColor`], `Current` (keep
//! whatever the surrounding box uses for that channel) or `Other` (take the
//! surrounding value of the *opposite* channel). Tokens are resolved against a
//! [`ColorState`], which is the pair of concrete colors currently in effect
//! on the output.
//!
//! # Examples
//!
//! ```
//! use ctable_core::color::{ColorToken, PaletteColor};
//!
//! let token: ColorToken = "bright_red".parse().unwrap();
//! assert_eq!(token, ColorToken::Explicit(PaletteColor::BrightRed));
//!
//! // a single hex digit indexes the palette
//! let token: ColorToken = "c".parse().unwrap();
//! assert_eq!(token, ColorToken::Explicit(PaletteColor::BrightBlue));
//! ```

use crate::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Palette
// ============================================================================

/// The 16-entry palette addressable from border patterns and configuration.
///
/// The discriminant is the palette index used by the `$g`/`$G` pattern
/// escapes and by single-digit hex color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaletteColor {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red,
    /// Green (index 2).
    Green,
    /// Yellow (index 3).
    Yellow,
    /// Blue (index 4).
    Blue,
    /// Purple (index 5).
    Purple,
    /// Cyan (index 6).
    Cyan,
    /// Gray (index 7).
    Gray,
    /// Dark gray (index 8).
    DarkGray,
    /// Bright red (index 9).
    BrightRed,
    /// Bright green (index 10).
    BrightGreen,
    /// Bright yellow (index 11).
    BrightYellow,
    /// Bright blue (index 12).
    BrightBlue,
    /// Bright purple (index 13).
    BrightPurple,
    /// Bright cyan (index 14).
    BrightCyan,
    /// White (index 15).
    White,
}

impl PaletteColor {
    /// All palette entries in index order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Purple,
        Self::Cyan,
        Self::Gray,
        Self::DarkGray,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightPurple,
        Self::BrightCyan,
        Self::White,
    ];

    /// Returns the palette index (0-15).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a palette entry by index, `None` if `index > 15`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Looks up a palette entry by a single hex digit (`0`-`9`, `a`-`f`, `A`-`F`).
    pub fn from_hex_digit(digit: char) -> Option<Self> {
        digit
            .to_digit(16)
            .and_then(|index| Self::from_index(index as u8))
    }

    /// Returns the configuration name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightPurple => "bright_purple",
            Self::BrightCyan => "bright_cyan",
            Self::White => "white",
        }
    }

    /// Returns the palette entry for the given name, or `None` if not found.
    ///
    /// Accepts the canonical snake_case names plus a few common spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        let color = match lower.as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "purple" | "magenta" => Self::Purple,
            "cyan" => Self::Cyan,
            "gray" | "grey" => Self::Gray,
            "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Self::DarkGray,
            "bright_red" | "brightred" => Self::BrightRed,
            "bright_green" | "brightgreen" => Self::BrightGreen,
            "bright_yellow" | "brightyellow" => Self::BrightYellow,
            "bright_blue" | "brightblue" => Self::BrightBlue,
            "bright_purple" | "brightpurple" | "bright_magenta" => Self::BrightPurple,
            "bright_cyan" | "brightcyan" => Self::BrightCyan,
            "white" => Self::White,
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        let mut chars = s.chars();
        if let (Some(digit), None) = (chars.next(), chars.next()) {
            if let Some(color) = Self::from_hex_digit(digit) {
                return Ok(color);
            }
        }
        Self::from_name(s).ok_or_else(|| ColorParseError::UnknownColor(s.to_string()))
    }
}

// ============================================================================
// Color tokens
// ============================================================================

/// A tri-state style value for one color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorToken {
    /// Inherit the surrounding value of the same channel.
    #[default]
    Current,
    /// Inherit the surrounding value of the opposite channel.
    Other,
    /// Use this palette entry.
    Explicit(PaletteColor),
}

impl ColorToken {
    /// Returns `true` for [`ColorToken::Current`].
    #[inline]
    pub const fn is_current(self) -> bool {
        matches!(self, Self::Current)
    }

    /// Substitutes the relative variants with the given tokens.
    ///
    /// `Current` becomes `current`, `Other` becomes `other`, an explicit color
    /// is returned unchanged. This is token-level resolution, used when a
    /// glyph is bound to the box that owns it before any output happens.
    #[inline]
    pub const fn or_relative(self, current: Self, other: Self) -> Self {
        match self {
            Self::Current => current,
            Self::Other => other,
            Self::Explicit(_) => self,
        }
    }
}

impl From<PaletteColor> for ColorToken {
    fn from(color: PaletteColor) -> Self {
        Self::Explicit(color)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Other => f.write_str("other"),
            Self::Explicit(color) => color.fmt(f),
        }
    }
}

impl FromStr for ColorToken {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" | "inherit" => Ok(Self::Current),
            "other" => Ok(Self::Other),
            _ => s.parse().map(Self::Explicit),
        }
    }
}

impl TryFrom<String> for ColorToken {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.to_string()
    }
}

// ============================================================================
// Ambient state
// ============================================================================

/// The concrete colors in effect on an output, `None` meaning the device default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorState {
    /// Foreground color.
    pub fg: Option<PaletteColor>,
    /// Background color.
    pub bg: Option<PaletteColor>,
}

impl ColorState {
    /// The device default colors.
    pub const DEFAULT: Self = Self { fg: None, bg: None };

    /// Creates a state from concrete colors.
    pub const fn new(fg: Option<PaletteColor>, bg: Option<PaletteColor>) -> Self {
        Self { fg, bg }
    }

    /// Resolves a token pair against this state.
    ///
    /// `Current` keeps this state's channel and an explicit token replaces
    /// it. `Other` copies the resolved value of the opposite channel; when
    /// both tokens are `Other` the two channels swap.
    pub fn resolve(self, fg: ColorToken, bg: ColorToken) -> Self {
        let direct = |token: ColorToken, current: Option<PaletteColor>| match token {
            ColorToken::Current => Some(current),
            ColorToken::Explicit(color) => Some(Some(color)),
            ColorToken::Other => None,
        };

        match (direct(fg, self.fg), direct(bg, self.bg)) {
            (Some(fg), Some(bg)) => Self { fg, bg },
            (None, Some(bg)) => Self { fg: bg, bg },
            (Some(fg), None) => Self { fg, bg: fg },
            (None, None) => Self {
                fg: self.bg,
                bg: self.fg,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Option<PaletteColor> = Some(PaletteColor::Red);
    const BLUE: Option<PaletteColor> = Some(PaletteColor::Blue);

    #[test]
    fn palette_order() {
        assert_eq!(PaletteColor::from_index(0), Some(PaletteColor::Black));
        assert_eq!(PaletteColor::from_index(8), Some(PaletteColor::DarkGray));
        assert_eq!(PaletteColor::from_index(15), Some(PaletteColor::White));
        assert_eq!(PaletteColor::from_index(16), None);
        for (i, color) in PaletteColor::ALL.iter().enumerate() {
            assert_eq!(usize::from(color.index()), i);
        }
    }

    #[test]
    fn parse_names_and_digits() {
        assert_eq!("purple".parse::<PaletteColor>(), Ok(PaletteColor::Purple));
        assert_eq!("Dark_Gray".parse::<PaletteColor>(), Ok(PaletteColor::DarkGray));
        assert_eq!("F".parse::<PaletteColor>(), Ok(PaletteColor::White));
        assert_eq!("1".parse::<PaletteColor>(), Ok(PaletteColor::Red));
        assert_eq!(
            "chartreuse".parse::<PaletteColor>(),
            Err(ColorParseError::UnknownColor("chartreuse".into()))
        );
        assert_eq!("".parse::<PaletteColor>(), Err(ColorParseError::EmptyInput));
    }

    #[test]
    fn token_display_roundtrips_through_parse() {
        for token in [
            ColorToken::Current,
            ColorToken::Other,
            ColorToken::Explicit(PaletteColor::BrightCyan),
        ] {
            assert_eq!(token.to_string().parse::<ColorToken>(), Ok(token));
        }
    }

    #[test]
    fn resolve_current_keeps_state() {
        let state = ColorState::new(RED, BLUE);
        assert_eq!(state.resolve(ColorToken::Current, ColorToken::Current), state);
    }

    #[test]
    fn resolve_explicit_replaces() {
        let state = ColorState::new(RED, BLUE);
        let out = state.resolve(PaletteColor::Green.into(), ColorToken::Current);
        assert_eq!(out, ColorState::new(Some(PaletteColor::Green), BLUE));
    }

    #[test]
    fn resolve_other_uses_opposite_channel() {
        let state = ColorState::new(RED, BLUE);
        assert_eq!(
            state.resolve(ColorToken::Other, ColorToken::Current),
            ColorState::new(BLUE, BLUE)
        );
        assert_eq!(
            state.resolve(ColorToken::Current, ColorToken::Other),
            ColorState::new(RED, RED)
        );
        // the opposite channel is taken after its own resolution
        assert_eq!(
            state.resolve(ColorToken::Other, PaletteColor::Yellow.into()),
            ColorState::new(Some(PaletteColor::Yellow), Some(PaletteColor::Yellow))
        );
        assert_eq!(
            state.resolve(ColorToken::Other, ColorToken::Other),
            ColorState::new(BLUE, RED)
        );
    }

    #[test]
    fn resolve_is_idempotent_for_concrete_tokens() {
        let state = ColorState::new(RED, None);
        let fg = ColorToken::Explicit(PaletteColor::Cyan);
        let once = state.resolve(fg, ColorToken::Current);
        assert_eq!(once.resolve(fg, ColorToken::Current), once);
    }

    #[test]
    fn or_relative_substitutes() {
        let fg = ColorToken::Explicit(PaletteColor::Red);
        let bg = ColorToken::Explicit(PaletteColor::Blue);
        assert_eq!(ColorToken::Current.or_relative(fg, bg), fg);
        assert_eq!(ColorToken::Other.or_relative(fg, bg), bg);
        assert_eq!(
            ColorToken::Explicit(PaletteColor::Gray).or_relative(fg, bg),
            ColorToken::Explicit(PaletteColor::Gray)
        );
    }
}
