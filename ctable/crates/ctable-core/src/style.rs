//! Box styling: sides, per-edge style, alignment and glyphs.
//!
//! A [`BoxStyle`] describes one box of the layout (a cell, a row or the whole
//! table) as four [`SideStyle`]s plus box-wide colors, [`Alignment`] and an
//! optional corner merge.
//!
//! An edge's `margin` counts the border strip itself: a margin of `m > 0`
//! draws the edge's border pattern plus `m - 1` blank cells outside it, while
//! a margin of `0` means no border and no margin on that edge.
//!
//! # Examples
//!
//! ```
//! use ctable_core::style::{BoxStyle, HAlign, Side};
//!
//! let style = BoxStyle::new()
//!     .with_margin((1, 0))
//!     .with_pattern("-")
//!     .with_horizontal_align(HAlign::Right);
//!
//! assert!(style.has_border(Side::Top));
//! assert!(!style.has_border(Side::Left));
//! ```

use crate::color::ColorToken;
use crate::corner::CornerMerge;
use crate::error::Error;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Sides
// ============================================================================

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Top edge.
    Top = 0,
    /// Right edge.
    Right = 1,
    /// Bottom edge.
    Bottom = 2,
    /// Left edge.
    Left = 3,
}

impl Side {
    /// All sides in clockwise order starting at the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns the index of this side in clockwise order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the side across the box.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Returns `true` for top and bottom.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

impl TryFrom<u8> for Side {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(Error::InvalidSide(value))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        })
    }
}

bitflags! {
    /// A set of sides, used for the enabled border edges of a box.
    ///
    /// ```
    /// use ctable_core::style::{Side, Sides};
    ///
    /// let sides = Sides::TOP | Sides::from(Side::Left);
    /// assert!(sides.contains(Sides::LEFT));
    /// assert!(!sides.contains(Sides::RIGHT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        /// Top edge.
        const TOP    = 0b0001;
        /// Right edge.
        const RIGHT  = 0b0010;
        /// Bottom edge.
        const BOTTOM = 0b0100;
        /// Left edge.
        const LEFT   = 0b1000;
        /// Left and right edges.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Top and bottom edges.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl From<Side> for Sides {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::TOP,
            Side::Right => Self::RIGHT,
            Side::Bottom => Self::BOTTOM,
            Side::Left => Self::LEFT,
        }
    }
}

impl Sides {
    /// Returns `true` if `side` is in the set.
    #[inline]
    pub fn has(self, side: Side) -> bool {
        self.contains(Self::from(side))
    }
}

// ============================================================================
// Alignment
// ============================================================================

/// Horizontal placement of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered, extra column on the right.
    Center,
    /// Flush right.
    Right,
}

/// Vertical placement of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    /// Flush top.
    #[default]
    Top,
    /// Centered, extra line at the bottom.
    Middle,
    /// Flush bottom.
    Bottom,
}

/// Independent horizontal and vertical alignment; `None` inherits from the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    /// Horizontal axis, `None` to inherit.
    pub horizontal: Option<HAlign>,
    /// Vertical axis, `None` to inherit.
    pub vertical: Option<VAlign>,
}

impl Alignment {
    /// Alignment that inherits both axes.
    pub const INHERIT: Self = Self {
        horizontal: None,
        vertical: None,
    };

    /// Creates an alignment with both axes set.
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal: Some(horizontal),
            vertical: Some(vertical),
        }
    }

    /// Fills each inherited axis from `parent`; set axes are kept.
    pub fn inherit_from(&mut self, parent: Self) {
        if self.horizontal.is_none() {
            self.horizontal = parent.horizontal;
        }
        if self.vertical.is_none() {
            self.vertical = parent.vertical;
        }
    }

    /// Effective horizontal alignment, left when inherited from nothing.
    #[inline]
    pub fn horizontal_or_default(self) -> HAlign {
        self.horizontal.unwrap_or_default()
    }

    /// Effective vertical alignment, top when inherited from nothing.
    #[inline]
    pub fn vertical_or_default(self) -> VAlign {
        self.vertical.unwrap_or_default()
    }
}

// ============================================================================
// Glyphs
// ============================================================================

/// One character cell with its color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyledGlyph {
    /// The character.
    pub glyph: char,
    /// Foreground token.
    pub fg: ColorToken,
    /// Background token.
    pub bg: ColorToken,
}

impl StyledGlyph {
    /// A space in the surrounding colors.
    pub const BLANK: Self = Self::plain(' ');

    /// Creates a glyph with explicit tokens.
    pub const fn new(glyph: char, fg: ColorToken, bg: ColorToken) -> Self {
        Self { glyph, fg, bg }
    }

    /// Creates a glyph in the surrounding colors.
    pub const fn plain(glyph: char) -> Self {
        Self {
            glyph,
            fg: ColorToken::Current,
            bg: ColorToken::Current,
        }
    }
}

impl Default for StyledGlyph {
    fn default() -> Self {
        Self::BLANK
    }
}

// ============================================================================
// Side and box styles
// ============================================================================

/// Style of one edge of a box.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SideStyle {
    /// Border strip plus blank margin; `0` disables the border on this edge.
    pub margin: u8,
    /// Blank cells between the border and the content.
    pub padding: u8,
    /// Foreground of the border glyphs.
    pub foreground: ColorToken,
    /// Border pattern; `None` draws blanks.
    pub pattern: Option<String>,
}

impl SideStyle {
    /// Returns `true` if this edge draws a border strip.
    #[inline]
    pub fn has_border(&self) -> bool {
        self.margin > 0
    }
}

/// A value per edge, built CSS-style from one to four values.
///
/// | from | top | right | bottom | left |
/// |---|---|---|---|---|
/// | `a` | a | a | a | a |
/// | `(a, b)` | a | b | a | b |
/// | `(a, b, c)` | a | b | c | b |
/// | `(a, b, c, d)` | a | b | c | d |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges<T> {
    /// Top value.
    pub top: T,
    /// Right value.
    pub right: T,
    /// Bottom value.
    pub bottom: T,
    /// Left value.
    pub left: T,
}

impl<T> Edges<T> {
    /// Returns the value for `side`.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

impl<T: Clone> From<T> for Edges<T> {
    fn from(all: T) -> Self {
        Self {
            top: all.clone(),
            right: all.clone(),
            bottom: all.clone(),
            left: all,
        }
    }
}

impl<T: Clone> From<(T, T)> for Edges<T> {
    fn from((vertical, horizontal): (T, T)) -> Self {
        Self {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl<T: Clone> From<(T, T, T)> for Edges<T> {
    fn from((top, horizontal, bottom): (T, T, T)) -> Self {
        Self {
            top,
            right: horizontal.clone(),
            bottom,
            left: horizontal,
        }
    }
}

impl<T> From<(T, T, T, T)> for Edges<T> {
    fn from((top, right, bottom, left): (T, T, T, T)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Style of a whole box: four edges, box colors, alignment and corner merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    /// Top edge.
    pub top: SideStyle,
    /// Right edge.
    pub right: SideStyle,
    /// Bottom edge.
    pub bottom: SideStyle,
    /// Left edge.
    pub left: SideStyle,
    /// Box foreground.
    pub fg: ColorToken,
    /// Box background.
    pub bg: ColorToken,
    /// Text alignment.
    pub align: Alignment,
    /// How border corners are joined, `None` to keep each edge's own glyph.
    pub corners: Option<CornerMerge>,
}

impl BoxStyle {
    /// Creates a style with no border, no padding and inherited colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style of one edge.
    pub fn side(&self, side: Side) -> &SideStyle {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Returns the style of one edge for modification.
    pub fn side_mut(&mut self, side: Side) -> &mut SideStyle {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Returns `true` if `side` draws a border strip.
    #[inline]
    pub fn has_border(&self, side: Side) -> bool {
        self.side(side).has_border()
    }

    /// Returns the set of edges that draw a border strip.
    pub fn border_sides(&self) -> Sides {
        Side::ALL
            .into_iter()
            .filter(|&side| self.has_border(side))
            .fold(Sides::empty(), |acc, side| acc | Sides::from(side))
    }

    fn set_each<T>(&mut self, edges: Edges<T>, mut apply: impl FnMut(&mut SideStyle, T)) {
        let Edges {
            top,
            right,
            bottom,
            left,
        } = edges;
        apply(&mut self.top, top);
        apply(&mut self.right, right);
        apply(&mut self.bottom, bottom);
        apply(&mut self.left, left);
    }

    /// Sets margins CSS-style; see [`Edges`].
    pub fn with_margin(mut self, margin: impl Into<Edges<u8>>) -> Self {
        self.set_each(margin.into(), |side, v| side.margin = v);
        self
    }

    /// Sets paddings CSS-style; see [`Edges`].
    pub fn with_padding(mut self, padding: impl Into<Edges<u8>>) -> Self {
        self.set_each(padding.into(), |side, v| side.padding = v);
        self
    }

    /// Sets border foregrounds CSS-style; see [`Edges`].
    pub fn with_border_fg(mut self, fg: impl Into<Edges<ColorToken>>) -> Self {
        self.set_each(fg.into(), |side, v| side.foreground = v);
        self
    }

    /// Sets border patterns CSS-style; see [`Edges`].
    pub fn with_pattern<'p>(mut self, pattern: impl Into<Edges<&'p str>>) -> Self {
        self.set_each(pattern.into(), |side, v| side.pattern = Some(v.to_string()));
        self
    }

    /// Sets the box colors.
    pub fn with_colors(mut self, fg: ColorToken, bg: ColorToken) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_horizontal_align(mut self, align: HAlign) -> Self {
        self.align.horizontal = Some(align);
        self
    }

    /// Sets the vertical alignment.
    pub fn with_vertical_align(mut self, align: VAlign) -> Self {
        self.align.vertical = Some(align);
        self
    }

    /// Sets the corner merge.
    pub fn with_corners(mut self, corners: CornerMerge) -> Self {
        self.corners = Some(corners);
        self
    }
}
