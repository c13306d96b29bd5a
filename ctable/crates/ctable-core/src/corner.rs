//! Corner merge presets.
//!
//! Border edges are generated independently, so where two edges meet each
//! brings its own end glyph. A [`CornerMerge`] joins the horizontal edge's
//! glyph with the vertical edge's glyph into one corner, for example turning
//! `─` and `│` at the top-left into `┌`.
//!
//! ```
//! use ctable_core::corner::CornerMerge;
//! use ctable_core::style::{Side, StyledGlyph};
//!
//! let merged = CornerMerge::BoxDrawing.merge(
//!     StyledGlyph::plain('═'),
//!     StyledGlyph::plain('║'),
//!     Side::Bottom,
//!     Side::Right,
//! );
//! assert_eq!(merged.glyph, '╝');
//! ```

use crate::style::{Side, StyledGlyph};
use serde::{Deserialize, Serialize};

/// Signature of a corner merge function.
///
/// Arguments are the horizontal edge's glyph, the vertical edge's glyph, the
/// horizontal side (top or bottom) and the vertical side (left or right).
pub type MergeFn = fn(StyledGlyph, StyledGlyph, Side, Side) -> StyledGlyph;

/// How the glyphs of two meeting border edges become one corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerMerge {
    /// Box-drawing corners for light, heavy and double lines, including mixes.
    BoxDrawing,
    /// Like [`CornerMerge::BoxDrawing`] with rounded light corners.
    Rounded,
    /// `+` wherever an ASCII rule meets an ASCII bar.
    Ascii,
    /// A caller-provided function; code-only, never serialized.
    #[serde(skip)]
    Custom(MergeFn),
}

impl CornerMerge {
    /// Merges the glyphs of two meeting edges.
    ///
    /// The sides may be given in either order; the preset merges always
    /// treat the top/bottom edge's glyph as the primary one and keep its
    /// colors.
    pub fn merge(
        self,
        a: StyledGlyph,
        b: StyledGlyph,
        side_a: Side,
        side_b: Side,
    ) -> StyledGlyph {
        if let Self::Custom(merge) = self {
            return merge(a, b, side_a, side_b);
        }

        let (horizontal, vertical, row, column) = if side_a.is_horizontal() {
            (a, b, side_a, side_b)
        } else {
            (b, a, side_b, side_a)
        };

        let corner = match self {
            Self::Ascii => ascii_corner(horizontal.glyph, vertical.glyph),
            Self::BoxDrawing => box_corner(horizontal.glyph, vertical.glyph, row, column, false),
            Self::Rounded => box_corner(horizontal.glyph, vertical.glyph, row, column, true),
            Self::Custom(_) => None,
        };

        match corner {
            Some(glyph) => StyledGlyph { glyph, ..horizontal },
            None => horizontal,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Weight {
    Light,
    Heavy,
    Double,
}

fn horizontal_weight(glyph: char) -> Option<Weight> {
    match glyph {
        '-' | '─' => Some(Weight::Light),
        '━' => Some(Weight::Heavy),
        '=' | '═' => Some(Weight::Double),
        _ => None,
    }
}

fn vertical_weight(glyph: char) -> Option<Weight> {
    match glyph {
        '|' | '│' => Some(Weight::Light),
        '┃' => Some(Weight::Heavy),
        '║' => Some(Weight::Double),
        _ => None,
    }
}

/// Corner glyphs in `[top-left, top-right, bottom-left, bottom-right]` order,
/// indexed by (horizontal weight, vertical weight).
fn corner_set(horizontal: Weight, vertical: Weight, rounded: bool) -> Option<[char; 4]> {
    use Weight::{Double, Heavy, Light};

    let set = match (horizontal, vertical) {
        (Light, Light) if rounded => ['╭', '╮', '╰', '╯'],
        (Light, Light) => ['┌', '┐', '└', '┘'],
        (Heavy, Heavy) => ['┏', '┓', '┗', '┛'],
        (Double, Double) => ['╔', '╗', '╚', '╝'],
        (Heavy, Light) => ['┍', '┑', '┕', '┙'],
        (Light, Heavy) => ['┎', '┒', '┖', '┚'],
        (Double, Light) => ['╒', '╕', '╘', '╛'],
        (Light, Double) => ['╓', '╖', '╙', '╜'],
        (Heavy, Double) | (Double, Heavy) => return None,
    };
    Some(set)
}

fn box_corner(horizontal: char, vertical: char, row: Side, column: Side, rounded: bool) -> Option<char> {
    let set = corner_set(horizontal_weight(horizontal)?, vertical_weight(vertical)?, rounded)?;
    let index = match (row, column) {
        (Side::Top, Side::Left) => 0,
        (Side::Top, Side::Right) => 1,
        (Side::Bottom, Side::Left) => 2,
        (Side::Bottom, Side::Right) => 3,
        _ => return None,
    };
    Some(set[index])
}

fn ascii_corner(horizontal: char, vertical: char) -> Option<char> {
    let is_rule = matches!(horizontal, '-' | '=' | '~' | '_');
    let is_bar = matches!(vertical, '|' | '!' | ':');
    (is_rule && is_bar).then_some('+')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorToken, PaletteColor};

    fn merge(preset: CornerMerge, h: char, v: char, row: Side, column: Side) -> char {
        preset
            .merge(StyledGlyph::plain(h), StyledGlyph::plain(v), row, column)
            .glyph
    }

    #[test]
    fn box_drawing_corners() {
        let p = CornerMerge::BoxDrawing;
        assert_eq!(merge(p, '─', '│', Side::Top, Side::Left), '┌');
        assert_eq!(merge(p, '-', '|', Side::Top, Side::Right), '┐');
        assert_eq!(merge(p, '━', '┃', Side::Bottom, Side::Left), '┗');
        assert_eq!(merge(p, '═', '│', Side::Bottom, Side::Right), '╛');
    }

    #[test]
    fn rounded_only_changes_light_corners() {
        let p = CornerMerge::Rounded;
        assert_eq!(merge(p, '─', '│', Side::Top, Side::Left), '╭');
        assert_eq!(merge(p, '═', '║', Side::Top, Side::Left), '╔');
    }

    #[test]
    fn side_order_does_not_matter() {
        let p = CornerMerge::BoxDrawing;
        let merged = p.merge(
            StyledGlyph::plain('│'),
            StyledGlyph::plain('─'),
            Side::Left,
            Side::Bottom,
        );
        assert_eq!(merged.glyph, '└');
    }

    #[test]
    fn unknown_glyphs_keep_horizontal_edge() {
        assert_eq!(merge(CornerMerge::BoxDrawing, '*', '│', Side::Top, Side::Left), '*');
        assert_eq!(merge(CornerMerge::Ascii, ' ', '|', Side::Top, Side::Left), ' ');
        assert_eq!(merge(CornerMerge::Ascii, '=', '|', Side::Top, Side::Left), '+');
    }

    #[test]
    fn merged_corner_keeps_horizontal_colors() {
        let red = ColorToken::Explicit(PaletteColor::Red);
        let blue = ColorToken::Explicit(PaletteColor::Blue);
        let merged = CornerMerge::Ascii.merge(
            StyledGlyph::new('-', red, ColorToken::Current),
            StyledGlyph::new('|', blue, blue),
            Side::Top,
            Side::Left,
        );
        assert_eq!(merged, StyledGlyph::new('+', red, ColorToken::Current));
    }

    #[test]
    fn custom_function_is_called() {
        fn star(_: StyledGlyph, _: StyledGlyph, _: Side, _: Side) -> StyledGlyph {
            StyledGlyph::plain('*')
        }
        assert_eq!(merge(CornerMerge::Custom(star), '-', '|', Side::Top, Side::Left), '*');
    }
}
