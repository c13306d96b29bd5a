//! Border pattern expansion.
//!
//! A border pattern describes one edge of a box in a compact form and is
//! stretched to an exact width:
//!
//! | syntax | meaning |
//! |---|---|
//! | `[...]` | fixed group, reproduced once at its literal length |
//! | `(...)` | expandable group, repeated cyclically to fill its share |
//! | `abc` | literal text outside brackets, an implicit expandable group |
//! | `$$` | a literal `$` |
//! | `$X` | a literal `X` for any non-hex `X`, e.g. `$[` or `$(` |
//! | `$hh` | the glyph with hex code `hh`, e.g. `$28` is `(` |
//! | `$gh` | foreground of the following glyphs is palette entry `h` |
//! | `$Gbf` | background `b` and foreground `f` of the following glyphs |
//!
//! Brackets nest: inside a group, bracket characters other than the group's
//! own closing one are literal content, so `([])` cycles `[]`. Color escapes
//! take no width and stay in effect until the end of their group.
//!
//! Width left over after the fixed groups is split evenly between the
//! expandable groups, the first groups taking one extra unit each until the
//! remainder is used up. The result is then cut or blank-padded to exactly
//! the requested width.
//!
//! # Example
//!
//! ```
//! use ctable_render::pattern::{expand, glyph_string};
//!
//! assert_eq!(glyph_string(&expand(Some("[+](-)[+]"), 8)), "+------+");
//! assert_eq!(glyph_string(&expand(Some("(-)[ TITLE ](-)"), 20)), "------- TITLE ------");
//! ```

use ctable_core::color::{ColorToken, PaletteColor};
use ctable_core::style::StyledGlyph;
use smallvec::SmallVec;
use std::str::Chars;

type Glyphs = SmallVec<[StyledGlyph; 8]>;

/// Expands `pattern` to exactly `width` glyphs.
///
/// `None` yields blanks. Malformed escapes never fail: an escape cut off by
/// the end of its group ends that group, an escape followed by the wrong
/// kind of character is dropped.
pub fn expand(pattern: Option<&str>, width: usize) -> Vec<StyledGlyph> {
    let Some(pattern) = pattern else {
        return vec![StyledGlyph::BLANK; width];
    };
    if width == 0 {
        return Vec::new();
    }

    let groups: Vec<Group> = split_groups(pattern)
        .into_iter()
        .map(|raw| Group::decode(&raw.content, raw.expandable))
        .collect();

    let fixed_width = groups
        .iter()
        .filter(|g| !g.expandable)
        .map(|g| g.width)
        .sum::<usize>()
        .min(width);
    let expandable_width = width - fixed_width;
    let expandable_count = groups.iter().filter(|g| g.expandable).count();
    let (share, remainder) = if expandable_count > 0 {
        (
            expandable_width / expandable_count,
            expandable_width % expandable_count,
        )
    } else {
        (0, 0)
    };

    let mut out = Vec::with_capacity(width);
    let mut nth = 0;
    for group in &groups {
        let group_width = if group.expandable {
            nth += 1;
            share + usize::from(nth <= remainder)
        } else {
            group.width
        };
        group.fill(&mut out, group_width);
    }

    out.resize(width, StyledGlyph::BLANK);
    out
}

/// Collects the characters of expanded glyphs, ignoring their colors.
pub fn glyph_string(glyphs: &[StyledGlyph]) -> String {
    glyphs.iter().map(|g| g.glyph).collect()
}

// ============================================================================
// Grouping
// ============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct RawGroup {
    content: String,
    expandable: bool,
    bracketed: bool,
}

/// Splits the pattern into top-level groups, keeping escapes intact.
///
/// The character after `$` is never treated as a bracket.
fn split_groups(pattern: &str) -> Vec<RawGroup> {
    let mut groups: Vec<RawGroup> = Vec::new();
    let mut depth = 0usize;
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if depth == 0 {
            if matches!(ch, '[' | '(') {
                depth = 1;
                groups.push(RawGroup {
                    content: String::new(),
                    expandable: ch == '(',
                    bracketed: true,
                });
                continue;
            }
            if groups.last().is_none_or(|g| g.bracketed) {
                groups.push(RawGroup {
                    content: String::new(),
                    expandable: true,
                    bracketed: false,
                });
            }
        } else {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => {
                    depth -= 1;
                    if depth == 0 {
                        continue;
                    }
                }
                _ => {}
            }
        }

        let Some(group) = groups.last_mut() else {
            continue;
        };
        group.content.push(ch);
        if ch == '$' {
            if let Some(escaped) = chars.next() {
                group.content.push(escaped);
            }
        }
    }

    groups
}

// ============================================================================
// Decoding
// ============================================================================

#[derive(Debug)]
struct Group {
    /// Never empty; a group without glyphs holds one blank.
    glyphs: Glyphs,
    /// Number of glyphs actually parsed.
    width: usize,
    expandable: bool,
}

impl Group {
    fn decode(content: &str, expandable: bool) -> Self {
        let mut fg = ColorToken::Current;
        let mut bg = ColorToken::Current;
        let mut glyphs = Glyphs::new();
        let mut chars = content.chars();

        while let Some(ch) = chars.next() {
            if ch != '$' {
                glyphs.push(StyledGlyph::new(ch, fg, bg));
                continue;
            }

            let Some(code) = chars.next() else {
                tracing::trace!(content, "border pattern: truncated escape");
                break;
            };

            match code {
                'g' => match take_hex(&mut chars, 1) {
                    Escape::Value(v) => fg = palette(v),
                    Escape::Truncated => break,
                    Escape::Malformed => {}
                },
                'G' => match take_hex(&mut chars, 2) {
                    Escape::Value(v) => {
                        bg = palette(v >> 4);
                        fg = palette(v & 0xF);
                    }
                    Escape::Truncated => break,
                    Escape::Malformed => {}
                },
                _ if code.is_ascii_hexdigit() => {
                    let high = code.to_digit(16).unwrap_or(0);
                    match take_hex(&mut chars, 1) {
                        Escape::Value(low) => {
                            let glyph = char::from(((high << 4) | low) as u8);
                            glyphs.push(StyledGlyph::new(glyph, fg, bg));
                        }
                        Escape::Truncated => break,
                        Escape::Malformed => {}
                    }
                }
                _ => glyphs.push(StyledGlyph::new(code, fg, bg)),
            }
        }

        let width = glyphs.len();
        if glyphs.is_empty() {
            glyphs.push(StyledGlyph::new(' ', fg, bg));
        }
        Self {
            glyphs,
            width,
            expandable,
        }
    }

    /// Appends `width` glyphs, cycling through the group's own.
    fn fill(&self, out: &mut Vec<StyledGlyph>, width: usize) {
        out.extend(self.glyphs.iter().copied().cycle().take(width));
    }
}

enum Escape {
    Value(u32),
    /// The group ended before all digits were read.
    Truncated,
    /// A non-hex character where a digit was expected; nothing is consumed.
    Malformed,
}

fn take_hex(chars: &mut Chars<'_>, digits: usize) -> Escape {
    let mut lookahead = chars.clone();
    let mut value = 0;
    for _ in 0..digits {
        match lookahead.next() {
            None => {
                tracing::trace!("border pattern: truncated escape");
                return Escape::Truncated;
            }
            Some(ch) => match ch.to_digit(16) {
                Some(digit) => value = (value << 4) | digit,
                None => {
                    tracing::trace!(%ch, "border pattern: dropped malformed escape");
                    return Escape::Malformed;
                }
            },
        }
    }
    *chars = lookahead;
    Escape::Value(value)
}

fn palette(index: u32) -> ColorToken {
    PaletteColor::from_index(index as u8).map_or(ColorToken::Current, ColorToken::Explicit)
}
