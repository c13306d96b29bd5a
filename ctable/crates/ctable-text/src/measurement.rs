//! Text measurement utilities.
//!
//! All widths are `char` counts.

use crate::styled::StyledRun;

/// Number of `char`s in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `n`th `char` of `text`, or `text.len()` past the end.
pub fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(byte, _)| byte)
}

/// Width of the longest line when no wrapping happens.
///
/// Runs on the same line add up; a run ending in a forced break starts a
/// new line after it.
///
/// # Example
///
/// ```
/// use ctable_text::{measurement::natural_width, StyledRun};
///
/// let runs = [
///     StyledRun::plain("abc").with_break(),
///     StyledRun::plain("de"),
///     StyledRun::plain("fgh"),
/// ];
/// assert_eq!(natural_width(&runs), 5);
/// ```
pub fn natural_width(runs: &[StyledRun]) -> usize {
    let mut widest = 0;
    let mut current = 0;
    for run in runs {
        current += run.char_len();
        widest = widest.max(current);
        if run.forced_break {
            current = 0;
        }
    }
    widest
}
