//! Min/preferred/max size bounds.

use serde::{Deserialize, Serialize};

/// Sentinel used for an unbounded maximum.
pub const UNBOUNDED: usize = i16::MAX as usize;

/// Independent minimum, preferred and maximum sizes along one axis.
///
/// `pref` is optional: when unset the content's natural size is used. The
/// accessors keep `min <= max` at all times by widening `max` to `min`,
/// never by rejecting a value.
///
/// ```
/// use ctable_core::bounds::SizeBounds;
///
/// let mut bounds = SizeBounds::new().with_max(10);
/// bounds.set_min(12);
/// assert_eq!(bounds.max(), 12);
/// assert_eq!(bounds.clamp_pref(40), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSizeBounds")]
pub struct SizeBounds {
    min: usize,
    pref: Option<usize>,
    max: usize,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSizeBounds {
    min: usize,
    pref: Option<usize>,
    max: usize,
}

impl Default for RawSizeBounds {
    fn default() -> Self {
        Self {
            min: 0,
            pref: None,
            max: UNBOUNDED,
        }
    }
}

impl From<RawSizeBounds> for SizeBounds {
    fn from(raw: RawSizeBounds) -> Self {
        Self {
            min: raw.min,
            pref: raw.pref,
            max: raw.max.max(raw.min),
        }
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeBounds {
    /// Bounds of `0..=UNBOUNDED` with no preferred size.
    pub const fn new() -> Self {
        Self {
            min: 0,
            pref: None,
            max: UNBOUNDED,
        }
    }

    /// Minimum size.
    #[inline]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Configured preferred size, if any.
    #[inline]
    pub const fn pref(&self) -> Option<usize> {
        self.pref
    }

    /// Maximum size, never below [`min`](Self::min).
    #[inline]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Sets the minimum, widening the maximum if needed.
    pub fn set_min(&mut self, min: usize) {
        self.min = min;
        self.max = self.max.max(min);
    }

    /// Sets or clears the preferred size.
    pub fn set_pref(&mut self, pref: Option<usize>) {
        self.pref = pref;
    }

    /// Sets the maximum; a value below the minimum is widened to it.
    pub fn set_max(&mut self, max: usize) {
        self.max = max.max(self.min);
    }

    /// Builder form of [`set_min`](Self::set_min).
    pub fn with_min(mut self, min: usize) -> Self {
        self.set_min(min);
        self
    }

    /// Builder form of [`set_pref`](Self::set_pref).
    pub fn with_pref(mut self, pref: usize) -> Self {
        self.set_pref(Some(pref));
        self
    }

    /// Builder form of [`set_max`](Self::set_max).
    pub fn with_max(mut self, max: usize) -> Self {
        self.set_max(max);
        self
    }

    /// Preferred size given the content's natural size, clamped into the bounds.
    #[inline]
    pub fn clamp_pref(&self, natural: usize) -> usize {
        self.pref.unwrap_or(natural).clamp(self.min, self.max)
    }

    /// Clamps any size into the bounds.
    #[inline]
    pub fn clamp(&self, size: usize) -> usize {
        size.clamp(self.min, self.max)
    }
}
