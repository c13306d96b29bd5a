//! Core style types for `ctable`.
//!
//! This crate provides the building blocks every other `ctable` crate speaks:
//!
//! - [`color`]: the 16-entry palette, tri-state [`ColorToken`]s and the
//!   ambient [`ColorState`] they resolve against
//! - [`style`]: per-edge [`SideStyle`], whole-box [`BoxStyle`], alignment
//!   and the [`StyledGlyph`] used for borders and fill
//! - [`bounds`]: min/preferred/max [`SizeBounds`]
//! - [`corner`]: corner merge presets for joining border edges
//! - [`error`]: error types for the core library
//!
//! # Examples
//!
//! ## Resolving color tokens
//!
//! ```
//! use ctable_core::color::{ColorState, ColorToken, PaletteColor};
//!
//! let ambient = ColorState::new(Some(PaletteColor::White), Some(PaletteColor::Blue));
//!
//! // `Current` keeps the ambient channel, `Other` borrows the opposite one.
//! let swapped = ambient.resolve(ColorToken::Other, ColorToken::Other);
//! assert_eq!(swapped.fg, Some(PaletteColor::Blue));
//! assert_eq!(swapped.bg, Some(PaletteColor::White));
//! ```
//!
//! ## Describing a box
//!
//! ```
//! use ctable_core::style::{BoxStyle, Side};
//!
//! // one border glyph plus one blank on every side, horizontal rules of `-`
//! let style = BoxStyle::new()
//!     .with_margin(2)
//!     .with_padding((0, 1))
//!     .with_pattern(("[+](-)[+]", "|"));
//!
//! assert_eq!(style.side(Side::Left).padding, 1);
//! assert_eq!(style.side(Side::Top).pattern.as_deref(), Some("[+](-)[+]"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod bounds;
pub mod color;
pub mod corner;
pub mod error;
pub mod style;

pub use bounds::SizeBounds;
pub use color::{ColorState, ColorToken, PaletteColor};
pub use corner::{CornerMerge, MergeFn};
pub use error::{ColorParseError, Error, Result};
pub use style::{Alignment, BoxStyle, Edges, HAlign, Side, SideStyle, Sides, StyledGlyph, VAlign};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bounds::SizeBounds;
    pub use crate::color::{ColorState, ColorToken, PaletteColor};
    pub use crate::corner::CornerMerge;
    pub use crate::style::{Alignment, BoxStyle, HAlign, Side, SideStyle, Sides, StyledGlyph, VAlign};
}
