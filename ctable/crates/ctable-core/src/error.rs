//! Error types for ctable core operations.

use thiserror::Error;

/// Core error type for ctable style handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A side selector outside `0..4` came from an untyped source.
    #[error("invalid side selector: {0} (expected 0..4)")]
    InvalidSide(u8),

    /// A color token could not be parsed.
    #[error("invalid color: {0}")]
    ColorParse(#[from] ColorParseError),

    /// A configuration value was rejected.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Neither a palette name nor a single hex digit.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}
