//! Error types for the `ctable` facade.

use thiserror::Error;

/// Errors from loading table configuration.
///
/// Rendering itself never fails; these come from parsing styles and
/// documents.
#[derive(Error, Debug)]
pub enum Error {
    /// A style value was rejected by the core crate.
    #[error(transparent)]
    Core(#[from] ctable_core::Error),

    /// A TOML document did not parse or did not match the config schema.
    #[error("invalid table config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the facade Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use ctable_core::ColorParseError;

    #[test]
    fn core_errors_display_transparently() {
        let err: Error = ctable_core::Error::from(ColorParseError::EmptyInput).into();
        assert_eq!(err.to_string(), "invalid color: empty input");
    }
}
