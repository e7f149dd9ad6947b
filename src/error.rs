//! Error types for the card service.

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Socket or filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A setting parsed but holds an unusable value.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
