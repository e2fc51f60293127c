//! Error types for the recibo-core library.

use thiserror::Error;

/// Main error type for the recibo library.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// Text recognition error from the upstream engine.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by the external text-recognition engine.
///
/// These are the only hard failures in the pipeline: extraction misses are
/// represented as empty fields, never as errors.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The recognition engine itself failed.
    #[error("recognition engine failed: {0}")]
    Engine(String),

    /// The image could not be read or decoded.
    #[error("unreadable image: {0}")]
    UnreadableImage(String),

    /// The recognition call did not complete in time.
    #[error("recognition timed out")]
    Timeout,
}

/// Errors related to configuration loading and rule compilation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the config file.
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configured label set produced an uncompilable pattern.
    #[error("invalid {field} rule: {reason}")]
    Rule { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn rule(field: &str, err: regex::Error) -> Self {
        ConfigError::Rule {
            field: field.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for the recibo library.
pub type Result<T> = std::result::Result<T, ReciboError>;
