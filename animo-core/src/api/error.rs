//! Layered error types
//!
//! Pipeline-level failures live in [`CoreError`]; the public surface wraps
//! them in [`AnalyzeError`] together with input and configuration problems.

use thiserror::Error;

/// Pipeline-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// The sentiment model failed on a fragment.
    ///
    /// Recoverable: the coordinator decides between aborting the report and
    /// substituting a neutral placeholder entry, per
    /// [`ScoreFailurePolicy`](crate::api::config::ScoreFailurePolicy).
    #[error("scoring failed for fragment {fragment:?}: {reason}")]
    ScoringFailed {
        /// The normalized fragment text that could not be scored
        fragment: String,
        /// Backend-reported reason
        reason: String,
    },

    /// A translation backend failed.
    ///
    /// Normally degraded to pass-through before reaching a caller; surfaced
    /// only by translator implementations themselves.
    #[error("translation failed ({src} -> {target}): {reason}")]
    TranslationFailed {
        /// Source language code
        src: String,
        /// Target language code
        target: String,
        /// Backend-reported reason
        reason: String,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

/// API-level errors (public interface layer)
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason why the input is invalid
        reason: String,
    },

    /// Configuration error with path information
    #[error("configuration error in {path}: {error}")]
    ConfigurationError {
        /// The configuration file path
        path: String,
        /// The specific error that occurred
        error: String,
    },

    /// Pipeline layer error
    #[error("pipeline error: {0}")]
    Core(#[from] CoreError),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CoreError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CoreError::EncodingError(err.to_string())
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Result type for API operations
pub type AnalyzeResult<T> = std::result::Result<T, AnalyzeError>;
