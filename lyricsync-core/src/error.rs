//! Error types for lyricsync-core organized by processing stage.

use std::path::PathBuf;
use thiserror::Error;

/// Engine error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input validation stage error
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold outside the unit interval
    #[error("invalid {name}: {value} (expected a value between 0 and 1)")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Input errors for transcripts, lyrics and subtitle files.
#[derive(Debug, Error)]
pub enum InputError {
    /// Required input resource does not exist
    #[error("input not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Segment missing fields or otherwise unusable
    #[error("malformed segment #{index}: {reason}")]
    Malformed { index: usize, reason: String },

    /// Segment ends before it starts, or has a negative/non-finite time
    #[error("invalid timestamps in segment #{index}: start {start}s, end {end}s")]
    InvalidTimestamps { index: usize, start: f64, end: f64 },

    /// Transcript JSON has neither a segment array nor a `segments` field
    #[error("unexpected transcript layout: {0}")]
    Layout(&'static str),

    /// Transcript is not valid JSON
    #[error("malformed transcript: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for lyricsync-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// serde_json::Error → InputError → Error
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Input(InputError::Json(e))
    }
}

impl Error {
    /// Shorthand for a missing input resource.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Error::Input(InputError::NotFound { path: path.into() })
    }

    /// Whether this error reports a missing input resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Input(InputError::NotFound { .. }))
    }
}
