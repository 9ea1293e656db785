//! All error types for the pocodec crate.
//!
//! Parsing never fails on malformed content; errors come from I/O and from the
//! translation capability.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {message}")]
    Translation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates a new translation error with optional source error
    pub fn translation_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Translation {
            message: message.into(),
            source,
        }
    }

    /// Returns `true` when the error came from the translation capability.
    pub fn is_translation(&self) -> bool {
        matches!(self, Error::Translation { .. })
    }
}
