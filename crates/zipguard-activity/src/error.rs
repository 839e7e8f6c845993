//! Activity error type.

use thiserror::Error;
use zipguard_core::ExtractionError;

/// Result type alias using `ActivityError`.
pub type Result<T> = std::result::Result<T, ActivityError>;

/// Errors an activity evaluation can end in.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// The input was missing, mistyped, or failed validation.
    #[error("invalid activity input: {reason}")]
    Config {
        /// What was wrong with the input.
        reason: String,
    },

    /// Extraction failed; the message is the extractor's own.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl ActivityError {
    /// Returns a stable code identifying the error for callers that cannot
    /// match on the enum.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "INVALID_INPUT",
            Self::Extraction(err) => err.kind().code(),
        }
    }
}
