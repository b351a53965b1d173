//! Error types for presentation extraction, validation, and rendering.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning raw provider output into a
/// validated presentation, or while rendering one to a deck file.
#[derive(Error, Debug)]
pub enum Error {
    /// No brace-delimited JSON span could be located in the raw text.
    #[error("No JSON object found in provider output")]
    Extraction,

    /// The located span is not valid JSON.
    #[error("Extracted span is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The parsed object violates the presentation schema.
    #[error("Schema violation at '{field}': {reason}")]
    Schema {
        /// The first field that failed validation.
        field: String,
        /// What the field was expected to hold.
        reason: String,
    },

    /// Failed to write or read the deck file.
    #[error("Failed to write deck file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP container error while assembling the deck.
    #[error("ZIP error: {0}")]
    ZipError(String),
}

impl Error {
    /// Schema violation naming the first violated field.
    pub fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
