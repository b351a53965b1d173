//! Error taxonomy for the generation pipeline.
//!
//! Every failure is terminal for its request: no partial commits, no
//! automatic retries against the provider. The status-code mapping
//! preserves the HTTP semantics of the original service boundary.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the generation orchestrator.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller-supplied request is malformed. No side effects.
    #[error("Invalid request: {0}")]
    Input(String),

    /// The external provider call failed (network, HTTP, payload shape).
    #[error("Provider request failed: {0}")]
    Provider(String),

    /// The provider did not answer within the configured timeout.
    #[error("Provider timed out after {0} seconds")]
    ProviderTimeout(u64),

    /// The provider answered but its output failed the structural
    /// contract (extraction, parse, or schema).
    #[error(transparent)]
    Content(#[from] deck_core::Error),

    /// Unknown session on read or delete.
    #[error("Conversation not found: {0}")]
    NotFound(String),

    /// The external conversation store failed. Not recoverable here.
    #[error("Conversation store failure: {0}")]
    Store(String),
}

impl Error {
    /// The HTTP status class this error maps to at the service boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Input(_) => 400,
            Self::NotFound(_) => 404,
            Self::Provider(_) | Self::ProviderTimeout(_) | Self::Content(_) | Self::Store(_) => {
                500
            }
        }
    }

    /// Generic caller-facing message; the detailed cause stays in logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Input(_) => "Message must be a non-empty string",
            Self::NotFound(_) => "Conversation not found",
            _ => "Failed to generate presentation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(Error::Input("empty".into()).status_code(), 400);
        assert_eq!(Error::NotFound("s1".into()).status_code(), 404);
        assert_eq!(Error::Provider("boom".into()).status_code(), 500);
        assert_eq!(Error::ProviderTimeout(30).status_code(), 500);
        assert_eq!(Error::Content(deck_core::Error::Extraction).status_code(), 500);
    }

    #[test]
    fn test_public_message_hides_detail() {
        let err = Error::Provider("api key leaked in detail".into());
        assert_eq!(err.public_message(), "Failed to generate presentation");
    }
}
