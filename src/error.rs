//! Error types for the seal generation service

use thiserror::Error;

/// Result type alias for seal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating seals
#[derive(Error, Debug)]
pub enum Error {
    /// The requested score violates a domain constraint (range or decimal
    /// precision). Recovered at the HTTP boundary into a 400 response.
    #[error("{0}")]
    InvalidScore(String),

    /// A pixel-buffer operation failed. Always propagated to the caller,
    /// never swallowed into an absent result.
    #[error("image processing failed: {0}")]
    ImageProcessing(String),

    /// A static asset (template or font) could not be loaded. Fatal: a
    /// missing asset is a deployment error, not a per-request condition.
    #[error("failed to load asset: {0}")]
    AssetLoad(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_score_displays_bare_message() {
        let err = Error::InvalidScore("score must be between 0 and 10".into());
        assert_eq!(err.to_string(), "score must be between 0 and 10");
    }

    #[test]
    fn processing_error_is_prefixed() {
        let err = Error::ImageProcessing("bad buffer".into());
        assert!(err.to_string().starts_with("image processing failed"));
    }
}
