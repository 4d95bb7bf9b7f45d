//! Error types for KakaoShare
//!
//! Every failure ends up in the composer's single error slot, so each variant's
//! `Display` is the message shown to the user.

use thiserror::Error;

/// Configuration problems. Fatal to the share feature, never to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No app key was supplied by the environment
    #[error("messaging app key is not configured (set KAKAO_APP_KEY)")]
    MissingAppKey,

    /// The SDK refused the supplied key
    #[error("messaging app key is invalid: {0}")]
    InvalidAppKey(String),

    /// A configuration value could not be parsed
    #[error("invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Local input violations. Recoverable, they block only the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is longer than the current limit
    #[error("message exceeds {limit} characters")]
    TextTooLong { limit: usize },

    /// Submit was attempted with empty or whitespace-only text
    #[error("message required")]
    MessageRequired,

    /// Candidate file is not an image
    #[error("only image files can be attached (got {mime})")]
    NotAnImage { mime: String },

    /// Candidate file is larger than the attachment limit
    #[error("file size cannot exceed 5MB ({size} bytes)")]
    FileTooLarge { size: usize },

    /// Candidate file could not be read from disk
    #[error("could not read file: {0}")]
    Unreadable(String),
}

/// Failures reported by an SDK capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// The capability was used before a successful `initialize`
    #[error("SDK is not initialized")]
    NotInitialized,

    /// Initialization rejected the app key
    #[error("app key rejected: {0}")]
    InvalidAppKey(String),

    /// Image upload failed
    #[error("image upload failed: {0}")]
    Upload(String),

    /// Upload succeeded at the transport level but carried no image URL
    #[error("upload response did not contain an image url")]
    MalformedUploadResponse,

    /// Sending the link failed
    #[error("send failed: {0}")]
    Send(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Payload or response (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

/// Which step of a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    Upload,
    Send,
}

/// A failed submission. Displays a generic retry message; the SDK cause is
/// kept as the error source for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to send the link, please try again")]
pub struct SubmitError {
    pub stage: SubmitStage,
    #[source]
    pub source: SdkError,
}

impl SubmitError {
    pub fn upload(source: SdkError) -> Self {
        Self {
            stage: SubmitStage::Upload,
            source,
        }
    }

    pub fn send(source: SdkError) -> Self {
        Self {
            stage: SubmitStage::Send,
            source,
        }
    }
}

/// Anything the composer can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// A submission is in flight; the draft cannot change
    #[error("a submission is already in progress")]
    Busy,
}

/// Result type alias using ComposerError
pub type ComposerResult<T> = Result<T, ComposerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_too_long_names_limit() {
        let err = ValidationError::TextTooLong { limit: 200 };
        assert_eq!(err.to_string(), "message exceeds 200 characters");
    }

    #[test]
    fn test_submit_error_is_generic_but_keeps_source() {
        let err = SubmitError::upload(SdkError::MalformedUploadResponse);
        assert_eq!(err.to_string(), "failed to send the link, please try again");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("upload response did not contain an image url")
        );
    }

    #[test]
    fn test_composer_error_is_transparent() {
        let err: ComposerError = ValidationError::MessageRequired.into();
        assert_eq!(err.to_string(), "message required");
        assert!(matches!(err, ComposerError::Validation(_)));
    }
}
