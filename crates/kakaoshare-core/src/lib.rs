//! KakaoShare Core Library
//!
//! Compose a short message, optionally attach an image, and share it through
//! KakaoTalk.
//!
//! ## Overview
//!
//! The interesting part is the [`Composer`]: it validates input (200
//! characters, 100 with an image; images only, at most 5 MB), keeps the form
//! state, and submits through an injected [`SdkCapability`] by uploading the
//! image first and then sending the link. Failures land in a single
//! user-visible error slot and never discard the draft.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use kakaoshare_core::{Composer, DataUriPreviews, KakaoApi, ShareConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShareConfig::from_env()?;
//!     let sdk = Arc::new(KakaoApi::new(&config)?);
//!     let mut composer = Composer::new(sdk, Arc::new(DataUriPreviews::new()));
//!
//!     composer.activate(config.app_key.as_deref())?;
//!     composer.set_text("hello")?;
//!     composer.submit().await?;
//!     Ok(())
//! }
//! ```

pub mod composer;
pub mod config;
pub mod draft;
pub mod error;
pub mod preview;
pub mod sdk;
pub mod validate;

// Re-exports
pub use composer::{Composer, ComposerState, Submission, SubmissionState};
pub use config::ShareConfig;
pub use draft::{Attachment, Draft, FileHandle};
pub use error::{
    ComposerError, ComposerResult, ConfigError, SdkError, SubmitError, SubmitStage,
    ValidationError,
};
pub use preview::{DataUriPreviews, PreviewHandle, PreviewStore};
pub use sdk::{
    DryRunSdk, FeedContent, InitOutcome, KakaoApi, Link, LinkPayload, SdkCapability,
    UploadResponse, FEED_TITLE,
};
pub use validate::{MAX_FILE_SIZE, TEXT_LIMIT, TEXT_LIMIT_WITH_IMAGE};
