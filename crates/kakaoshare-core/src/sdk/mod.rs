//! Messaging SDK capability.
//!
//! The composer never talks to the vendor directly. It holds an injected
//! `Arc<dyn SdkCapability>`; the desktop app and CLI pass [`KakaoApi`], tests
//! pass a scripted fake, and `--dry-run` passes [`DryRunSdk`].

mod dry_run;
mod kakao;
mod payload;

use async_trait::async_trait;

use crate::draft::FileHandle;
use crate::error::SdkError;

pub use dry_run::DryRunSdk;
pub use kakao::{KakaoApi, UploadInfos, UploadResponse, UploadedImage};
pub use payload::{FeedContent, Link, LinkPayload, FEED_TITLE};

/// Result of `SdkCapability::initialize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The key was accepted and recorded
    Initialized,
    /// A key was already recorded; nothing changed
    AlreadyInitialized,
}

/// Upload/send operations supplied by the hosting environment.
#[async_trait]
pub trait SdkCapability: Send + Sync {
    /// Record the app key. Safe to call more than once.
    fn initialize(&self, app_key: &str) -> Result<InitOutcome, SdkError>;

    /// Whether `initialize` has succeeded
    fn is_initialized(&self) -> bool;

    /// Upload an image, returning its public URL.
    async fn upload_image(&self, file: &FileHandle) -> Result<String, SdkError>;

    /// Send a message.
    async fn send_link(&self, payload: &LinkPayload) -> Result<(), SdkError>;
}
