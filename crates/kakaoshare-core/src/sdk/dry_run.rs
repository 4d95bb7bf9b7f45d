//! Offline capability that logs instead of sending.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use super::{InitOutcome, LinkPayload, SdkCapability};
use crate::draft::FileHandle;
use crate::error::SdkError;

/// Accepts every call, logs it and keeps the sent payloads.
#[derive(Debug, Default)]
pub struct DryRunSdk {
    initialized: AtomicBool,
    uploads: AtomicUsize,
    sent: Mutex<Vec<LinkPayload>>,
}

impl DryRunSdk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads "sent" so far, oldest first.
    pub fn sent(&self) -> Vec<LinkPayload> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl SdkCapability for DryRunSdk {
    fn initialize(&self, app_key: &str) -> Result<InitOutcome, SdkError> {
        if app_key.trim().is_empty() {
            return Err(SdkError::InvalidAppKey("key is blank".to_string()));
        }
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Ok(InitOutcome::AlreadyInitialized);
        }
        info!("dry-run SDK initialized");
        Ok(InitOutcome::Initialized)
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    async fn upload_image(&self, file: &FileHandle) -> Result<String, SdkError> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        let url = format!("dryrun://image/{}/{}", n, file.name());
        info!(file = %file.name(), size = file.size(), %url, "dry-run upload");
        Ok(url)
    }

    async fn send_link(&self, payload: &LinkPayload) -> Result<(), SdkError> {
        let template = payload.to_template_json()?;
        info!(object_type = payload.object_type(), %template, "dry-run send");
        self.sent.lock().push(payload.clone());
        Ok(())
    }
}
