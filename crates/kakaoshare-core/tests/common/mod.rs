//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use kakaoshare_core::{
    FileHandle, InitOutcome, LinkPayload, PreviewStore, SdkCapability, SdkError,
};
use parking_lot::Mutex;

/// One call seen by [`FakeSdk`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Initialize(String),
    Upload(String),
    Send(LinkPayload),
}

/// Scripted SDK that records every call.
#[derive(Debug, Default)]
pub struct FakeSdk {
    initialized: AtomicBool,
    pub upload_result: Mutex<Option<Result<String, SdkError>>>,
    pub send_result: Mutex<Option<SdkError>>,
    pub reject_key: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl FakeSdk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads return `url`.
    pub fn uploading_to(url: &str) -> Self {
        let sdk = Self::new();
        *sdk.upload_result.lock() = Some(Ok(url.to_string()));
        sdk
    }

    pub fn fail_upload(&self, err: SdkError) {
        *self.upload_result.lock() = Some(Err(err));
    }

    pub fn fail_send(&self, err: SdkError) {
        *self.send_result.lock() = Some(err);
    }

    pub fn succeed(&self) {
        *self.send_result.lock() = None;
        let mut upload = self.upload_result.lock();
        if matches!(*upload, Some(Err(_))) {
            *upload = Some(Ok("http://x/img.png".to_string()));
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn sdk_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Initialize(_)))
            .collect()
    }

    pub fn sent(&self) -> Vec<LinkPayload> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl SdkCapability for FakeSdk {
    fn initialize(&self, app_key: &str) -> Result<InitOutcome, SdkError> {
        self.calls.lock().push(Call::Initialize(app_key.to_string()));
        if self.reject_key.load(Ordering::SeqCst) {
            return Err(SdkError::InvalidAppKey("unknown app".to_string()));
        }
        if self.initialized.swap(true, Ordering::SeqCst) {
            Ok(InitOutcome::AlreadyInitialized)
        } else {
            Ok(InitOutcome::Initialized)
        }
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    async fn upload_image(&self, file: &FileHandle) -> Result<String, SdkError> {
        self.calls.lock().push(Call::Upload(file.name().to_string()));
        tokio::task::yield_now().await;
        self.upload_result
            .lock()
            .clone()
            .unwrap_or_else(|| Ok("http://x/img.png".to_string()))
    }

    async fn send_link(&self, payload: &LinkPayload) -> Result<(), SdkError> {
        self.calls.lock().push(Call::Send(payload.clone()));
        tokio::task::yield_now().await;
        match self.send_result.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Preview store that counts allocations and releases per URL.
#[derive(Debug, Default)]
pub struct CountingPreviews {
    next: Mutex<usize>,
    created: Mutex<Vec<String>>,
    revoked: Mutex<HashMap<String, usize>>,
}

impl CountingPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created(&self) -> usize {
        self.created.lock().len()
    }

    pub fn revoked(&self) -> usize {
        self.revoked.lock().values().sum()
    }

    pub fn live(&self) -> usize {
        self.created() - self.revoked()
    }

    /// True if no URL was revoked more than once or without being created.
    pub fn balanced(&self) -> bool {
        let created = self.created.lock();
        self.revoked
            .lock()
            .iter()
            .all(|(url, n)| *n == 1 && created.contains(url))
    }
}

impl PreviewStore for CountingPreviews {
    fn create(&self, file: &FileHandle) -> String {
        let mut next = self.next.lock();
        *next += 1;
        let url = format!("blob:test/{}/{}", *next, file.name());
        self.created.lock().push(url.clone());
        url
    }

    fn revoke(&self, url: &str) {
        *self.revoked.lock().entry(url.to_string()).or_insert(0) += 1;
    }
}

pub fn png(name: &str) -> FileHandle {
    FileHandle::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}
