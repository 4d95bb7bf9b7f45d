//! Preview handles for attached images.
//!
//! A [`PreviewHandle`] is acquired when a file is attached and revokes its URL
//! when dropped, so replacing the attachment, resetting the draft and tearing
//! down the composer all release it exactly once.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::draft::FileHandle;

/// Allocator of locally renderable preview URLs.
pub trait PreviewStore: Send + Sync {
    /// Allocate a URL that renders `file`.
    fn create(&self, file: &FileHandle) -> String;

    /// Release a URL previously returned by `create`.
    fn revoke(&self, url: &str);
}

/// Scoped preview URL. Revoked on drop.
pub struct PreviewHandle {
    url: Arc<str>,
    store: Arc<dyn PreviewStore>,
}

impl PreviewHandle {
    /// Allocate a preview for `file` from `store`.
    pub fn acquire(store: &Arc<dyn PreviewStore>, file: &FileHandle) -> Self {
        let url: Arc<str> = store.create(file).into();
        tracing::debug!(file = %file.name(), "preview acquired");
        Self {
            url,
            store: Arc::clone(store),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The URL without copying it. Data URIs run to megabytes.
    pub fn shared_url(&self) -> Arc<str> {
        Arc::clone(&self.url)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.store.revoke(&self.url);
        tracing::debug!("preview released");
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: String = self.url.chars().take(32).collect();
        f.debug_struct("PreviewHandle").field("url", &shown).finish()
    }
}

/// Base64 data URI previews.
///
/// Format: `data:image/png;base64,...`. Nothing is held outside the URL
/// itself, so revoking only updates the live count.
#[derive(Debug, Default)]
pub struct DataUriPreviews {
    live: AtomicUsize,
}

impl DataUriPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of previews allocated and not yet revoked.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl PreviewStore for DataUriPreviews {
    fn create(&self, file: &FileHandle) -> String {
        self.live.fetch_add(1, Ordering::SeqCst);
        format!("data:{};base64,{}", file.mime(), STANDARD.encode(file.bytes()))
    }

    fn revoke(&self, _url: &str) {
        // saturating: a foreign URL must not wrap the counter
        let _ = self
            .live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}
