//! Draft - the message being composed
//!
//! Text plus an optional image attachment. The attachment owns its preview
//! handle, so a preview URL exists exactly when a file is attached.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use image::ImageFormat;

use crate::error::ValidationError;
use crate::preview::PreviewHandle;
use crate::validate;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file picked by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    mime: String,
    bytes: Bytes,
}

impl FileHandle {
    /// Create a handle with an explicit MIME type.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Create a handle, sniffing the MIME type from content then file name.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let name = name.into();
        let bytes = bytes.into();
        let mime = sniff_mime(&name, &bytes);
        Self { name, mime, bytes }
    }

    /// Read a file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ValidationError::Unreadable(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        Ok(Self::from_bytes(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.bytes.len())
            .finish()
    }
}

fn sniff_mime(name: &str, bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(name).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

/// Attached file and the preview that renders it.
#[derive(Debug)]
pub struct Attachment {
    file: FileHandle,
    preview: PreviewHandle,
}

impl Attachment {
    pub(crate) fn new(file: FileHandle, preview: PreviewHandle) -> Self {
        Self { file, preview }
    }

    pub fn file(&self) -> &FileHandle {
        &self.file
    }

    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }

    pub fn shared_preview_url(&self) -> Arc<str> {
        self.preview.shared_url()
    }
}

/// The in-progress message.
#[derive(Debug, Default)]
pub struct Draft {
    pub(crate) text: String,
    pub(crate) attachment: Option<Attachment>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.attachment.as_ref().map(Attachment::file)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.attachment.as_ref().map(Attachment::preview_url)
    }

    /// Preview URL for rendering, shared rather than copied.
    pub fn shared_preview_url(&self) -> Option<Arc<str>> {
        self.attachment.as_ref().map(Attachment::shared_preview_url)
    }

    pub fn has_file(&self) -> bool {
        self.attachment.is_some()
    }

    /// Current character limit for the text.
    pub fn limit(&self) -> usize {
        validate::text_limit(self.has_file())
    }

    /// Counter shown under the text field, e.g. `"12/200"`.
    pub fn counter(&self) -> String {
        format!("{}/{}", validate::char_count(&self.text), self.limit())
    }

    /// True if there is nothing worth sending.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.attachment.is_none()
    }

    /// Drop the attachment, releasing its preview.
    pub(crate) fn detach(&mut self) {
        drop(self.attachment.take());
    }

    /// Attach a file. Any previous preview is released first.
    pub(crate) fn attach(&mut self, attachment: Attachment) {
        self.detach();
        self.attachment = Some(attachment);
    }

    /// Empty the draft, releasing any preview.
    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.detach();
    }
}
