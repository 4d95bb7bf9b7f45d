//! Input limits for the composer.

use crate::draft::FileHandle;
use crate::error::ValidationError;

/// Maximum message length without an attachment
pub const TEXT_LIMIT: usize = 200;

/// Maximum message length with an image attached
pub const TEXT_LIMIT_WITH_IMAGE: usize = 100;

/// Largest accepted attachment (5 MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Character limit for the current attachment state.
pub fn text_limit(has_file: bool) -> usize {
    if has_file {
        TEXT_LIMIT_WITH_IMAGE
    } else {
        TEXT_LIMIT
    }
}

/// Length as the user sees it (Unicode scalar values, not bytes).
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn validate_text(text: &str, has_file: bool) -> Result<(), ValidationError> {
    let limit = text_limit(has_file);
    if char_count(text) > limit {
        return Err(ValidationError::TextTooLong { limit });
    }
    Ok(())
}

pub fn validate_file(file: &FileHandle) -> Result<(), ValidationError> {
    if !file.is_image() {
        return Err(ValidationError::NotAnImage {
            mime: file.mime().to_string(),
        });
    }
    if file.size() > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge { size: file.size() });
    }
    Ok(())
}
