//! Pre-flight validation for user-supplied images.

use crate::error::DesignMuseError;

/// MIME types the analysis pipeline accepts.
pub const ACCEPTED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Upload cap, 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Validate an upload before it reaches the analysis call.
pub fn validate_image_upload(mime_type: &str, size_bytes: u64) -> Result<(), DesignMuseError> {
    if !ACCEPTED_IMAGE_TYPES.contains(&mime_type) {
        return Err(DesignMuseError::UnsupportedImageType(mime_type.to_string()));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(DesignMuseError::ImageTooLarge(size_bytes));
    }
    Ok(())
}
