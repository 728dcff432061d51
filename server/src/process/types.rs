//! Processing endpoint types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Whether a declared MIME type is an image type (`image/*`)
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Errors that can occur while accepting a processing request
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Request has no 'image' file part")]
    MissingImage,

    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("Malformed multipart body: {0}")]
    InvalidMultipart(String),

    #[error("Upload exceeds the size limit")]
    TooLarge,

    #[error("Processing failed: {0}")]
    Failed(String),
}

/// An image received by the processing endpoint
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    /// Original file name, if the client sent one
    pub file_name: Option<String>,
    /// Declared MIME type of the part
    pub content_type: String,
    /// Size of the payload in bytes
    pub size: usize,
}

/// Response body of `POST /api/process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub success: bool,
    /// Reference to the generated coloring page
    pub result_url: String,
    /// Reference to the original photo
    pub original_url: String,
    /// Human-readable status message
    pub message: String,
}
