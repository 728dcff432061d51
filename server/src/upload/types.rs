//! Upload flow types and error definitions

use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;

use crate::process::is_image_mime;

/// Errors surfaced by the upload flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Not an image: {mime:?}")]
    NotAnImage { mime: String },

    #[error("No file was provided")]
    NoFile,

    #[error("A submission is already in progress")]
    Busy,

    #[error("Nothing to retry")]
    NothingToRetry,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Processing endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Processing was not successful: {0}")]
    Unsuccessful(String),

    #[error("Processing timed out after {0:?}")]
    TimedOut(Duration),
}

/// How a file reached the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Dropped onto the drop target
    Drop,
    /// Chosen with the file picker
    Picker,
}

/// A user-chosen file: payload, name and declared MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Identifier of one submission. Outcomes carrying a ticket that is no
/// longer current are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}
