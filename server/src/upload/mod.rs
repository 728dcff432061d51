//! Upload flow
//!
//! This module provides:
//! - `UploadController`, the drag/drop and picker state machine
//! - `UploadFlow`, which runs submissions on the tokio runtime
//! - `ProcessingClient` and its HTTP implementation
//! - `Notice`, non-blocking user-facing messages

mod client;
mod controller;
mod flow;
mod notice;
mod types;
mod view;

pub use client::{HttpProcessingClient, ProcessingClient};
pub use controller::{FlowStatus, Submission, SubmissionOutcome, UploadController, UploadPhase};
pub use flow::UploadFlow;
pub use notice::{Notice, Severity};
pub use types::{EntryPoint, ImageFile, Ticket, UploadError};
pub use view::{UploadIcon, UploadView};
