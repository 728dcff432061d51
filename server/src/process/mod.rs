//! Processing endpoint module
//!
//! This module provides:
//! - `ProcessingService` trait for abstracting the conversion backend
//! - `MockProcessingService`, the delayed canned-response placeholder
//! - HTTP routes for `POST /api/process`

pub mod routes;
mod service;
mod types;

pub use routes::{ProcessAppState, process_routes};
pub use service::{MockProcessingService, ProcessingService};
pub use types::{IMAGE_FIELD, ProcessError, ProcessRequest, ProcessResponse, is_image_mime};
