//! Photo to Coloring Page Server Library
//!
//! This module exports the site components for use in integration tests
//! and external tooling.

pub mod catalog;
pub mod config;
pub mod download;
pub mod locale;
pub mod process;
pub mod server;
pub mod site;
pub mod slider;
pub mod upload;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use locale::Locale;
pub use process::{ProcessResponse, ProcessingService};
pub use server::{AppState, build_router, build_router_with_state};
pub use slider::ComparisonSlider;
pub use upload::{HttpProcessingClient, UploadController, UploadFlow};
