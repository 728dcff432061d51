//! ProcessingService trait and the mocked implementation

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::types::{ProcessError, ProcessRequest, ProcessResponse};
use crate::config::ProcessConfig;

/// Trait for image-to-line-art processing backends
#[async_trait]
pub trait ProcessingService: Send + Sync {
    /// Convert an uploaded photo into a coloring page
    async fn process(&self, request: &ProcessRequest) -> Result<ProcessResponse, ProcessError>;
}

/// Placeholder backend: waits a fixed delay, then returns canned image references.
pub struct MockProcessingService {
    delay: Duration,
    result_url: String,
    original_url: String,
}

impl MockProcessingService {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            delay: config.delay,
            result_url: config.result_url.clone(),
            original_url: config.original_url.clone(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockProcessingService {
    fn default() -> Self {
        Self::new(&ProcessConfig::default())
    }
}

#[async_trait]
impl ProcessingService for MockProcessingService {
    async fn process(&self, request: &ProcessRequest) -> Result<ProcessResponse, ProcessError> {
        debug!(
            "Mock processing {:?} ({}, {} bytes), delay {:?}",
            request.file_name, request.content_type, request.size, self.delay
        );
        tokio::time::sleep(self.delay).await;

        Ok(ProcessResponse {
            success: true,
            result_url: self.result_url.clone(),
            original_url: self.original_url.clone(),
            message: "Coloring page generated successfully".to_string(),
        })
    }
}
