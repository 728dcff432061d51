//! Test Utilities Module
//!
//! Provides fixtures, a mock processing client and a router test context.
//! This module is only compiled when running tests.

#![cfg(test)]

use crate::config::Config;
use crate::process::ProcessResponse;
use crate::server::build_router;
use crate::upload::{ImageFile, ProcessingClient, UploadError};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tower::util::ServiceExt;

// ============================================================================
// Test Context
// ============================================================================

/// Router built from a test configuration
pub struct TestContext {
    pub config: Config,
    pub router: Router,
}

impl TestContext {
    /// Default configuration with no processing delay and no static files
    pub fn new() -> Self {
        let mut config = Config::default();
        config.process.delay = Duration::ZERO;
        config.static_files.dir = None;
        let router = build_router(&config);
        Self { config, router }
    }

    /// Make an HTTP request to the test router
    pub async fn request(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request")
    }

    /// GET `uri`, returning status and body text
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        let response = self.request(request).await;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A small JPEG upload named `rex.jpg`
pub fn test_image() -> ImageFile {
    ImageFile::new("rex.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xD9])
}

/// The canned success response of the mocked endpoint
pub fn test_response() -> ProcessResponse {
    ProcessResponse {
        success: true,
        result_url: "/dog-sketch.png".to_string(),
        original_url: "/dog-photo.png".to_string(),
        message: "Coloring page generated successfully".to_string(),
    }
}

// ============================================================================
// Mock Processing Client
// ============================================================================

/// Scripted processing client
///
/// Results are handed out in order; the last one repeats. A gated client
/// holds every call until the gate is opened.
pub struct MockProcessingClient {
    results: Mutex<VecDeque<Result<ProcessResponse, UploadError>>>,
    gate: Option<watch::Receiver<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockProcessingClient {
    pub fn sequence(results: Vec<Result<ProcessResponse, UploadError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            gate: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn immediate(result: Result<ProcessResponse, UploadError>) -> Self {
        Self::sequence(vec![result])
    }

    /// Client whose calls wait until `true` is sent on the returned gate
    pub fn gated(
        result: Result<ProcessResponse, UploadError>,
    ) -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        let mut client = Self::immediate(result);
        client.gate = Some(rx);
        (client, tx)
    }

    /// Shared count of `process` calls
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn next_result(&self) -> Result<ProcessResponse, UploadError> {
        let mut results = self.results.lock().unwrap();
        if results.len() > 1 {
            results.pop_front().unwrap()
        } else {
            results
                .front()
                .cloned()
                .unwrap_or_else(|| Err(UploadError::Transport("no scripted result".into())))
        }
    }
}

#[async_trait]
impl ProcessingClient for MockProcessingClient {
    async fn process(&self, _file: &ImageFile) -> Result<ProcessResponse, UploadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let mut gate = gate.clone();
            if gate.wait_for(|open| *open).await.is_err() {
                return Err(UploadError::Transport("gate closed".into()));
            }
        }
        self.next_result()
    }
}
