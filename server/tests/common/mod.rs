//! Common Test Utilities for Integration Tests
//!
//! Shared helpers used across integration test modules.

use axum::Router;
use colorpage_server::config::Config;
use colorpage_server::server::build_router;
use std::time::Duration;

/// Configuration for in-process tests: short delay, no static directory
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.process.delay = Duration::from_millis(10);
    config.process.max_upload_size = 64 * 1024;
    config.static_files.dir = None;
    config.public_base_url = "https://colorpage.test".to_string();
    config
}

/// Create a test application router with all routes configured
pub fn create_test_app() -> Router {
    build_router(&test_config())
}

/// Serve `router` on an ephemeral port, returning its base URL
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{}", addr)
}

/// Build a `multipart/form-data` body with one file part
pub fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> (String, Vec<u8>) {
    let boundary = "colorpage-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    (format!("multipart/form-data; boundary={}", boundary), body)
}

/// Initialize test logging for detailed output
#[allow(dead_code)]
pub fn init_test_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorpage_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
