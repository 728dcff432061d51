//! Router assembly shared by the binary and the tests

use axum::{
    Json, Router,
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::locale::locale_redirect;
use crate::process::{MockProcessingService, ProcessAppState, process_routes};
use crate::site::{SiteAppState, not_found, site_routes};

/// Application start time for uptime calculation
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Shared state of the operational endpoints
#[derive(Clone, Default)]
pub struct AppState {
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
}

async fn health() -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime,
    })
}

/// Endpoint to expose metrics in Prometheus format
async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}

/// Build the full application router from configuration.
pub fn build_router(config: &Config) -> Router {
    build_router_with_state(config, AppState::default())
}

pub fn build_router_with_state(config: &Config, app_state: AppState) -> Router {
    START_TIME.get_or_init(Instant::now);

    let process_state = ProcessAppState {
        service: Arc::new(MockProcessingService::new(&config.process)),
    };
    let site_state = SiteAppState {
        public_base_url: Arc::from(config.public_base_url.as_str()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/metrics/prometheus", get(prometheus_metrics))
        .with_state(app_state)
        .nest("/api", process_routes(process_state, config.process.max_upload_size))
        .merge(site_routes(site_state));

    // Unmatched paths fall back to static files, then to the HTML 404 page
    let app = match &config.static_files.dir {
        Some(static_dir) if static_dir.is_dir() => {
            info!("Serving static files from: {:?}", static_dir);
            let serve_dir = ServeDir::new(static_dir).not_found_service(not_found.into_service());
            let static_service = ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .service(serve_dir);
            app.fallback_service(static_service)
        }
        Some(static_dir) => {
            warn!(
                "Static files directory not found: {:?} - static file serving disabled",
                static_dir
            );
            app.fallback(not_found)
        }
        None => app.fallback(not_found),
    };

    app.layer(middleware::from_fn(locale_redirect))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestContext;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_reports_version() {
        let ctx = TestContext::new();
        let (status, body) = ctx.get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_unmatched_path_renders_html_404() {
        let ctx = TestContext::new();
        let (status, body) = ctx.get("/en/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_every_tool_page_renders() {
        let ctx = TestContext::new();
        for page in crate::catalog::tool_pages() {
            let (status, _) = ctx.get(&page.path()).await;
            assert_eq!(status, StatusCode::OK, "{}", page.path());
        }
    }
}
