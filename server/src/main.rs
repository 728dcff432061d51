use colorpage_server::config::Config;
use colorpage_server::server::{AppState, build_router_with_state};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ensure a directory exists, creating it if necessary.
/// Returns true if directory exists and is empty.
fn ensure_directory(path: &Path, name: &str) -> std::io::Result<bool> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        info!("Created {} directory: {:?}", name, path);
        Ok(true)
    } else if path.is_dir() {
        Ok(path.read_dir()?.next().is_none())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} path {:?} exists but is not a directory", name, path),
        ))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Metrics recorder must be installed before anything records
    let prometheus = PrometheusBuilder::new().install_recorder()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorpage=debug,colorpage_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Loaded configuration: host={}, port={}, base_url={}",
        config.host, config.port, config.public_base_url
    );
    info!(
        "Processing endpoint: delay={:?}, max_upload={} bytes",
        config.process.delay, config.process.max_upload_size
    );

    if let Some(static_dir) = &config.static_files.dir {
        match ensure_directory(static_dir, "static files") {
            Ok(true) => warn!(
                "Static files directory {:?} is empty - place dog-photo.png and dog-sketch.png here",
                static_dir
            ),
            Ok(false) => {}
            Err(e) => warn!("Failed to prepare static directory {:?}: {}", static_dir, e),
        }
    } else {
        info!("Static file serving disabled (STATIC_FILES_DIR is empty)");
    }

    let app = build_router_with_state(&config, AppState::default().with_prometheus(prometheus));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Coloring page server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
