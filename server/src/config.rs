//! Server configuration
//!
//! Configuration is loaded from environment variables on top of the defaults below.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Main server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Public base URL used for absolute links (sitemap)
    pub public_base_url: String,

    /// Static file serving configuration
    pub static_files: StaticFilesConfig,

    /// Processing endpoint configuration
    pub process: ProcessConfig,

    /// Client-side upload/download configuration
    pub client: ClientConfig,
}

/// Static file serving configuration
#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    /// Directory holding images and other public assets (None disables serving)
    pub dir: Option<PathBuf>,
}

/// Mocked processing endpoint configuration
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Artificial delay before the canned response is returned
    pub delay: Duration,
    /// Maximum accepted upload size in bytes
    pub max_upload_size: usize,
    /// Result image reference returned to clients
    pub result_url: String,
    /// Original image reference returned to clients
    pub original_url: String,
}

/// Configuration for the upload flow and download helper
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// How long a single submission may stay in flight before it fails
    pub upload_timeout: Duration,
    /// Directory that "save as" downloads land in
    pub download_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_base_url: "http://localhost:3000".to_string(),
            static_files: StaticFilesConfig::default(),
            process: ProcessConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: Some(PathBuf::from("public")),
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
            max_upload_size: 10 * 1024 * 1024, // 10 MB
            result_url: "/dog-sketch.png".to_string(),
            original_url: "/dog-photo.png".to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            upload_timeout: Duration::from_secs(30),
            download_dir: PathBuf::from("downloads"),
        }
    }
}

/// Parse a size in megabytes into bytes; `None` on bad input or overflow
fn parse_megabytes(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()?.checked_mul(1024 * 1024)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Server config
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT")
            && let Ok(p) = port.parse()
        {
            config.port = p;
        }
        if let Ok(url) = env::var("PUBLIC_BASE_URL")
            && !url.is_empty()
        {
            config.public_base_url = url.trim_end_matches('/').to_string();
        }

        // Static files
        if let Ok(dir) = env::var("STATIC_FILES_DIR") {
            config.static_files.dir = if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }

        // Processing endpoint
        if let Ok(val) = env::var("PROCESS_DELAY_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            config.process.delay = Duration::from_millis(ms);
        }
        if let Ok(val) = env::var("PROCESS_MAX_UPLOAD_MB")
            && let Some(bytes) = parse_megabytes(&val)
        {
            config.process.max_upload_size = bytes;
        }
        if let Ok(url) = env::var("PROCESS_RESULT_URL")
            && !url.is_empty()
        {
            config.process.result_url = url;
        }
        if let Ok(url) = env::var("PROCESS_ORIGINAL_URL")
            && !url.is_empty()
        {
            config.process.original_url = url;
        }

        // Client config
        if let Ok(val) = env::var("UPLOAD_TIMEOUT_SECS")
            && let Ok(secs) = val.parse::<u64>()
        {
            config.client.upload_timeout = Duration::from_secs(secs);
        }
        if let Ok(dir) = env::var("DOWNLOAD_DIR")
            && !dir.is_empty()
        {
            config.client.download_dir = PathBuf::from(dir);
        }

        config
    }
}
