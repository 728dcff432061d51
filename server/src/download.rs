//! Download helper
//!
//! Fetches a generated image and saves it under a download directory, the
//! filesystem counterpart of a browser "save as".

use futures_util::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::site::html::escape;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Download request failed: {0}")]
    Transport(String),

    #[error("Download returned HTTP {0}")]
    Status(u16),

    #[error("Could not write download: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name: {0:?}")]
    InvalidFilename(String),
}

/// A file name must name a single entry inside the download directory.
fn validate_filename(filename: &str) -> Result<(), DownloadError> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\'])
        || filename.contains('\0');
    if invalid {
        return Err(DownloadError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

/// Copy the response body into `file`, returning the number of bytes written.
async fn write_body<S>(file: &mut File, stream: S) -> Result<u64, DownloadError>
where
    S: Stream<Item = reqwest::Result<bytes::Bytes>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| DownloadError::Transport(e.to_string()))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

/// Stream `url` into `dir/filename`, creating `dir` if needed.
///
/// A partially written file is removed when the transfer fails.
pub async fn download_image(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, DownloadError> {
    validate_filename(filename)?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DownloadError::Status(response.status().as_u16()));
    }

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    let mut file = File::create(&path).await?;

    match write_body(&mut file, response.bytes_stream()).await {
        Ok(written) => {
            debug!("Wrote {} bytes from {} to {:?}", written, url, path);
            Ok(path)
        }
        Err(e) => {
            drop(file);
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                warn!("Failed to remove partial download {:?}: {}", path, remove_err);
            }
            Err(e)
        }
    }
}

/// Save `url` as `filename`, logging instead of returning failures.
pub async fn save_as(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
    filename: &str,
) -> Option<PathBuf> {
    match download_image(client, url, dir, filename).await {
        Ok(path) => {
            info!("Downloaded {} to {:?}", url, path);
            Some(path)
        }
        Err(e) => {
            error!("Download failed for {}: {}", url, e);
            None
        }
    }
}

/// HTTP client bound to the configured download directory
#[derive(Debug, Clone)]
pub struct Downloader {
    client: reqwest::Client,
    dir: PathBuf,
}

impl Downloader {
    pub fn new(config: &ClientConfig) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("colorpage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DownloadError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            dir: config.download_dir.clone(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn download(&self, url: &str, filename: &str) -> Result<PathBuf, DownloadError> {
        download_image(&self.client, url, &self.dir, filename).await
    }

    pub async fn save_as(&self, url: &str, filename: &str) -> Option<PathBuf> {
        save_as(&self.client, url, &self.dir, filename).await
    }
}

/// Markup for a download button. The `data-download-*` attributes are the
/// render contract for a client host that performs the save.
pub fn download_button_html(image_url: &str, filename: &str, label: &str) -> String {
    format!(
        r#"<button type="button" class="download-button" data-download-url="{}" data-download-filename="{}">{}</button>"#,
        escape(image_url),
        escape(filename),
        escape(label)
    )
}
