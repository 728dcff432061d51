//! ProcessingClient trait and the HTTP implementation

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::types::{ImageFile, UploadError};
use crate::process::{IMAGE_FIELD, ProcessResponse};

/// Trait for whatever carries a submission to the processing endpoint
#[async_trait]
pub trait ProcessingClient: Send + Sync {
    /// Submit one image and wait for the endpoint's answer
    async fn process(&self, file: &ImageFile) -> Result<ProcessResponse, UploadError>;
}

/// Submits images to `POST /api/process` as `multipart/form-data`
#[derive(Debug, Clone)]
pub struct HttpProcessingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProcessingClient {
    /// Create a client for the given endpoint URL (e.g. `http://localhost:3000/api/process`)
    pub fn new(endpoint: impl Into<String>) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("colorpage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProcessingClient for HttpProcessingClient {
    async fn process(&self, file: &ImageFile) -> Result<ProcessResponse, UploadError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!(
            "Submitting {} ({}, {} bytes) to {}",
            file.name,
            file.mime,
            file.size(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UploadError::Status(response.status().as_u16()));
        }

        response
            .json::<ProcessResponse>()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))
    }
}
