//! HTTP route handlers for the processing API

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::service::ProcessingService;
use super::types::{IMAGE_FIELD, ProcessError, ProcessRequest, ProcessResponse, is_image_mime};

/// Application state containing the processing backend
#[derive(Clone)]
pub struct ProcessAppState {
    pub service: Arc<dyn ProcessingService>,
}

/// Error response for the processing API
#[derive(Debug, Serialize)]
pub struct ProcessErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<ProcessError> for ProcessErrorResponse {
    fn from(e: ProcessError) -> Self {
        let code = match &e {
            ProcessError::MissingImage => "missing_image",
            ProcessError::UnsupportedType(_) => "unsupported_type",
            ProcessError::InvalidMultipart(_) => "invalid_multipart",
            ProcessError::TooLarge => "too_large",
            ProcessError::Failed(_) => "processing_failed",
        };
        Self {
            error: e.to_string(),
            code: code.to_string(),
        }
    }
}

impl IntoResponse for ProcessErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "missing_image" | "invalid_multipart" => StatusCode::BAD_REQUEST,
            "unsupported_type" => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "too_large" => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn multipart_error(e: MultipartError) -> ProcessError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ProcessError::TooLarge
    } else {
        ProcessError::InvalidMultipart(e.body_text())
    }
}

/// Pull the `image` part out of the multipart body
async fn read_image_part(multipart: &mut Multipart) -> Result<ProcessRequest, ProcessError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_image_mime(&content_type) {
            return Err(ProcessError::UnsupportedType(content_type));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(ProcessRequest {
            file_name,
            content_type,
            size: data.len(),
        });
    }

    Err(ProcessError::MissingImage)
}

/// POST /api/process - Convert an uploaded photo into a coloring page
pub async fn process_image(
    State(state): State<ProcessAppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, ProcessErrorResponse> {
    let start = Instant::now();
    let job_id = Uuid::new_v4();

    let request = read_image_part(&mut multipart).await.map_err(|e| {
        tracing::warn!("Rejected processing request {}: {}", job_id, e);
        counter!("colorpage_process_requests_total", "outcome" => "rejected").increment(1);
        ProcessErrorResponse::from(e)
    })?;

    tracing::info!(
        "Processing upload {} {:?} ({}, {} bytes)",
        job_id,
        request.file_name,
        request.content_type,
        request.size
    );

    let response = state.service.process(&request).await.map_err(|e| {
        tracing::error!("Processing {} failed for {:?}: {}", job_id, request.file_name, e);
        counter!("colorpage_process_requests_total", "outcome" => "failed").increment(1);
        ProcessErrorResponse::from(e)
    })?;

    counter!("colorpage_process_requests_total", "outcome" => "ok").increment(1);
    histogram!("colorpage_process_duration_seconds").record(start.elapsed());

    Ok(Json(response))
}

/// Build processing API routes
pub fn process_routes(state: ProcessAppState, max_upload_size: usize) -> Router {
    Router::new()
        .route("/process", post(process_image))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .with_state(state)
}
