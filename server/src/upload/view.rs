//! Render model for the upload drop target

use super::controller::{UploadController, UploadPhase};
use crate::site::html::escape;

/// Icon shown in the middle of the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadIcon {
    Upload,
    Spinner,
    FileImage,
    Error,
}

impl UploadIcon {
    fn class(&self) -> &'static str {
        match self {
            Self::Upload => "icon-upload",
            Self::Spinner => "icon-spinner",
            Self::FileImage => "icon-file-image",
            Self::Error => "icon-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub icon: UploadIcon,
    pub heading: String,
    pub detail: String,
    pub drag_active: bool,
    pub retry_available: bool,
}

impl UploadView {
    pub fn from_controller(controller: &UploadController) -> Self {
        let (icon, heading, detail) = match controller.phase() {
            UploadPhase::Processing { .. } => (
                UploadIcon::Spinner,
                "Processing...".to_string(),
                "Creating your coloring page...".to_string(),
            ),
            UploadPhase::Done { file, .. } => (
                UploadIcon::FileImage,
                "File Selected".to_string(),
                file.name.clone(),
            ),
            UploadPhase::Failed { file, .. } => (
                UploadIcon::Error,
                "Upload failed".to_string(),
                format!("{} could not be processed. Click to try again.", file.name),
            ),
            UploadPhase::Idle => (
                UploadIcon::Upload,
                "Upload your photo".to_string(),
                format!(
                    "Drag & drop your {} photo here, or click to browse",
                    controller.niche()
                ),
            ),
        };

        Self {
            icon,
            heading,
            detail,
            drag_active: controller.is_drag_active(),
            retry_available: matches!(controller.phase(), UploadPhase::Failed { .. }),
        }
    }

    /// Markup for the drop target. `endpoint` is where a client host posts
    /// the `image` part.
    pub fn to_html(&self, endpoint: &str) -> String {
        let active = if self.drag_active { " is-drag-active" } else { "" };
        format!(
            r#"<div class="hero-uploader{active}" data-uploader data-endpoint="{endpoint}">
  <input id="file-upload" type="file" class="hidden" accept="image/*">
  <div class="uploader-icon {icon}"></div>
  <h3 class="uploader-heading">{heading}</h3>
  <p class="uploader-detail">{detail}</p>
  <div class="uploader-notices" aria-live="polite"></div>
</div>"#,
            endpoint = escape(endpoint),
            icon = self.icon.class(),
            heading = escape(&self.heading),
            detail = escape(&self.detail),
        )
    }
}
