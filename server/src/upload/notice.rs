//! Non-blocking user notifications queued by the upload flow

/// Severity of a notice, drives styling on the host side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A toast-style message for the user. The host drains and displays these
/// without blocking interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    /// Whether the host should offer a "try again" action
    pub retry_available: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            retry_available: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            retry_available: true,
        }
    }
}
