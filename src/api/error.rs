//! Structured error returned by the server for a failed request

use serde::{Deserialize, Serialize};
use std::fmt;

pub type ApiResult<T> = std::result::Result<T, AppError>;

/// Error document sent by the server alongside a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppError {
    /// Translation id (e.g., "app.channel.get.existing.app_error")
    pub id: String,
    pub message: String,
    pub detailed_error: String,
    pub request_id: String,
    /// HTTP status; 0 when no response was received
    pub status_code: u16,
}

impl AppError {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        detailed_error: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            detailed_error: detailed_error.into(),
            request_id: String::new(),
            status_code,
        }
    }

    /// Error for a request that never produced a response
    pub fn transport(detail: impl fmt::Display) -> Self {
        Self::new(
            "api.client.request",
            "request could not be completed",
            detail.to_string(),
            0,
        )
    }

    /// Decode an error body, falling back to a synthesised error when the
    /// body is not a server error document
    pub fn from_response(status_code: u16, body: &str) -> Self {
        match serde_json::from_str::<AppError>(body) {
            Ok(mut err) if !err.message.is_empty() => {
                err.status_code = status_code;
                err
            }
            _ => Self::new(
                "api.client.response",
                format!("unexpected response status {}", status_code),
                body.trim(),
                status_code,
            ),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}", self.id, self.message, self.detailed_error)
    }
}

impl std::error::Error for AppError {}
