//! Proxy errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Errors produced while configuring or relaying to the answer service.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The request to the answer service failed before a response arrived.
    #[error("upstream request failed: {0}")]
    UpstreamRequest(String),

    /// The answer service returned a non-success HTTP status.
    #[error("upstream response error: status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The answer service body was not JSON.
    #[error("upstream response parse failed: {0}")]
    UpstreamParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProxyError {
    /// Status returned to the browser for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UpstreamStatus { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| !s.is_success())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::UpstreamRequest(_) | Self::UpstreamParse(_) => StatusCode::BAD_GATEWAY,
            Self::ConfigParse(_) | Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::UpstreamStatus { body, .. } => serde_json::json!({ "error": self.to_string(), "detail": body }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
