//! Answer service client.
//!
//! Thin HTTP wrapper around the retrieval-augmented answer service's chat
//! endpoint. The host relays the JSON body verbatim; envelope interpretation
//! happens in the browser.

use async_trait::async_trait;
use serde::Serialize;

use crate::config::ProxyConfig;
use crate::error::ProxyError;

// =============================================================================
// TRAIT
// =============================================================================

/// Anything that can answer a chat question. Object-safe so handlers can be
/// tested against an in-memory double.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Forward one question and return the service's JSON body.
    async fn ask(&self, cultura: Option<&str>, request: &UpstreamChatRequest) -> Result<serde_json::Value, ProxyError>;
}

/// Body posted to the answer service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamChatRequest {
    pub user_id: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// # Errors
    ///
    /// Returns `ProxyError::HttpClientBuild` if the reqwest client cannot be built.
    pub fn new(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.upstream_url.clone() })
    }

    /// Build (without sending) the POST for one question.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::UpstreamRequest` if the request cannot be assembled.
    pub fn build_request(
        &self,
        cultura: Option<&str>,
        request: &UpstreamChatRequest,
    ) -> Result<reqwest::Request, ProxyError> {
        let mut builder = self.http.post(&self.url).json(request);
        if let Some(cultura) = cultura {
            builder = builder.query(&[("cultura", cultura)]);
        }
        builder
            .build()
            .map_err(|e| ProxyError::UpstreamRequest(e.to_string()))
    }
}

#[async_trait]
impl AnswerService for UpstreamClient {
    async fn ask(&self, cultura: Option<&str>, request: &UpstreamChatRequest) -> Result<serde_json::Value, ProxyError> {
        let req = self.build_request(cultura, request)?;
        let response = self
            .http
            .execute(req)
            .await
            .map_err(|e| ProxyError::UpstreamRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProxyError::UpstreamRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ProxyError::UpstreamStatus { status, body: text });
        }

        parse_body(&text)
    }
}

/// Parse the answer service body. Any JSON value is accepted.
///
/// # Errors
///
/// Returns `ProxyError::UpstreamParse` if the body is not valid JSON.
pub fn parse_body(text: &str) -> Result<serde_json::Value, ProxyError> {
    serde_json::from_str(text).map_err(|e| ProxyError::UpstreamParse(e.to_string()))
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
