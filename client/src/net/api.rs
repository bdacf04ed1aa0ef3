//! Request dispatch to the answer endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `DispatchError::Unavailable` since questions
//! are only ever sent from the browser.
//!
//! ERROR HANDLING
//! ==============
//! One call per question: no retry, no timeout, no cancellation. Every
//! failure comes back as a `DispatchError` so the exchange flow can turn it
//! into the error turn without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRequest, RawEnvelope};
use crate::state::session::{ChatConfig, ChatSession, Crop};

/// Failure of a single question/answer round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The request body could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("chat request failed: {0}")]
    Status(u16),

    /// The response body was not a valid envelope.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No browser runtime to send from.
    #[error("not available on server")]
    Unavailable,
}

/// Endpoint URL with the optional `cultura` query parameter appended.
#[must_use]
pub fn chat_url(endpoint: &str, crop: Option<Crop>) -> String {
    match crop {
        None => endpoint.to_owned(),
        Some(crop) => {
            let sep = if endpoint.contains('?') { '&' } else { '?' };
            format!("{endpoint}{sep}cultura={}", urlencoding::encode(crop.slug()))
        }
    }
}

/// Request body for one question.
#[must_use]
pub fn chat_request(session: &ChatSession, question: &str) -> ChatRequest {
    ChatRequest {
        user_id: session.user_id.clone(),
        question: question.to_owned(),
        session_id: Some(session.session_id.clone()),
    }
}

/// Decode a response body into an envelope.
///
/// # Errors
///
/// Returns `DispatchError::Decode` when the body is not valid JSON of a
/// known shape.
pub fn decode_envelope(body: &str) -> Result<RawEnvelope, DispatchError> {
    RawEnvelope::from_json(body).map_err(|e| DispatchError::Decode(e.to_string()))
}

/// Send one question to the configured endpoint.
///
/// # Errors
///
/// Returns a `DispatchError` on network failure, non-2xx status, or an
/// undecodable body.
pub async fn send_question(
    config: &ChatConfig,
    crop: Option<Crop>,
    session: &ChatSession,
    question: &str,
) -> Result<RawEnvelope, DispatchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = chat_url(&config.endpoint, crop);
        let body = chat_request(session, question);
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| DispatchError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(DispatchError::Status(resp.status()));
        }
        let text = resp.text().await.map_err(|e| DispatchError::Network(e.to_string()))?;
        decode_envelope(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, crop, session, question);
        Err(DispatchError::Unavailable)
    }
}
