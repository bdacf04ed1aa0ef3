//! Chat proxy route.
//!
//! `POST /api/chat[?cultura=<slug>]` forwards the browser's question to the
//! answer service and relays its JSON body unchanged.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::error::ProxyError;
use crate::state::AppState;
use crate::upstream::UpstreamChatRequest;

#[derive(Debug, Default, Deserialize)]
pub struct ChatQuery {
    pub cultura: Option<String>,
}

/// Browser request body. `message` is accepted as an alias of `question`.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(alias = "message")]
    pub question: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_user_id() -> String {
    "default_user".to_string()
}

/// `POST /api/chat` — relay one question to the answer service.
///
/// # Errors
///
/// Upstream failures map through `ProxyError`'s `IntoResponse`.
pub async fn chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
    Json(body): Json<ChatBody>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let cultura = query
        .cultura
        .filter(|c| !c.trim().is_empty())
        .or_else(|| state.default_cultura.clone());

    let request = UpstreamChatRequest {
        user_id: body.user_id,
        question: body.question,
        session_id: body.session_id,
    };

    let started = Instant::now();
    let result = state.upstream.ask(cultura.as_deref(), &request).await;
    let elapsed_ms = started.elapsed().as_millis();

    match result {
        Ok(value) => {
            tracing::info!(
                cultura = cultura.as_deref().unwrap_or("-"),
                session_id = request.session_id.as_deref().unwrap_or("-"),
                elapsed_ms,
                "chat relayed"
            );
            Ok(Json(value))
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                cultura = cultura.as_deref().unwrap_or("-"),
                elapsed_ms,
                "chat relay failed"
            );
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
