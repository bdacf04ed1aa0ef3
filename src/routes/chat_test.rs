use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;
use crate::upstream::AnswerService;

// =============================================================================
// Mock answer service
// =============================================================================

type Call = (Option<String>, UpstreamChatRequest);

struct MockAnswers {
    reply: Result<serde_json::Value, fn() -> ProxyError>,
    calls: Mutex<Vec<Call>>,
}

impl MockAnswers {
    fn ok(value: serde_json::Value) -> Arc<Self> {
        Arc::new(Self { reply: Ok(value), calls: Mutex::new(Vec::new()) })
    }

    fn failing(make: fn() -> ProxyError) -> Arc<Self> {
        Arc::new(Self { reply: Err(make), calls: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerService for MockAnswers {
    async fn ask(&self, cultura: Option<&str>, request: &UpstreamChatRequest) -> Result<serde_json::Value, ProxyError> {
        self.calls
            .lock()
            .unwrap()
            .push((cultura.map(str::to_string), request.clone()));
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err(make) => Err(make()),
        }
    }
}

fn state_with(mock: Arc<MockAnswers>, default_cultura: Option<&str>) -> AppState {
    AppState::new(mock, default_cultura.map(str::to_string))
}

fn body(json: &str) -> ChatBody {
    serde_json::from_str(json).unwrap()
}

async fn response_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// ChatBody
// =============================================================================

#[test]
fn body_defaults_user_id() {
    let b = body(r#"{"question":"oi"}"#);
    assert_eq!(b.user_id, "default_user");
    assert_eq!(b.session_id, None);
}

#[test]
fn body_accepts_message_alias() {
    let b = body(r#"{"user_id":"u","message":"oi","session_id":"s"}"#);
    assert_eq!(b.question, "oi");
    assert_eq!(b.session_id.as_deref(), Some("s"));
}

// =============================================================================
// chat handler
// =============================================================================

#[tokio::test]
async fn relays_upstream_json_verbatim() {
    let upstream = serde_json::json!({ "text": { "answer": "Use mudas sadias." }, "retrieved_contexts": [] });
    let mock = MockAnswers::ok(upstream.clone());
    let state = state_with(mock.clone(), None);

    let Json(value) = chat(
        State(state),
        Query(ChatQuery { cultura: Some("citros".into()) }),
        Json(body(r#"{"user_id":"u1","question":"greening?","session_id":"s1"}"#)),
    )
    .await
    .unwrap();

    assert_eq!(value, upstream);
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.as_deref(), Some("citros"));
    assert_eq!(calls[0].1.user_id, "u1");
    assert_eq!(calls[0].1.question, "greening?");
    assert_eq!(calls[0].1.session_id.as_deref(), Some("s1"));
}

#[tokio::test]
async fn missing_cultura_uses_configured_default() {
    let mock = MockAnswers::ok(serde_json::json!({}));
    let state = state_with(mock.clone(), Some("cana-de-acucar"));

    chat(State(state), Query(ChatQuery::default()), Json(body(r#"{"question":"x"}"#)))
        .await
        .unwrap();

    assert_eq!(mock.calls()[0].0.as_deref(), Some("cana-de-acucar"));
}

#[tokio::test]
async fn blank_cultura_without_default_sends_none() {
    let mock = MockAnswers::ok(serde_json::json!({}));
    let state = state_with(mock.clone(), None);

    chat(
        State(state),
        Query(ChatQuery { cultura: Some("  ".into()) }),
        Json(body(r#"{"question":"x"}"#)),
    )
    .await
    .unwrap();

    assert_eq!(mock.calls()[0].0, None);
}

#[tokio::test]
async fn upstream_status_is_relayed_as_error_response() {
    let mock = MockAnswers::failing(|| ProxyError::UpstreamStatus { status: 500, body: "boom".into() });
    let state = state_with(mock, None);

    let err = chat(State(state), Query(ChatQuery::default()), Json(body(r#"{"question":"x"}"#)))
        .await
        .unwrap_err();

    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(resp).await;
    assert_eq!(json["detail"], "boom");
}

#[tokio::test]
async fn transport_failure_is_bad_gateway() {
    let mock = MockAnswers::failing(|| ProxyError::UpstreamRequest("connection refused".into()));
    let state = state_with(mock, None);

    let err = chat(State(state), Query(ChatQuery::default()), Json(body(r#"{"question":"x"}"#)))
        .await
        .unwrap_err();

    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let json = response_json(resp).await;
    assert!(json["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(super::super::healthz().await, StatusCode::OK);
}
