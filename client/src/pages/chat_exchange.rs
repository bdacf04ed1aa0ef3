//! Applying the result of one question/answer round trip.
//!
//! This is the single place dispatch failures are caught. A failure never
//! reaches the renderer as unhandled state: it becomes the fixed error turn
//! and the document panel is left as it was.

#[cfg(test)]
#[path = "chat_exchange_test.rs"]
mod chat_exchange_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::{
    net::{
        api::DispatchError,
        normalize::{NormalizedAnswer, normalize},
        types::RawEnvelope,
    },
    state::{chat::ChatState, documents::DocumentsState},
};

/// What a finished exchange does to page state.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExchangeOutcome {
    Answered(NormalizedAnswer),
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
impl ExchangeOutcome {
    pub(crate) fn from_result(result: Result<RawEnvelope, DispatchError>, year: i32) -> Self {
        match result {
            Ok(envelope) => {
                #[cfg(feature = "hydrate")]
                if let Some(summary) = routing_summary(&envelope) {
                    log::debug!("answer service routing: {summary}");
                }
                Self::Answered(normalize(&envelope, year))
            }
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::error!("chat exchange failed: {e}");
                let _ = e;
                Self::Failed
            }
        }
    }

    pub(crate) fn apply_to_chat(&self, chat: &mut ChatState, now: f64) {
        match self {
            Self::Answered(answer) => chat.resolve_loading(&answer.answer, now),
            Self::Failed => chat.resolve_loading_with_error(now),
        }
    }

    pub(crate) fn apply_to_documents(&self, documents: &mut DocumentsState) {
        if let Self::Answered(answer) = self {
            documents.replace(answer.documents.clone());
        }
    }
}

/// Decision and rewritten question reported by the current response shape.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn routing_summary(envelope: &RawEnvelope) -> Option<String> {
    let RawEnvelope::Current { decision, refined_question, .. } = envelope else {
        return None;
    };
    if decision.is_none() && refined_question.is_none() {
        return None;
    }
    Some(format!(
        "decision={} refined_question={}",
        decision.as_deref().unwrap_or("-"),
        refined_question.as_deref().unwrap_or("-"),
    ))
}

/// Trim a submission and refuse it while a request is in flight.
pub(crate) fn accept_question(text: &str, pending: bool) -> Option<String> {
    let trimmed = text.trim();
    if pending || trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}
