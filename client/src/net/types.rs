//! Wire DTOs for the chat endpoint.
//!
//! DESIGN
//! ======
//! The answer service has shipped two response shapes. Both are decoded
//! through a permissive wire struct (`WireEnvelope`) and then folded into
//! the `RawEnvelope` sum type, so downstream code matches on an explicit
//! variant instead of probing optional fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Per-tab user identifier.
    pub user_id: String,
    /// The question typed (or picked) by the user.
    pub question: String,
    /// Per-tab session identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// One retrieved context fragment from the current response shape.
///
/// Every field may be missing or `null`. The id is whatever the vector
/// store payload held, so numeric ids are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// One source entry from the legacy response shape.
///
/// The legacy backend always sent all four fields; they are still optional
/// here so a partial payload degrades instead of failing the exchange.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacySource {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Read an id stored as a string or a number; anything else is `None`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Answer text candidates carried by every shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerText {
    pub answer: Option<String>,
    pub response: Option<String>,
}

/// A decoded answer-service response.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEnvelope {
    /// `{answer|response, retrieved_contexts: [[...]], decision?, refined_question?}`
    Current {
        text: AnswerText,
        retrieved_contexts: Vec<Vec<ContextEntry>>,
        decision: Option<String>,
        refined_question: Option<String>,
    },
    /// `{response, sources: [...]}`
    Legacy { text: AnswerText, sources: Vec<LegacySource> },
    /// Neither document carrier is present.
    AnswerOnly { text: AnswerText },
}

impl RawEnvelope {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not a JSON object of
    /// either known shape.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let wire: WireEnvelope = serde_json::from_str(body)?;
        Ok(wire.into())
    }

    /// Answer text candidates regardless of shape.
    #[must_use]
    pub fn text(&self) -> &AnswerText {
        match self {
            Self::Current { text, .. } | Self::Legacy { text, .. } | Self::AnswerOnly { text } => text,
        }
    }
}

/// Union of every field either shape may carry.
#[derive(Debug, Default, Deserialize)]
struct WireEnvelope {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    decision: Option<String>,
    #[serde(default)]
    refined_question: Option<String>,
    #[serde(default)]
    retrieved_contexts: Option<Vec<Vec<ContextEntry>>>,
    #[serde(default)]
    sources: Option<Vec<LegacySource>>,
}

impl From<WireEnvelope> for RawEnvelope {
    fn from(wire: WireEnvelope) -> Self {
        let text = AnswerText { answer: wire.answer, response: wire.response };
        match (wire.retrieved_contexts, wire.sources) {
            (Some(retrieved_contexts), _) => Self::Current {
                text,
                retrieved_contexts,
                decision: wire.decision,
                refined_question: wire.refined_question,
            },
            (None, Some(sources)) => Self::Legacy { text, sources },
            (None, None) => Self::AnswerOnly { text },
        }
    }
}
