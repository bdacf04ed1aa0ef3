//! Response normalization: answer text selection and document extraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every successful exchange. Missing or empty fields degrade to
//! fixed placeholders; nothing in here can fail.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use super::types::{AnswerText, ContextEntry, LegacySource, RawEnvelope};
use crate::state::documents::Document;
use crate::util::classify::{classify, relevance_percent};

/// Shown when the service answered without any usable text.
pub const FALLBACK_ANSWER: &str = "Desculpe, não consegui processar sua mensagem.";

/// Shown when a retrieved fragment has no content.
pub const MISSING_EXCERPT: &str = "Conteúdo não disponível";

/// Answer text plus the documents backing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedAnswer {
    pub answer: String,
    pub documents: Vec<Document>,
}

/// Shape-independent view of one retrieved fragment.
struct SourceFields<'a> {
    id: Option<&'a str>,
    score: Option<f64>,
    content: Option<&'a str>,
    file: Option<&'a str>,
}

impl<'a> From<&'a ContextEntry> for SourceFields<'a> {
    fn from(entry: &'a ContextEntry) -> Self {
        Self {
            id: entry.id.as_deref(),
            score: entry.score,
            content: entry.content.as_deref(),
            file: entry.file.as_deref(),
        }
    }
}

impl<'a> From<&'a LegacySource> for SourceFields<'a> {
    fn from(source: &'a LegacySource) -> Self {
        Self {
            id: source.id.as_deref(),
            score: source.score,
            content: source.content.as_deref(),
            file: source.file.as_deref(),
        }
    }
}

/// Normalize an envelope into display data. `year` labels every document.
#[must_use]
pub fn normalize(envelope: &RawEnvelope, year: i32) -> NormalizedAnswer {
    let answer = answer_text(envelope.text());
    let documents = match envelope {
        RawEnvelope::Current { retrieved_contexts, .. } => build_documents(
            retrieved_contexts
                .iter()
                .flatten()
                .map(SourceFields::from),
            year,
        ),
        RawEnvelope::Legacy { sources, .. } => build_documents(sources.iter().map(SourceFields::from), year),
        RawEnvelope::AnswerOnly { .. } => Vec::new(),
    };
    NormalizedAnswer { answer, documents }
}

/// Pick `answer`, then `response`, then the fixed fallback.
#[must_use]
pub fn answer_text(text: &AnswerText) -> String {
    non_empty(text.answer.as_deref())
        .or_else(|| non_empty(text.response.as_deref()))
        .unwrap_or(FALLBACK_ANSWER)
        .to_owned()
}

fn build_documents<'a>(sources: impl Iterator<Item = SourceFields<'a>>, year: i32) -> Vec<Document> {
    let year = year.to_string();
    sources
        .enumerate()
        .map(|(index, fields)| to_document(index, &fields, &year))
        .collect()
}

fn to_document(index: usize, fields: &SourceFields<'_>, year: &str) -> Document {
    let label = non_empty(fields.file).map_or_else(|| format!("Documento {}", index + 1), str::to_owned);
    Document {
        id: non_empty(fields.id).map_or_else(|| format!("doc_{index}"), str::to_owned),
        kind: classify(&label),
        excerpt: non_empty(fields.content).unwrap_or(MISSING_EXCERPT).to_owned(),
        relevance: relevance_percent(fields.score),
        date: Some(year.to_owned()),
        source: label.clone(),
        title: label,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
