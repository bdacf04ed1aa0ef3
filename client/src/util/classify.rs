//! Filename heuristics and score scaling for retrieved documents.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use crate::state::documents::DocumentKind;

/// Ordered substring rules; the first rule with a matching needle wins.
const KIND_RULES: &[(&[&str], DocumentKind)] = &[
    (&["tabela", "table"], DocumentKind::Research),
    (&["manual", "guia"], DocumentKind::Guide),
    (&["artigo", "paper"], DocumentKind::Article),
];

/// Classify a document by its filename. Matching is case-sensitive.
#[must_use]
pub fn classify(filename: &str) -> DocumentKind {
    KIND_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| filename.contains(n)))
        .map_or(DocumentKind::Article, |(_, kind)| *kind)
}

/// Scale a similarity score to a whole percentage.
///
/// Halves round up, a missing score counts as zero, and the result is
/// clamped to `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn relevance_percent(score: Option<f64>) -> u8 {
    let scaled = (score.unwrap_or(0.0) * 100.0 + 0.5).floor();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 100.0) as u8
}
