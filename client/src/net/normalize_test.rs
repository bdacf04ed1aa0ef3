use super::*;
use crate::state::documents::DocumentKind;

const YEAR: i32 = 2026;

fn envelope(value: serde_json::Value) -> RawEnvelope {
    RawEnvelope::from_json(&value.to_string()).unwrap()
}

// =============================================================
// Answer text selection
// =============================================================

#[test]
fn answer_preferred_over_response() {
    let env = envelope(serde_json::json!({ "answer": "A", "response": "R" }));
    assert_eq!(normalize(&env, YEAR).answer, "A");
}

#[test]
fn response_used_when_answer_missing_or_empty() {
    let env = envelope(serde_json::json!({ "response": "R" }));
    assert_eq!(normalize(&env, YEAR).answer, "R");

    let env = envelope(serde_json::json!({ "answer": "", "response": "R" }));
    assert_eq!(normalize(&env, YEAR).answer, "R");

    let env = envelope(serde_json::json!({ "answer": null, "response": "R" }));
    assert_eq!(normalize(&env, YEAR).answer, "R");
}

#[test]
fn bare_envelope_yields_fallback_and_no_documents() {
    let env = envelope(serde_json::json!({ "decision": "direct_answer" }));
    let out = normalize(&env, YEAR);
    assert_eq!(out.answer, FALLBACK_ANSWER);
    assert!(out.documents.is_empty());
}

#[test]
fn empty_strings_yield_fallback() {
    let env = envelope(serde_json::json!({ "answer": "", "response": "" }));
    assert_eq!(normalize(&env, YEAR).answer, FALLBACK_ANSWER);
}

// =============================================================
// Flattening
// =============================================================

#[test]
fn nested_contexts_flatten_in_order() {
    let env = envelope(serde_json::json!({
        "answer": "ok",
        "retrieved_contexts": [
            [{ "id": "a" }, { "id": "b" }],
            [],
            [{ "id": "c" }],
            [{ "id": "d" }, { "id": "e" }, { "id": "f" }]
        ]
    }));
    let ids: Vec<String> = normalize(&env, YEAR)
        .documents
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, ["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn empty_contexts_yield_no_documents() {
    let env = envelope(serde_json::json!({ "answer": "ok", "retrieved_contexts": [] }));
    assert!(normalize(&env, YEAR).documents.is_empty());

    let env = envelope(serde_json::json!({ "answer": "ok", "retrieved_contexts": [[], []] }));
    assert!(normalize(&env, YEAR).documents.is_empty());
}

// =============================================================
// Per-entry mapping
// =============================================================

#[test]
fn full_context_entry_maps_fields() {
    let env = envelope(serde_json::json!({
        "answer": "ok",
        "retrieved_contexts": [[{
            "id": "ctx-1",
            "score": 0.873,
            "content": "| N | P | K |",
            "file": "tabela_npk.pdf"
        }]]
    }));
    let doc = &normalize(&env, YEAR).documents[0];
    assert_eq!(doc.id, "ctx-1");
    assert_eq!(doc.title, "tabela_npk.pdf");
    assert_eq!(doc.source, "tabela_npk.pdf");
    assert_eq!(doc.excerpt, "| N | P | K |");
    assert_eq!(doc.relevance, 87);
    assert_eq!(doc.date.as_deref(), Some("2026"));
    assert_eq!(doc.kind, DocumentKind::Research);
}

#[test]
fn missing_fields_use_positional_placeholders() {
    let env = envelope(serde_json::json!({
        "answer": "ok",
        "retrieved_contexts": [[{ "id": "x", "file": "a.pdf" }], [{}]]
    }));
    let docs = normalize(&env, YEAR).documents;
    let doc = &docs[1];
    assert_eq!(doc.id, "doc_1");
    assert_eq!(doc.title, "Documento 2");
    assert_eq!(doc.source, "Documento 2");
    assert_eq!(doc.excerpt, MISSING_EXCERPT);
    assert_eq!(doc.relevance, 0);
    assert_eq!(doc.kind, DocumentKind::Article);
}

#[test]
fn numeric_id_keeps_the_answer_and_document() {
    let env = envelope(serde_json::json!({
        "answer": "ok",
        "retrieved_contexts": [[{ "id": 7, "score": 0.5, "content": "x" }, { "id": [1] }]]
    }));
    let out = normalize(&env, YEAR);
    assert_eq!(out.answer, "ok");
    assert_eq!(out.documents[0].id, "7");
    assert_eq!(out.documents[0].relevance, 50);
    assert_eq!(out.documents[1].id, "doc_1");
}

#[test]
fn empty_id_and_file_are_treated_as_missing() {
    let env = envelope(serde_json::json!({
        "retrieved_contexts": [[{ "id": "", "file": "", "content": "" }]]
    }));
    let doc = &normalize(&env, YEAR).documents[0];
    assert_eq!(doc.id, "doc_0");
    assert_eq!(doc.title, "Documento 1");
    assert_eq!(doc.excerpt, MISSING_EXCERPT);
}

#[test]
fn score_extremes() {
    let env = envelope(serde_json::json!({
        "retrieved_contexts": [[{ "score": 1.0 }, { "score": 0 }, {}]]
    }));
    let relevance: Vec<u8> = normalize(&env, YEAR)
        .documents
        .iter()
        .map(|d| d.relevance)
        .collect();
    assert_eq!(relevance, [100, 0, 0]);
}

#[test]
fn year_labels_every_document() {
    let env = envelope(serde_json::json!({ "retrieved_contexts": [[{}, {}]] }));
    let docs = normalize(&env, 1999).documents;
    assert!(docs.iter().all(|d| d.date.as_deref() == Some("1999")));
}

// =============================================================
// Legacy shape
// =============================================================

#[test]
fn legacy_shape_maps_sources() {
    let env = envelope(serde_json::json!({
        "response": "ok",
        "sources": [{ "id": "a", "score": 0.5, "content": "x", "file": "f.pdf" }]
    }));
    let out = normalize(&env, YEAR);
    assert_eq!(out.answer, "ok");
    assert_eq!(out.documents.len(), 1);
    let doc = &out.documents[0];
    assert_eq!(doc.relevance, 50);
    assert_eq!(doc.source, "f.pdf");
    assert_eq!(doc.kind, DocumentKind::Article);
}

#[test]
fn legacy_partial_source_degrades() {
    let env = envelope(serde_json::json!({
        "response": "ok",
        "sources": [{ "file": "guia_citros.pdf" }, { "score": 0.25 }]
    }));
    let docs = normalize(&env, YEAR).documents;
    assert_eq!(docs[0].id, "doc_0");
    assert_eq!(docs[0].kind, DocumentKind::Guide);
    assert_eq!(docs[1].title, "Documento 2");
    assert_eq!(docs[1].relevance, 25);
}
