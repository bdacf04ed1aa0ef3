//! Side panel listing the documents behind the latest answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `DocumentsState` from context; the list is replaced by the exchange
//! flow on every successful answer.

#[cfg(test)]
#[path = "document_sidebar_test.rs"]
mod document_sidebar_test;

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::state::documents::DocumentsState;

#[component]
pub fn DocumentSidebar() -> impl IntoView {
    let documents = expect_context::<RwSignal<DocumentsState>>();

    view! {
        <aside class="document-sidebar">
            <div class="document-sidebar__header">
                <h2 class="document-sidebar__title">"Documentos Consultados"</h2>
            </div>
            <div class="document-sidebar__list">
                {move || {
                    let docs = documents.get().documents;
                    if docs.is_empty() {
                        return view! {
                            <div class="document-sidebar__empty">
                                "Os documentos consultados aparecerão aqui quando você fizer perguntas"
                            </div>
                        }
                            .into_any();
                    }
                    docs.into_iter()
                        .map(|document| view! { <DocumentCard document=document/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            {move || {
                let count = documents.with(|d| d.documents.len());
                (count > 0)
                    .then(|| {
                        view! { <div class="document-sidebar__footer">{consulted_footer(count)}</div> }
                    })
            }}
        </aside>
    }
}

/// "N documento(s) consultado(s)" with Portuguese plural agreement.
pub(crate) fn consulted_footer(count: usize) -> String {
    if count == 1 {
        "1 documento consultado".to_owned()
    } else {
        format!("{count} documentos consultados")
    }
}
