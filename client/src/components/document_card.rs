//! Card for one supporting document in the side panel.

#[cfg(test)]
#[path = "document_card_test.rs"]
mod document_card_test;

use leptos::prelude::*;

use crate::state::documents::Document;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn DocumentCard(document: Document) -> impl IntoView {
    let badge_class = format!("document-card__badge document-card__badge--{}", document.kind.css_modifier());
    let badge = document.kind.label();
    let excerpt = render_markdown_html(&document.excerpt);
    let width = relevance_bar_width(document.relevance);
    let percent = relevance_label(document.relevance);

    view! {
        <article class="document-card">
            <div class="document-card__header">
                <h4 class="document-card__title">{document.title}</h4>
                <span class=badge_class>{badge}</span>
            </div>
            <div class="document-card__excerpt" inner_html=excerpt></div>
            <div class="document-card__footer">
                <div class="document-card__meta">
                    <span class="document-card__source">{document.source}</span>
                    {document.date.map(|year| view! { <span class="document-card__date">{year}</span> })}
                </div>
                <div class="document-card__relevance">
                    <div class="document-card__bar">
                        <div class="document-card__bar-fill" style:width=width></div>
                    </div>
                    <span class="document-card__percent">{percent}</span>
                </div>
            </div>
        </article>
    }
}

pub(crate) fn relevance_bar_width(relevance: u8) -> String {
    format!("{}%", relevance.min(100))
}

pub(crate) fn relevance_label(relevance: u8) -> String {
    format!("{relevance}%")
}
