//! One conversation turn: author, time, and markdown body.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;

use crate::state::chat::{Message, Role};
use crate::util::clock::format_local_clock;
use crate::util::markdown::render_markdown_html;

/// Text shown in place of the body while the answer is pending.
pub const LOADING_TEXT: &str = "Analisando documentos";

#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == Role::User;
    let is_assistant = !is_user;
    let is_loading = message.is_loading;
    let author = author_label(message.role);
    let time = format_local_clock(message.timestamp);
    let avatar = avatar_glyph(message.role, is_loading);

    let body = if is_loading {
        view! {
            <span class="chat-message__loading">
                <span>{LOADING_TEXT}</span>
                <span class="chat-message__dots">"..."</span>
            </span>
        }
        .into_any()
    } else {
        let rendered = render_markdown_html(&message.content);
        view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
    };

    view! {
        <div
            class="chat-message"
            class:chat-message--user=is_user
            class:chat-message--assistant=is_assistant
        >
            <div class="chat-message__avatar" aria-hidden="true">{avatar}</div>
            <div class="chat-message__body">
                <div class="chat-message__meta">
                    <span class="chat-message__author">{author}</span>
                    <span class="chat-message__time">{time}</span>
                </div>
                <div class="chat-message__content" class:chat-message__content--loading=is_loading>
                    {body}
                </div>
            </div>
        </div>
    }
}

pub(crate) fn author_label(role: Role) -> &'static str {
    match role {
        Role::User => "Você",
        Role::Assistant => "Sb100",
    }
}

pub(crate) fn avatar_glyph(role: Role, loading: bool) -> &'static str {
    match (role, loading) {
        (Role::User, _) => "👤",
        (Role::Assistant, true) => "⏳",
        (Role::Assistant, false) => "🤖",
    }
}
