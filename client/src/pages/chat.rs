//! Chat page: conversation column plus the document side panel.
//!
//! ARCHITECTURE
//! ============
//! The page owns the per-tab `ChatSession` and the selected crop, and runs
//! the submit flow: append the user turn and the loading placeholder, send
//! the question, then hand the result to `ExchangeOutcome`. Only one
//! question is in flight at a time because the input is disabled while the
//! placeholder exists.

use leptos::prelude::*;

use super::chat_exchange::accept_question;
use crate::components::chat_header::ChatHeader;
use crate::components::chat_input::ChatInput;
use crate::components::chat_message::ChatMessage;
use crate::components::crop_selector::CropSelector;
use crate::components::document_sidebar::DocumentSidebar;
use crate::components::welcome_panel::WelcomePanel;
use crate::state::chat::ChatState;
use crate::state::documents::DocumentsState;
use crate::state::session::{ChatConfig, ChatSession, Crop};
use crate::util::clock::now_ms;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let documents = expect_context::<RwSignal<DocumentsState>>();
    let config = expect_context::<ChatConfig>();

    let session = StoredValue::new(ChatSession::generate());
    let crop = RwSignal::new(Crop::default());
    let show_selector = config.context_selector;
    let config = StoredValue::new(config);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let submit = Callback::new(move |text: String| {
        let Some(question) = accept_question(&text, chat.with(ChatState::has_pending)) else {
            return;
        };
        let now = now_ms();
        chat.update(|c| {
            c.append_user_turn(&question, now);
            c.append_loading_placeholder(now);
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use super::chat_exchange::ExchangeOutcome;

            let config = config.get_value();
            let session = session.get_value();
            let crop = config.effective_crop(crop.get_untracked());
            let result = crate::net::api::send_question(&config, crop, &session, &question).await;

            let outcome = ExchangeOutcome::from_result(result, crate::util::clock::current_year());
            let now = now_ms();
            chat.update(|c| outcome.apply_to_chat(c, now));
            documents.update(|d| outcome.apply_to_documents(d));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (question, session, config, crop, documents);
    });

    view! {
        <div class="chat-page">
            <main class="chat-page__main">
                <ChatHeader/>
                <Show when=move || show_selector>
                    <CropSelector crop=crop/>
                </Show>
                <div class="chat-page__messages" node_ref=messages_ref>
                    <Show when=move || chat.with(ChatState::is_fresh)>
                        <WelcomePanel on_pick=submit/>
                    </Show>
                    {move || {
                        chat.get()
                            .messages
                            .into_iter()
                            .map(|message| view! { <ChatMessage message=message/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <ChatInput on_send=submit/>
            </main>
            <DocumentSidebar/>
        </div>
    }
}
