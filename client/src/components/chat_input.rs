//! Question input. Enter submits, Shift+Enter inserts a newline.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Multi-line input bound to the shared chat state's pending flag.
#[component]
pub fn ChatInput(on_send: Callback<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let pending = move || chat.with(ChatState::has_pending);

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || pending() {
            return;
        }
        on_send.run(text);
        input.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !pending();

    view! {
        <form class="chat-input" on:submit=on_submit>
            <div class="chat-input__row">
                <textarea
                    class="chat-input__textarea"
                    placeholder="Digite sua pergunta sobre agricultura e fertilização..."
                    disabled=pending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary chat-input__send" type="submit" disabled=move || !can_send()>
                    "Enviar"
                </button>
            </div>
            <p class="chat-input__hint">"Pressione Enter para enviar • Shift + Enter para nova linha"</p>
        </form>
    }
}

pub(crate) fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
