//! Top bar with the assistant's name and tagline.

use leptos::prelude::*;

#[component]
pub fn ChatHeader() -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-header__brand">
                <span class="chat-header__logo" aria-hidden="true">"🌿"</span>
                <div>
                    <h1 class="chat-header__title">"Sb100"</h1>
                    <p class="chat-header__subtitle">
                        "Assistente Inteligente de Agricultura e Fertilização"
                    </p>
                </div>
            </div>
        </header>
    }
}
