//! Greeting and suggested questions shown before the first question.

#[cfg(test)]
#[path = "welcome_panel_test.rs"]
mod welcome_panel_test;

use leptos::prelude::*;

/// `(button label, question sent)` pairs.
pub const SUGGESTIONS: [(&str, &str); 4] = [
    ("🔬 Como fazer análise de solo?", "Como fazer análise de solo?"),
    ("🌽 pH ideal para milho?", "Qual o pH ideal para milho?"),
    ("🌱 Calcular adubação NPK", "Como calcular adubação NPK?"),
    ("⛰️ Quando aplicar calcário?", "Quando aplicar calcário?"),
];

/// Welcome panel; clicking a suggestion submits it as a question.
#[component]
pub fn WelcomePanel(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="welcome-panel">
            <span class="welcome-panel__icon" aria-hidden="true">"🌱"</span>
            <h2 class="welcome-panel__title">"Bem-vindo ao Sb100!"</h2>
            <p class="welcome-panel__text">
                "Pergunte sobre análise de solo, correção de pH, adubação, manejo de nutrientes e técnicas de fertilização."
            </p>
            <div class="welcome-panel__suggestions">
                {SUGGESTIONS
                    .into_iter()
                    .map(|(label, question)| {
                        view! {
                            <button
                                class="welcome-panel__suggestion"
                                on:click=move |_| on_pick.run(question.to_owned())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
