//! "Cultura" selector choosing the crop context sent with each question.

use leptos::prelude::*;

use crate::state::session::Crop;

#[component]
pub fn CropSelector(crop: RwSignal<Crop>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        if let Some(selected) = Crop::from_slug(&event_target_value(&ev)) {
            crop.set(selected);
        }
    };

    view! {
        <div class="crop-selector">
            <label class="crop-selector__label" for="cultura-select">"Cultura"</label>
            <select
                id="cultura-select"
                class="crop-selector__select"
                prop:value=move || crop.get().slug()
                on:change=on_change
            >
                {Crop::ALL
                    .into_iter()
                    .map(|option| {
                        view! { <option value=option.slug()>{option.label()}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
