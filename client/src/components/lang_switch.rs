//! Two-button cs/en language toggle.

use leptos::prelude::*;

use crate::i18n::Language;
use crate::state::lang::{self, LangState};

/// Language switcher reading/writing the shared [`LangState`] context.
#[component]
pub fn LangSwitch() -> impl IntoView {
    let state = expect_context::<RwSignal<LangState>>();

    let select = move |language: Language| {
        state.update(|s| s.language = language);
        lang::store_preference(language);
    };

    let button_class = move |language: Language| {
        if state.get().language == language {
            "lang-switch__btn lang-switch__btn--active"
        } else {
            "lang-switch__btn"
        }
    };

    view! {
        <div class="lang-switch">
            <button class=move || button_class(Language::Cs) on:click=move |_| select(Language::Cs)>
                "CZ"
            </button>
            <span class="lang-switch__divider">"|"</span>
            <button class=move || button_class(Language::En) on:click=move |_| select(Language::En)>
                "EN"
            </button>
        </div>
    }
}
