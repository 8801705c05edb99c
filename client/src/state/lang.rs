//! UI language state and preference persistence.
//!
//! Reads the saved language from `localStorage` and falls back to Czech,
//! matching the deployment's primary audience. Switching writes back so
//! the choice survives reloads.

#[cfg(test)]
#[path = "lang_test.rs"]
mod lang_test;

use crate::i18n::Language;
use crate::util::storage;

const LANG_KEY: &str = "homiq_lang";

/// Active UI language, provided as context from the app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LangState {
    pub language: Language,
}

/// Read the persisted language preference, defaulting to Czech.
#[must_use]
pub fn read_preference() -> Language {
    storage::load_string(LANG_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist a newly selected language.
pub fn store_preference(language: Language) {
    storage::save_string(LANG_KEY, language.code());
}
