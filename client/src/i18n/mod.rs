//! UI language selection and static translation tables.
//!
//! DESIGN
//! ======
//! Two complete tables (Czech default, English) as `&'static str` struct
//! fields; the struct shape makes key-completeness a compile-time fact.
//! Only the unauthenticated surfaces (login, invite) are translated —
//! the management screens are English-only.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

pub mod cs;
pub mod en;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    /// Czech (default).
    #[default]
    Cs,
    /// English.
    En,
}

impl Language {
    /// Two-letter language code used for persistence.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::En => "en",
        }
    }

    /// Parse a persisted language code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cs" => Some(Self::Cs),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// The translation table for this language.
    #[must_use]
    pub fn table(self) -> &'static Translations {
        match self {
            Self::Cs => &cs::CS,
            Self::En => &en::EN,
        }
    }
}

/// Complete set of translated strings.
#[derive(Debug)]
pub struct Translations {
    pub common: Common,
    pub login: Login,
    pub invite: Invite,
}

/// Strings shared between the unauthenticated screens.
#[derive(Debug)]
pub struct Common {
    pub email: &'static str,
    pub password: &'static str,
    pub sign_in: &'static str,
}

/// Login screen strings.
#[derive(Debug)]
pub struct Login {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub error: &'static str,
}

/// Invite-acceptance screen strings.
#[derive(Debug)]
pub struct Invite {
    pub welcome: &'static str,
    pub set_password_message: &'static str,
    pub new_password: &'static str,
    pub confirm_password: &'static str,
    pub activate_account: &'static str,
    pub activating: &'static str,
    pub password_match_error: &'static str,
    pub password_length_error: &'static str,
    pub failed_to_accept: &'static str,
    pub invalid_invite: &'static str,
}
