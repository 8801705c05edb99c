//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` tracks the signed-in session for route guards and role-aware
//! rendering; `lang` tracks the active UI language.

pub mod auth;
pub mod lang;
