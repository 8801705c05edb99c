//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list items and chrome while reading/writing shared
//! state from Leptos context providers; route-scoped orchestration stays
//! in `pages`.

pub mod building_card;
pub mod lang_bar;
pub mod lang_switch;
pub mod user_select;
