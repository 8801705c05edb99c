//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and owns the bearer-token / 401 behavior;
//! `types` defines the JSON records the backend exchanges.

pub mod api;
pub mod types;
