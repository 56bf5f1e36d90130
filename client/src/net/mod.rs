//! Networking for the external REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the bearer-token HTTP client and the auth calls, `types` the
//! wire DTOs, and `error` the shared failure type.

pub mod api;
pub mod error;
pub mod types;
