//! Reactive application state provided as Leptos context.

pub mod auth;
