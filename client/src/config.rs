//! Client configuration resolved at build time.
//!
//! `HEAVYGAINS_API_URL` points the generated WASM bundle (and SSR) at the REST
//! API. Unset means a local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Base URL of the REST API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    resolve_api_base_url(option_env!("HEAVYGAINS_API_URL"))
}

fn resolve_api_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}
