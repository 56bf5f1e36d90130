//! Generic REST client: base URL plus bearer token.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK responses become `ApiError`; a 401 is always `Unauthorized` so page
//! code can treat it as token invalidation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{ApiUser, AuthResponse, LoginRequest, RegisterRequest};
use crate::config;
use crate::session::Role;

pub const LOGIN_ENDPOINT: &str = "/auth/login/";
pub const ME_ENDPOINT: &str = "/users/me/";

pub fn register_endpoint(role: Role) -> &'static str {
    match role {
        Role::Student => "/auth/register-student/",
        Role::Teacher => "/auth/register-teacher/",
    }
}

/// Pull a human-readable message out of an API error body.
///
/// Understands `{"detail": ..}`, `{"error": ..}` and
/// `{"non_field_errors": [..]}`.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let text = value
        .get("detail")
        .or_else(|| value.get("error"))
        .or_else(|| value.get("non_field_errors").and_then(|v| v.get(0)))?
        .as_str()?
        .trim();
    (!text.is_empty()).then(|| text.to_owned())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, token: None }
    }

    /// Client pointed at the configured API base URL.
    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| format!("Bearer {t}"))
    }

    /// `GET path`, decoding a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-OK status, or a body that
    /// does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::get(&self.endpoint(path));
            if let Some(auth) = self.authorization_header() {
                builder = builder.header("Authorization", &auth);
            }
            let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a JSON body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-OK status, or a body that
    /// does not decode as `T`.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&self.endpoint(path));
            if let Some(auth) = self.authorization_header() {
                builder = builder.header("Authorization", &auth);
            }
            let resp = builder
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let detail = resp.text().await.ok().as_deref().and_then(error_detail);
        return Err(ApiError::from_status(status, detail));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a token pair via `POST /auth/login/`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for bad credentials, or any other
/// `ApiError` from the request.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.post_json(LOGIN_ENDPOINT, request).await
}

/// Create a student or trainer account; the API signs the new user in.
///
/// # Errors
///
/// Returns the `ApiError` from the request, with the server's validation
/// message in `Status::detail` when one is provided.
pub async fn register(client: &ApiClient, role: Role, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client.post_json(register_endpoint(role), request).await
}

/// Fetch the account behind the client's bearer token via `GET /users/me/`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the token is no longer valid.
pub async fn fetch_me(client: &ApiClient) -> Result<ApiUser, ApiError> {
    client.get_json(ME_ENDPOINT).await
}
