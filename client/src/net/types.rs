//! REST wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Shapes follow the API's JSON exactly; conversion into the client's own
//! `Session` happens here so pages never interpret role flags themselves.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;
use crate::session::{Role, Session, StoredUser};

/// Body for `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /auth/register-student/` and `/auth/register-teacher/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token pair plus user, returned by login and both registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Access token sent as the bearer credential.
    pub access: String,
    /// Refresh token, when the API issues one.
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: ApiUser,
}

impl AuthResponse {
    /// Convert into a storable session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoUsableRole` when the account is flagged as neither
    /// or both of student and teacher, and `ApiError::Decode` when the access
    /// token is blank.
    pub fn into_session(self) -> Result<Session, ApiError> {
        if self.access.trim().is_empty() {
            return Err(ApiError::Decode("empty access token".to_owned()));
        }
        let user = self.user.to_stored_user()?;
        Ok(Session {
            user,
            token: self.access,
            refresh_token: self.refresh.filter(|r| !r.trim().is_empty()),
        })
    }
}

/// A platform account as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    /// Account identifier. The API sends an integer; strings are accepted too.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_teacher: bool,
    #[serde(default)]
    pub is_student: bool,
    /// Profile picture URL, if uploaded.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl ApiUser {
    /// Role implied by the account flags. Exactly one flag must be set.
    pub fn role(&self) -> Option<Role> {
        match (self.is_student, self.is_teacher) {
            (true, false) => Some(Role::Student),
            (false, true) => Some(Role::Teacher),
            _ => None,
        }
    }

    /// Full name when known, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }

    /// # Errors
    ///
    /// Returns `ApiError::NoUsableRole` when `role()` is `None`.
    pub fn to_stored_user(&self) -> Result<StoredUser, ApiError> {
        let role = self.role().ok_or(ApiError::NoUsableRole)?;
        Ok(StoredUser { id: self.id.clone(), username: self.username.clone(), role })
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .map(|n| n.to_string())
            .ok_or_else(|| D::Error::custom("expected non-negative integer id")),
        serde_json::Value::String(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(D::Error::custom("expected integer or string id")),
    }
}
