//! Cached login session and the storage contract behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration write a `Session`; the route guard reads it on every
//! protected navigation; logout and token invalidation clear it. Storage sits
//! behind `SessionStore` so the guard never touches `localStorage` directly and
//! tests can swap in `MemorySessionStore`.
//!
//! STORAGE LAYOUT
//! ==============
//! The user record and the user type are persisted on separate keys, the same
//! way the login flow caches them. Either can go missing or disagree with the
//! other, which is what the guard treats as a corrupted session.


pub mod browser;
pub mod memory;

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use browser::BrowserSessionStore;
pub use memory::MemorySessionStore;

pub const TOKEN_KEY: &str = "heavygains.token";
pub const REFRESH_TOKEN_KEY: &str = "heavygains.refresh";
pub const USER_KEY: &str = "heavygains.user";
pub const USER_TYPE_KEY: &str = "heavygains.user_type";

/// Which side of the platform a user belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Storage/wire spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Parse the stored user type. Anything other than the two known roles is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }
}

/// User record cached next to the access token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

/// A complete, internally consistent login session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: StoredUser,
    pub token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Everything the guard needs, read from storage in one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<StoredUser>,
    pub role: Option<Role>,
}

impl SessionSnapshot {
    /// Whether a non-blank access token is present.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// The cached user, provided the user record and user type agree.
    ///
    /// `None` when either half is missing, when they name different roles, or
    /// when the user id cannot form a single path segment.
    pub fn consistent_user(&self) -> Option<&StoredUser> {
        let user = self.user.as_ref()?;
        let role = self.role?;
        if user.role != role || !is_path_safe_id(&user.id) {
            return None;
        }
        Some(user)
    }
}

/// Non-blank and free of `/`, `?` and `#`, so it embeds in a dashboard path as one segment.
fn is_path_safe_id(id: &str) -> bool {
    !id.trim().is_empty() && !id.contains(['/', '?', '#'])
}

/// Errors raised while persisting a session.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected write to {key}")]
    WriteRejected { key: &'static str },
    #[error("failed to encode session user: {0}")]
    Encode(String),
}

/// Key-value storage holding the session.
///
/// Implementors provide the three raw operations; the typed accessors are
/// shared so every backend reads and writes the same layout.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot store the value.
    fn set_item(&self, key: &'static str, value: &str) -> Result<(), SessionError>;

    fn remove_item(&self, key: &str);

    fn token(&self) -> Option<String> {
        self.get_item(TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        self.get_item(REFRESH_TOKEN_KEY)
    }

    /// Cached user record. Unparseable JSON reads as absent.
    fn user(&self) -> Option<StoredUser> {
        let raw = self.get_item(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Cached user type. Unknown values read as absent.
    fn role(&self) -> Option<Role> {
        self.get_item(USER_TYPE_KEY).as_deref().and_then(Role::parse)
    }

    fn is_authenticated(&self) -> bool {
        self.snapshot().has_token()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token(),
            user: self.user(),
            role: self.role(),
        }
    }

    /// The stored session if it is present and consistent.
    fn session(&self) -> Option<Session> {
        let snapshot = self.snapshot();
        if !snapshot.has_token() {
            return None;
        }
        let user = snapshot.consistent_user()?.clone();
        Some(Session {
            user,
            token: snapshot.token.unwrap_or_default(),
            refresh_token: self.refresh_token(),
        })
    }

    /// Persist `session`, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns an error if the user record cannot be encoded or any write fails.
    /// A failed save leaves storage cleared rather than half-written.
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(&session.user).map_err(|e| SessionError::Encode(e.to_string()))?;
        self.clear();
        let result = write_session(self, session, &user_json);
        if result.is_err() {
            self.clear();
        }
        result
    }

    /// Remove every session key.
    fn clear(&self) {
        for key in [TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY, USER_TYPE_KEY] {
            self.remove_item(key);
        }
    }
}

// The token goes last so a partial write never looks authenticated.
fn write_session<S>(store: &S, session: &Session, user_json: &str) -> Result<(), SessionError>
where
    S: SessionStore + ?Sized,
{
    store.set_item(USER_KEY, user_json)?;
    store.set_item(USER_TYPE_KEY, session.user.role.as_str())?;
    if let Some(refresh) = &session.refresh_token {
        store.set_item(REFRESH_TOKEN_KEY, refresh)?;
    }
    store.set_item(TOKEN_KEY, &session.token)
}

/// Shared handle to the active store, provided as Leptos context.
#[derive(Clone)]
pub struct SessionProvider(Arc<dyn SessionStore + Send + Sync>);

impl SessionProvider {
    pub fn new<S>(store: S) -> Self
    where
        S: SessionStore + Send + Sync + 'static,
    {
        Self(Arc::new(store))
    }

    /// Browser `localStorage` when hydrated, an empty in-memory store on the server.
    pub fn platform_default() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(BrowserSessionStore)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemorySessionStore::default())
        }
    }
}

impl Deref for SessionProvider {
    type Target = dyn SessionStore + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProvider").finish_non_exhaustive()
    }
}
