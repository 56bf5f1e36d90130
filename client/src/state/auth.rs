//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the stored session for identity-dependent rendering. Storage stays
//! the source of truth: the guard refreshes this after every check, and login
//! and logout update both together.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::ApiUser;
use crate::session::{Role, Session};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Account details from `/users/me/`, once fetched.
    pub profile: Option<ApiUser>,
    pub loading: bool,
}

impl AuthState {
    /// Adopt `session`. A cached profile survives only if it belongs to the same user.
    pub fn signed_in(&mut self, session: Session) {
        if self.profile.as_ref().is_some_and(|p| p.id != session.user_id()) {
            self.profile = None;
        }
        self.session = Some(session);
        self.loading = false;
    }

    /// Whether the active session still carries `token`.
    pub fn holds_token(&self, token: &str) -> bool {
        self.session.as_ref().is_some_and(|s| s.token == token)
    }

    /// Store a `/users/me/` response fetched with `token`.
    ///
    /// Dropped when the session has since changed or ended, or when the
    /// profile names another user. Returns whether it was applied.
    pub fn accept_profile(&mut self, token: &str, profile: ApiUser) -> bool {
        let applies = self
            .session
            .as_ref()
            .is_some_and(|s| s.token == token && s.user_id() == profile.id);
        if applies {
            self.profile = Some(profile);
            self.loading = false;
        }
        applies
    }

    pub fn signed_out(&mut self) {
        self.session = None;
        self.profile = None;
        self.loading = false;
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    /// Name shown in the header: profile name, then username, then a placeholder.
    pub fn display_name(&self) -> String {
        if let Some(profile) = &self.profile {
            return profile.display_name();
        }
        self.session
            .as_ref()
            .map_or_else(|| "me".to_owned(), |s| s.user.username.clone())
    }
}
