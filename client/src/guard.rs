//! Session guard: render-or-redirect decision for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RoleGuard` runs this check on mount and after every navigation. The check
//! is UX only. Storage is user-controlled, so every API call made behind the
//! guard is authorized again by the server.
//!
//! POLICY
//! ======
//! - no token                      -> `/login`
//! - user record and user type disagree, or one is missing
//!                                 -> clear storage, `/login`
//! - role differs from the route's -> that role's own dashboard
//! - otherwise                     -> render
//!
//! A denial is always a redirect to somewhere the user may be, never an
//! in-place error.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, RouteAccess};
use crate::session::{Role, SessionSnapshot, SessionStore};

/// Why a protected route was not rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    NoSession,
    CorruptedSession,
    RoleMismatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: String, denial: Denial },
}

impl GuardDecision {
    fn redirect(to: impl Into<String>, denial: Denial) -> Self {
        Self::Redirect { to: to.into(), denial }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect { to, .. } => Some(to),
        }
    }

    pub fn denial(&self) -> Option<Denial> {
        match self {
            Self::Allow => None,
            Self::Redirect { denial, .. } => Some(*denial),
        }
    }
}

/// Pure decision over what was read from storage.
pub fn decide(snapshot: &SessionSnapshot, required: Role) -> GuardDecision {
    if !snapshot.has_token() {
        return GuardDecision::redirect(routes::LOGIN_PATH, Denial::NoSession);
    }
    let Some(user) = snapshot.consistent_user() else {
        return GuardDecision::redirect(routes::LOGIN_PATH, Denial::CorruptedSession);
    };
    if user.role != required {
        return GuardDecision::redirect(routes::dashboard_path(user.role, &user.id), Denial::RoleMismatch);
    }
    GuardDecision::Allow
}

/// Read the store, decide, and clear a corrupted session.
pub fn enforce<S>(store: &S, required: Role) -> GuardDecision
where
    S: SessionStore + ?Sized,
{
    let snapshot = store.snapshot();
    let decision = decide(&snapshot, required);
    match decision.denial() {
        Some(Denial::NoSession) => {
            log::debug!("no session for {} area; redirecting to login", required.as_str());
        }
        Some(Denial::CorruptedSession) => {
            log::warn!("inconsistent session data; clearing and redirecting to login");
            store.clear();
        }
        Some(Denial::RoleMismatch) => {
            log::warn!(
                "user type {} attempted to access {} area",
                snapshot.role.map_or("unknown", Role::as_str),
                required.as_str()
            );
        }
        None => {}
    }
    decision
}

/// `enforce` with the required role inferred from `path`. Public paths always pass.
pub fn enforce_path<S>(store: &S, path: &str) -> GuardDecision
where
    S: SessionStore + ?Sized,
{
    match routes::classify(path) {
        RouteAccess::Public => GuardDecision::Allow,
        RouteAccess::Protected(required) => enforce(store, required),
    }
}

/// Where a signed-in user landing on login or registration should go instead.
///
/// Only a consistent session redirects; anything else stays on the page so the
/// user can sign in again.
pub fn public_redirect<S>(store: &S, path: &str) -> Option<String>
where
    S: SessionStore + ?Sized,
{
    if !routes::is_entry_path(path) {
        return None;
    }
    let session = store.session()?;
    Some(routes::dashboard_path(session.role(), session.user_id()))
}

/// Render phase of one guarded pass.
///
/// `Checking` until the decision is made; `Redirecting` is terminal for the
/// pass and a new pass starts after navigation completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Checking,
    Authorized,
    Redirecting(String),
}

impl GuardPhase {
    pub fn from_decision(decision: &GuardDecision) -> Self {
        match decision {
            GuardDecision::Allow => Self::Authorized,
            GuardDecision::Redirect { to, .. } => Self::Redirecting(to.clone()),
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}
