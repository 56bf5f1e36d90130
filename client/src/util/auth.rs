//! Shared sign-in / sign-out helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration, logout and token invalidation must leave storage, the
//! `AuthState` context and the current route in agreement. Pages call these
//! instead of touching the three separately.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::guard;
use crate::routes;
use crate::session::{Session, SessionError, SessionProvider, SessionStore};
use crate::state::auth::AuthState;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Persist `session`, publish it to `auth`, and go to the user's dashboard.
///
/// # Errors
///
/// Returns the storage error if the session could not be saved; nothing is
/// published or navigated in that case.
pub fn complete_sign_in<F>(
    store: &SessionProvider,
    auth: RwSignal<AuthState>,
    session: Session,
    navigate: &F,
) -> Result<(), SessionError>
where
    F: Fn(&str, NavigateOptions),
{
    store.save(&session)?;
    let target = routes::dashboard_path(session.role(), session.user_id());
    auth.update(|a| a.signed_in(session));
    navigate(&target, replace());
    Ok(())
}

/// Clear the session everywhere and return to the login page.
pub fn sign_out<F>(store: &SessionProvider, auth: RwSignal<AuthState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    store.clear();
    auth.update(AuthState::signed_out);
    navigate(routes::LOGIN_PATH, replace());
}

/// Send an already signed-in user from `path` (login/register) to their dashboard.
pub fn install_entry_redirect<F>(store: SessionProvider, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard::public_redirect(&*store, path) {
            navigate(&target, replace());
        }
    });
}
