//! Route guard wrapping every protected subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Placed around the student and trainer areas. Children stay unmounted until
//! `guard::enforce` authorizes the current path, so protected content never
//! flashes for a missing or mismatched session. During SSR the effect does not
//! run and the loading indicator is what gets rendered.

#[cfg(test)]
#[path = "role_guard_test.rs"]
mod role_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::guard::{self, GuardPhase};
use crate::session::{Role, SessionProvider, SessionStore};
use crate::state::auth::AuthState;

/// One guard pass for `path`.
///
/// Drops back to `Checking` before storage is read, so children of a previous
/// authorized pass are unmounted while the new decision is pending.
pub fn run_guard_pass<S, F>(
    store: &S,
    role: Option<Role>,
    path: &str,
    auth: RwSignal<AuthState>,
    phase: RwSignal<GuardPhase>,
    navigate: &F,
) where
    S: SessionStore + ?Sized,
    F: Fn(&str, NavigateOptions),
{
    phase.set(GuardPhase::Checking);
    let decision = match role {
        Some(required) => guard::enforce(store, required),
        None => guard::enforce_path(store, path),
    };
    match store.session() {
        Some(session) => auth.update(|a| a.signed_in(session)),
        None => auth.update(AuthState::signed_out),
    }

    let next = GuardPhase::from_decision(&decision);
    if let GuardPhase::Redirecting(target) = &next {
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
    phase.set(next);
}

#[component]
pub fn RoleGuard(
    /// Role the subtree requires. Inferred from the path when omitted.
    #[prop(optional)]
    role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = expect_context::<SessionProvider>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let phase = RwSignal::new(GuardPhase::Checking);

    // One pass per navigation.
    Effect::new(move || {
        let path = pathname.get();
        run_guard_pass(&*store, role, &path, auth, phase, &navigate);
    });

    view! { <GuardedContent phase=phase>{children()}</GuardedContent> }
}

/// Children once `phase` is authorized, the loading indicator otherwise.
#[component]
fn GuardedContent(#[prop(into)] phase: Signal<GuardPhase>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || phase.get().is_authorized() fallback=|| view! { <LoadingIndicator/> }>
            {children()}
        </Show>
    }
}
