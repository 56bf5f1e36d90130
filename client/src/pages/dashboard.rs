//! Student and trainer landing pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the guarded areas. On mount the page fetches `/users/me/`
//! with the stored token; a 401 means the token was invalidated server-side, so
//! the session is cleared and the user is sent back to login.

use leptos::prelude::*;

use crate::session::Role;
use crate::state::auth::AuthState;

fn dashboard_heading(role: Role) -> &'static str {
    match role {
        Role::Student => "Your training week",
        Role::Teacher => "Your students",
    }
}

/// Fetch the signed-in account once and publish it to `AuthState`.
#[cfg(feature = "hydrate")]
fn load_profile(auth: RwSignal<AuthState>) {
    use leptos_router::hooks::use_navigate;

    use crate::net::api::{self, ApiClient};
    use crate::net::error::ApiError;
    use crate::session::{SessionProvider, SessionStore};

    let store = expect_context::<SessionProvider>();
    let navigate = use_navigate();
    let Some(token) = store.token() else {
        return;
    };
    auth.update(|a| a.loading = true);
    leptos::task::spawn_local(async move {
        let client = ApiClient::from_config().with_token(token.clone());
        let result = api::fetch_me(&client).await;
        // The user may have signed out or switched accounts meanwhile.
        if !auth.get_untracked().holds_token(&token) {
            log::debug!("discarding profile response for a replaced session");
            return;
        }
        match result {
            Ok(profile) => auth.update(|a| {
                if !a.accept_profile(&token, profile) {
                    a.loading = false;
                }
            }),
            Err(ApiError::Unauthorized) => {
                log::warn!("access token rejected; signing out");
                crate::util::auth::sign_out(&store, auth, &navigate);
            }
            Err(e) => {
                log::warn!("profile fetch failed: {e}");
                auth.update(|a| a.loading = false);
            }
        }
    });
}

#[component]
fn DashboardPage(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    load_profile(auth);

    view! {
        <section class="dashboard">
            <h1 class="dashboard__title">{dashboard_heading(role)}</h1>
            <p class="dashboard__greeting">{move || format!("Welcome back, {}.", auth.get().display_name())}</p>
            <Show when=move || auth.get().loading>
                <p class="dashboard__status">"Loading your profile..."</p>
            </Show>
        </section>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Student/> }
}

#[component]
pub fn TrainerDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Teacher/> }
}
