//! Login page: username + password against the REST API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::routes;
use crate::session::SessionProvider;
use crate::state::auth::AuthState;
use crate::util::auth::install_entry_redirect;

pub(crate) const MISSING_CREDENTIALS: &str = "Enter your username and password.";

/// Trim the username and require both fields. The password is sent as typed.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionProvider>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_entry_redirect(store.clone(), routes::LOGIN_PATH, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::{self, ApiClient};

                let outcome = match api::login(&ApiClient::from_config(), &request).await {
                    Ok(resp) => resp.into_session().map_err(|e| e.user_message()),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        Err(e.user_message())
                    }
                };
                let outcome = outcome.and_then(|session| {
                    crate::util::auth::complete_sign_in(&store, auth, session, &navigate)
                        .map_err(|e| format!("Could not save your session: {e}"))
                });
                match outcome {
                    Ok(()) => info.set(String::new()),
                    Err(message) => info.set(message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &store, auth, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Heavy Gains"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
