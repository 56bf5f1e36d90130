//! Registration page for students and trainers.
//!
//! Both registration endpoints sign the new account in, so a successful
//! submit goes through the same `complete_sign_in` path as login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::routes;
use crate::session::{Role, SessionProvider};
use crate::state::auth::AuthState;
use crate::util::auth::install_entry_redirect;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegistrationForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub(crate) const MISSING_FIELDS: &str = "Fill in every field.";
pub(crate) const INVALID_EMAIL: &str = "Enter a valid email address.";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

pub(crate) fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let username = form.username.trim();
    let email = form.email.trim();
    if name.is_empty() || username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !is_plausible_email(email) {
        return Err(INVALID_EMAIL);
    }
    if form.password != form.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionProvider>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_entry_redirect(store.clone(), routes::REGISTER_PATH, navigate.clone());

    let role = RwSignal::new(Role::Student);
    let form = RwSignal::new(RegistrationForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let role = role.get();
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::{self, ApiClient};

                let outcome = match api::register(&ApiClient::from_config(), role, &request).await {
                    Ok(resp) => resp.into_session().map_err(|e| e.user_message()),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
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
            let _ = (request, role, &store, auth, &navigate);
        }
    };

    let role_button = move |value: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="register-role"
                class:active=move || role.get() == value
                on:click=move |_| role.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <div class="register-roles">
                    {role_button(Role::Student, "I'm a student")}
                    {role_button(Role::Teacher, "I'm a trainer")}
                </div>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="full name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || form.get().username
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="confirm password"
                        prop:value=move || form.get().confirm_password
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
