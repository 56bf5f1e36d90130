//! Header for the signed-in areas: who is signed in, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::{Role, SessionProvider};
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

fn area_title(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Student) => "Student",
        Some(Role::Teacher) => "Trainer",
        None => "",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let store = expect_context::<SessionProvider>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| sign_out(&store, auth, &navigate);

    view! {
        <header class="top-header">
            <span class="top-header__brand">"Heavy Gains"</span>
            <span class="top-header__area">{move || area_title(auth.get().role())}</span>
            <span class="top-header__user">{move || auth.get().display_name()}</span>
            <button class="top-header__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
