//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"Heavy Gains"</h1>
            <p class="landing__tagline">"Training and diet plans, straight from your coach."</p>
            <div class="landing__actions">
                <A href="/login">"Sign in"</A>
                <A href="/register">"Create an account"</A>
            </div>
        </div>
    }
}
