//! Neutral placeholder shown while a guarded route is still being checked.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="loading__spinner"></div>
        </div>
    }
}
