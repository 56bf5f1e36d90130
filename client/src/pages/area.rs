//! Guarded layouts for the student and trainer route trees.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::role_guard::RoleGuard;
use crate::components::top_header::TopHeader;
use crate::session::Role;

#[component]
fn AreaLayout() -> impl IntoView {
    view! {
        <div class="area">
            <TopHeader/>
            <main class="area__content">
                <Outlet/>
            </main>
        </div>
    }
}

#[component]
pub fn StudentArea() -> impl IntoView {
    view! {
        <RoleGuard role=Role::Student>
            <AreaLayout/>
        </RoleGuard>
    }
}

#[component]
pub fn TrainerArea() -> impl IntoView {
    view! {
        <RoleGuard role=Role::Teacher>
            <AreaLayout/>
        </RoleGuard>
    }
}

/// Any area path without a dedicated page.
#[component]
pub fn SectionUnavailable() -> impl IntoView {
    view! { <p class="area__empty">"This section is not available yet."</p> }
}
