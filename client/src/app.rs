//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::area::{SectionUnavailable, StudentArea, TrainerArea};
use crate::pages::dashboard::{StudentDashboardPage, TrainerDashboardPage};
use crate::pages::{landing::LandingPage, login::LoginPage, register::RegisterPage};
use crate::session::SessionProvider;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and auth state, then routes public pages and
/// the two guarded areas.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionProvider::platform_default());
    provide_context(RwSignal::new(AuthState { loading: true, ..AuthState::default() }));

    view! {
        <Stylesheet id="leptos" href="/pkg/heavygains.css"/>
        <Title text="Heavy Gains"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=(StaticSegment("student"), ParamSegment("id")) view=StudentArea>
                    <Route path=StaticSegment("dashboard") view=StudentDashboardPage/>
                    <Route path=WildcardSegment("section") view=SectionUnavailable/>
                </ParentRoute>
                <ParentRoute path=(StaticSegment("trainer"), ParamSegment("id")) view=TrainerArea>
                    <Route path=StaticSegment("dashboard") view=TrainerDashboardPage/>
                    <Route path=WildcardSegment("section") view=SectionUnavailable/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
