//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage, landing::LandingPage};
use crate::state::auth::AuthState;
use crate::theme::{self, ThemeConfig, ThemeContext};

/// Root application component.
///
/// Resolves the display preference before any page renders, then provides
/// the theme and auth contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    ThemeContext::provide(theme::publisher_for_environment(&ThemeConfig::default()));
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Title text="Budgey.ai"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
