//! Brand bar with page-specific actions and the theme toggle.

use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;

#[component]
pub fn SiteHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Budgey.ai"</a>
            <span class="site-header__spacer"></span>
            <nav class="site-header__actions">
                {children.map(|children| children())}
                <ThemeToggle/>
            </nav>
        </header>
    }
}
