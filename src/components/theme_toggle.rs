//! Light/dark switch shown in every page header.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::theme::{Preference, use_theme};

/// Icon for the mode the button switches *to*.
pub fn toggle_icon(current: Preference) -> &'static str {
    match current {
        Preference::Dark => "☀",
        Preference::Light => "☾",
    }
}

pub fn toggle_title(current: Preference) -> &'static str {
    match current {
        Preference::Dark => "Switch to light mode",
        Preference::Light => "Switch to dark mode",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title=move || toggle_title(theme.preference())
            aria-label=move || toggle_title(theme.preference())
            aria-pressed=move || if theme.is_dark() { "true" } else { "false" }
        >
            {move || toggle_icon(theme.preference())}
        </button>
    }
}
