//! Floating light/dark theme switch.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::app::use_controller;
use crate::state::app::AppState;
use crate::state::ui::Theme;

/// Icon for the theme the button switches to.
pub fn toggle_icon(theme: Theme) -> &'static str {
    if theme.is_dark() { "\u{2600}\u{fe0f}" } else { "\u{1f319}" }
}

pub fn toggle_title(theme: Theme) -> &'static str {
    if theme.is_dark() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    let theme = move || state.with(|s| s.ui.theme);

    view! {
        <button
            class="theme-toggle"
            title=move || toggle_title(theme())
            on:click=move |_| ctl.with_value(|c| c.toggle_theme())
        >
            {move || toggle_icon(theme())}
        </button>
    }
}
