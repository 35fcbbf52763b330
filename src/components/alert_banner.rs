//! Dismissible status banner for the single visible alert.

#[cfg(test)]
#[path = "alert_banner_test.rs"]
mod alert_banner_test;

use leptos::prelude::*;

use crate::app::use_controller;
use crate::state::alert::AlertSeverity;
use crate::state::app::AppState;

pub fn banner_class(severity: AlertSeverity) -> String {
    format!("alert-banner alert-banner--{}", severity.css_modifier())
}

#[component]
pub fn AlertBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    let current = move || state.with(|s| s.alert.current.clone());

    move || {
        current().map(|alert| {
            view! {
                <div class=banner_class(alert.severity) role="alert">
                    <span class="alert-banner__message">{alert.message}</span>
                    <button
                        class="alert-banner__close"
                        title="Dismiss"
                        on:click=move |_| ctl.with_value(|c| c.dismiss_alert())
                    >
                        "\u{2715}"
                    </button>
                </div>
            }
        })
    }
}
