//! Floating Sign In / Sign Out control, shown only in sign-in mode.

use leptos::prelude::*;

use crate::app::{spawn_intent, use_controller};
use crate::config::FormMode;
use crate::state::app::AppState;

#[component]
pub fn AuthBar() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    let signed_in = move || state.with(|s| s.auth.is_signed_in());
    let busy = move || state.with(|s| s.auth.loading || s.auth.signing_in);

    let on_click = move |_| {
        if signed_in() {
            ctl.with_value(|c| spawn_intent(c.sign_out()));
        } else {
            ctl.with_value(|c| spawn_intent(c.sign_in()));
        }
    };

    view! {
        <Show when=move || state.with(|s| s.mode == FormMode::SignIn)>
            <div class="auth-bar">
                <Show when=signed_in>
                    <span class="auth-bar__user">
                        {move || state.with(|s| s.auth.identity.as_ref().map(|id| id.display_name.clone()))}
                    </span>
                </Show>
                <button class="btn btn--outline btn--small" disabled=busy on:click=on_click>
                    {move || if signed_in() { "Sign Out" } else { "Sign In" }}
                </button>
            </div>
        </Show>
    }
}
