//! Reflection form: sign-in prompt or the editable draft with its submit
//! control.

#[cfg(test)]
#[path = "response_form_test.rs"]
mod response_form_test;

use leptos::prelude::*;

use crate::app::{spawn_intent, use_controller};
use crate::config::FormMode;
use crate::state::app::AppState;
use crate::state::draft::DraftField;

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Sending..." } else { "Email My Thoughts" }
}

pub fn email_placeholder(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "",
        FormMode::ManualEmail => "you@example.com",
    }
}

#[component]
pub fn ResponseForm() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();

    view! {
        <Show when=move || state.with(|s| s.poem.poem.is_some())>
            <section class="card response-form">
                <header class="card__header">
                    <h4 class="response-form__heading">"Send the Poem to Yourself"</h4>
                </header>
                <div class="card__body">
                    <Show when=move || state.with(AppState::form_unlocked) fallback=SignInPrompt>
                        <DraftFields/>
                    </Show>
                </div>
            </section>
        </Show>
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    view! {
        <div class="response-form__prompt">
            <button
                class="btn btn--outline btn--wide"
                disabled=move || state.with(|s| s.auth.loading || s.auth.signing_in)
                on:click=move |_| ctl.with_value(|c| spawn_intent(c.sign_in()))
            >
                "Sign in to Email your thoughts."
            </button>
        </div>
    }
}

#[component]
fn DraftFields() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    let submitting = move || state.with(|s| s.draft.is_submitting());
    let edit = move |field: DraftField, value: String| ctl.with_value(|c| c.edit(field, value));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctl.with_value(|c| spawn_intent(c.submit()));
    };

    view! {
        <form class="response-form__fields" on:submit=on_submit>
            <div class="response-form__row">
                <label class="response-form__group">
                    <span class="response-form__label">"Name"</span>
                    <input
                        class="response-form__input"
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || state.with(|s| s.draft.name.clone())
                        on:input=move |ev| edit(DraftField::Name, event_target_value(&ev))
                    />
                </label>
                <label class="response-form__group">
                    <span class="response-form__label">"Email"</span>
                    <input
                        class="response-form__input"
                        class:response-form__input--locked=move || state.with(|s| s.draft.email_locked)
                        type="email"
                        placeholder=move || state.with(|s| email_placeholder(s.mode))
                        readonly=move || state.with(|s| s.draft.email_locked)
                        prop:value=move || state.with(|s| s.draft.email.clone())
                        on:input=move |ev| edit(DraftField::Email, event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="response-form__group">
                <span class="response-form__label">"Your Thoughts"</span>
                <textarea
                    class="response-form__input response-form__textarea"
                    rows="5"
                    placeholder="What does this poem mean to you? How does it make you feel?"
                    prop:value=move || state.with(|s| s.draft.reflection.clone())
                    on:input=move |ev| edit(DraftField::Reflection, event_target_value(&ev))
                ></textarea>
            </label>
            <div class="response-form__actions">
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    <Show when=submitting>
                        <span class="spinner spinner--small"></span>
                    </Show>
                    {move || submit_label(submitting())}
                </button>
            </div>
        </form>
    }
}
