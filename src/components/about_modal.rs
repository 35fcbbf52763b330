//! Informational modal describing the practice of response poetry.

use leptos::prelude::*;

use crate::app::use_controller;
use crate::state::app::AppState;

#[derive(Clone, Copy)]
struct Step {
    label: &'static str,
    detail: &'static str,
}

const STEPS: &[Step] = &[
    Step { label: "Read:", detail: "Each visit brings you a new poem from our curated collection" },
    Step { label: "Ruminate:", detail: "Email your reflections to yourself for future reference" },
    Step { label: "Repeat:", detail: "Return daily to continue your poetic journey" },
];

const FEATURES: &[&str] = &[
    "\u{1f319} Dark/Light mode for comfortable reading",
    "\u{1f4e7} Email your thoughts to yourself",
    "\u{1f4f1} Responsive design for all devices",
    "\u{1f3a8} Beautiful, distraction-free interface",
    "\u{1f4da} Curated poems from classical and contemporary poets",
];

/// Round "i" button that opens the about modal.
#[component]
pub fn AboutButton() -> impl IntoView {
    let ctl = use_controller();

    view! {
        <button class="about-toggle" title="About this app" on:click=move |_| ctl.with_value(|c| c.open_about())>
            "\u{2139}\u{fe0f}"
        </button>
    }
}

/// Fullscreen modal, rendered while `ui.about_open` is set.
#[component]
pub fn AboutModal() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    let on_close = Callback::new(move |()| ctl.with_value(|c| c.close_about()));
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <Show when=move || state.with(|s| s.ui.about_open)>
            <div class="about-modal__backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="about-modal"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="about-modal__header">
                        <h2>"About Poetry Database"</h2>
                        <button class="about-modal__close" on:click=move |_| on_close.run(()) title="Close">
                            "\u{2715}"
                        </button>
                    </div>
                    <div class="about-modal__body">
                        <h5>"What is ResponsePoetry?"</h5>
                        <p>
                            "Response poetry is a creative writing practice where a poet reads an existing poem and \
                             creates a new poem that directly responds to, engages with, or is inspired by the original \
                             work. This form of literary dialogue allows poets to enter into conversation with other \
                             voices, themes, and perspectives through verse."
                        </p>

                        <h5>"How it Works"</h5>
                        <ul>
                            {STEPS
                                .iter()
                                .map(|step| {
                                    view! {
                                        <li>
                                            <strong>{step.label}</strong>
                                            " "
                                            {step.detail}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>

                        <h5>"Why?"</h5>
                        <p>"Writing is half motivation and half writing. ResponsePoetry brings both into one webapp."</p>

                        <h5>"Features"</h5>
                        <ul>{FEATURES.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
                    </div>
                    <div class="about-modal__footer">
                        <em>
                            "Built with \u{2764}\u{fe0f} for the ones who call themselves a poet, and for those who don't yet :)"
                        </em>
                    </div>
                </div>
            </div>
        </Show>
    }
}
