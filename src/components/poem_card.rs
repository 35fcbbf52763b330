//! Card showing the current poem, its loading spinner, and the reload control.
//!
//! A failed load keeps the previous poem on screen; the empty placeholder
//! only appears when no poem has ever loaded.

#[cfg(test)]
#[path = "poem_card_test.rs"]
mod poem_card_test;

use leptos::prelude::*;

use crate::app::{spawn_intent, use_controller};
use crate::state::app::AppState;
use crate::state::poem::{MAX_DISPLAY_LINES, Poem};

/// What the card body renders for a given poem state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardView {
    Spinner,
    Poem,
    Empty,
}

pub fn card_view(loading: bool, has_poem: bool) -> CardView {
    match (loading, has_poem) {
        (true, _) => CardView::Spinner,
        (false, true) => CardView::Poem,
        (false, false) => CardView::Empty,
    }
}

pub fn truncation_notice() -> String {
    format!("This poem has been truncated to {MAX_DISPLAY_LINES} lines for better reading experience.")
}

#[component]
pub fn PoemCard() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let ctl = use_controller();

    let loading = move || state.with(|s| s.poem.is_loading());
    let request = move |_| ctl.with_value(|c| spawn_intent(c.request_new_poem()));

    let body = move || {
        let shown = state.with(|s| card_view(s.poem.is_loading(), s.poem.poem.is_some()));
        match shown {
            CardView::Spinner => view! {
                <div class="poem-card__loading">
                    <span class="spinner"></span>
                    <p class="poem-card__loading-text">"Loading poem..."</p>
                </div>
            }
            .into_any(),
            CardView::Poem => {
                let poem = state.with(|s| s.poem.poem.clone());
                poem.map(|poem| poem_body(&poem)).into_any()
            }
            CardView::Empty => view! {
                <div class="poem-card__empty">
                    <p class="poem-card__muted">"No poem available"</p>
                    <button class="btn btn--primary" on:click=request>
                        "Try Again"
                    </button>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <section class="card poem-card">
            <header class="card__header">
                <h3 class="poem-card__heading">"Today's Poem"</h3>
            </header>
            <div class="card__body">
                {body}
                <Show when=move || state.with(|s| s.poem.poem.is_some())>
                    <div class="poem-card__actions">
                        <button class="btn btn--outline" disabled=loading on:click=request>
                            "Get New Poem"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

fn poem_body(poem: &Poem) -> impl IntoView + use<> {
    let lines = poem
        .lines
        .iter()
        .map(|line| view! { <p class="poem-card__line">{line.clone()}</p> })
        .collect_view();
    let notice = poem.truncated.then(|| view! { <div class="poem-card__notice">{truncation_notice()}</div> });

    view! {
        <div class="poem-card__meta">
            <h4 class="poem-card__title">{poem.title.clone()}</h4>
            <p class="poem-card__author">{format!("by {}", poem.author)}</p>
        </div>
        <div class="poem-card__content">
            {lines}
            {notice}
        </div>
    }
}
