//! Home page: today's poem and the reflection form.

use leptos::prelude::*;

use crate::components::about_modal::{AboutButton, AboutModal};
use crate::components::alert_banner::AlertBanner;
use crate::components::auth_bar::AuthBar;
use crate::components::poem_card::PoemCard;
use crate::components::response_form::ResponseForm;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <ThemeToggle/>
            <AboutButton/>
            <AuthBar/>

            <main class="home-page__column">
                <header class="home-page__header">
                    <h1 class="home-page__title">"A Poem A Day"</h1>
                    <p class="home-page__subtitle">"ResponsePoetry. Read. Write. Repeat."</p>
                </header>
                <PoemCard/>
                <ResponseForm/>
                <AlertBanner/>
            </main>

            <AboutModal/>
        </div>
    }
}
