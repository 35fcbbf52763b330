//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` reads the build-time configuration, wires the adapters into a
//! [`Controller`], and provides two contexts to the tree: the reactive
//! [`AppState`] signal for reads and the controller handle for intents.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::controller::{Controller, Services};
use crate::net::email::EmailJs;
use crate::net::identity::provider_for;
use crate::net::poems::PoetryDb;
use crate::pages::home::HomePage;
use crate::state::app::AppState;
use crate::util::scheduler::BrowserScheduler;
use crate::util::theme::{LocalStorageThemeStore, initial_theme};

/// Controller bound to the reactive application state.
pub type AppController = Controller<RwSignal<AppState>>;

/// Fetch the controller handle provided by [`App`].
pub fn use_controller() -> StoredValue<AppController, LocalStorage> {
    expect_context::<StoredValue<AppController, LocalStorage>>()
}

/// Run a controller intent on the browser event loop.
pub fn spawn_intent(intent: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(intent);

    #[cfg(not(feature = "csr"))]
    drop(intent);
}

/// Root application component.
///
/// Builds the services, provides shared contexts, starts the first poem
/// load, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("invalid build configuration, using defaults: {err}");
        AppConfig::default()
    });
    log::debug!("poem endpoint {}, form mode {:?}", config.poem_endpoint, config.form_mode);

    let theme = initial_theme(&LocalStorageThemeStore);

    let services = Services {
        poems: Rc::new(PoetryDb::new(config.poem_endpoint.clone())),
        identity: provider_for(&config),
        dispatch: Rc::new(EmailJs::new(config.emailjs.clone())),
        themes: Rc::new(LocalStorageThemeStore),
        scheduler: Rc::new(BrowserScheduler),
    };

    let state = RwSignal::new(AppState::new(config.form_mode, theme));
    let controller = Controller::new(state, services);
    spawn_intent(controller.start());

    provide_context(state);
    provide_context(StoredValue::new_local(controller));

    let data_theme = move || state.with(|s| s.ui.theme.as_str());

    view! {
        <Title text="Response Poetry"/>

        <div class="app" data-theme=data_theme>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </div>
    }
}
