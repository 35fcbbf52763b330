//! Application state controller.
//!
//! The controller is the single owner of mutable view state and the only
//! caller of the adapters. Components forward intents here; the controller
//! applies state transitions, awaits adapter results, and raises alerts.
//!
//! DESIGN
//! ======
//! State lives behind a [`StateCell`] so the same orchestration runs against a
//! Leptos `RwSignal` in the browser and a plain `Rc<RefCell<_>>` in tests.
//! Intents that suspend are plain functions returning a future: their guard
//! checks (already loading, already submitting) run synchronously when the
//! intent arrives, so a second click before the spawned task starts is still
//! rejected.
//!
//! ERROR HANDLING
//! ==============
//! Every adapter error is captured here, logged, and converted into one alert.
//! Nothing propagates further and nothing is retried.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::config::FormMode;
use crate::error::AppError;
use crate::net::email::NotificationDispatch;
use crate::net::identity::IdentityProvider;
use crate::net::poems::PoemSource;
use crate::net::types::EmailPayload;
use crate::state::alert::{ALERT_DISMISS_AFTER, AlertSeverity, SENT_MESSAGE};
use crate::state::app::AppState;
use crate::state::auth::Identity;
use crate::state::draft::DraftField;
use crate::util::guard::DropGuard;
use crate::util::scheduler::Scheduler;
use crate::util::theme::ThemeStore;

/// Shared, single-threaded handle to [`AppState`].
pub trait StateCell: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for RwSignal<AppState> {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        WithUntracked::with_untracked(self, f)
    }

    fn write(&self, f: impl FnOnce(&mut AppState)) {
        Update::update(self, f);
    }
}

impl StateCell for Rc<RefCell<AppState>> {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut());
    }
}

/// Adapters and browser services, constructed once at startup.
pub struct Services {
    pub poems: Rc<dyn PoemSource>,
    pub identity: Rc<dyn IdentityProvider>,
    pub dispatch: Rc<dyn NotificationDispatch>,
    pub themes: Rc<dyn ThemeStore>,
    pub scheduler: Rc<dyn Scheduler>,
}

#[derive(Clone)]
pub struct Controller<S: StateCell> {
    state: S,
    services: Rc<Services>,
    alert_timer: Rc<RefCell<Option<DropGuard>>>,
    identity_subscription: Rc<RefCell<Option<DropGuard>>>,
}

impl<S: StateCell> Controller<S> {
    pub fn new(state: S, services: Services) -> Self {
        Self {
            state,
            services: Rc::new(services),
            alert_timer: Rc::new(RefCell::new(None)),
            identity_subscription: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Subscribe to identity changes (sign-in mode) and begin the first poem
    /// load. The returned future performs the fetch.
    pub fn start(&self) -> impl Future<Output = ()> + use<S> {
        if self.state.read(|s| s.mode) == FormMode::SignIn {
            self.subscribe_identity();
        }
        self.request_new_poem()
    }

    fn subscribe_identity(&self) {
        let state = self.state.clone();
        let guard = self.services.identity.observe(Box::new(move |identity: Option<Identity>| {
            match &identity {
                Some(id) => log::info!("session active for {}", id.email),
                None => log::info!("no active session"),
            }
            state.write(|s| s.apply_identity(identity));
        }));
        *self.identity_subscription.borrow_mut() = Some(guard);
    }

    // =========================================================================
    // POEM LOADING
    // =========================================================================

    /// Load a new poem unless one is already loading.
    pub fn request_new_poem(&self) -> impl Future<Output = ()> + use<S> {
        let accepted = !self.state.read(|s| s.poem.is_loading());
        if accepted {
            self.state.write(|s| {
                s.poem.begin_load();
            });
        } else {
            log::debug!("poem request ignored; load already outstanding");
        }

        let this = self.clone();
        async move {
            if accepted {
                this.fetch_poem().await;
            }
        }
    }

    async fn fetch_poem(&self) {
        match self.services.poems.fetch_random().await {
            Ok(poem) => {
                log::info!("loaded \"{}\" by {} ({} lines)", poem.title, poem.author, poem.lines.len());
                self.state.write(|s| {
                    s.poem.finish_load(poem);
                    s.reset_draft();
                });
                self.dismiss_alert();
            }
            Err(err) => {
                self.state.write(|s| s.poem.fail_load());
                self.raise(&err);
            }
        }
    }

    // =========================================================================
    // AUTHENTICATION
    // =========================================================================

    /// Run the popup sign-in flow. Ignored in manual-email mode or while a
    /// sign-in is already outstanding.
    pub fn sign_in(&self) -> impl Future<Output = ()> + use<S> {
        let accepted = self.state.read(|s| s.mode == FormMode::SignIn && !s.auth.signing_in);
        if accepted {
            self.state.write(|s| {
                s.auth.begin_sign_in();
            });
        }

        let this = self.clone();
        async move {
            if !accepted {
                return;
            }
            let result = this.services.identity.sign_in().await;
            this.state.write(|s| s.auth.finish_sign_in());
            match result {
                Ok(identity) => this.state.write(|s| s.apply_identity(Some(identity))),
                Err(err) => this.raise(&err),
            }
        }
    }

    pub fn sign_out(&self) -> impl Future<Output = ()> + use<S> {
        let this = self.clone();
        async move {
            this.services.identity.sign_out().await;
            this.state.write(|s| s.apply_identity(None));
        }
    }

    // =========================================================================
    // RESPONSE FORM
    // =========================================================================

    pub fn edit(&self, field: DraftField, value: String) {
        self.state.write(|s| {
            if !s.draft.edit(field, value) {
                log::debug!("ignored edit to locked field {field:?}");
            }
        });
    }

    /// Validate and send the draft. A failed precondition raises a warning
    /// and issues no network call; a submit while one is outstanding is
    /// ignored.
    pub fn submit(&self) -> impl Future<Output = ()> + use<S> {
        let payload = if self.state.read(|s| s.draft.is_submitting()) {
            None
        } else {
            match self.state.read(AppState::prepare_submission) {
                Ok(payload) => {
                    self.state.write(|s| {
                        s.draft.begin_submit();
                    });
                    Some(payload)
                }
                Err(err) => {
                    self.raise(&err);
                    None
                }
            }
        };

        let this = self.clone();
        async move {
            if let Some(payload) = payload {
                this.dispatch(payload).await;
            }
        }
    }

    async fn dispatch(&self, payload: EmailPayload) {
        let result = self.services.dispatch.send(&payload).await;
        self.state.write(|s| s.draft.finish_submit());
        match result {
            Ok(()) => {
                log::info!("reflection sent to {}", payload.to_email);
                self.state.write(AppState::reset_draft);
                self.show_alert(AlertSeverity::Success, SENT_MESSAGE);
            }
            Err(err) => self.raise(&err),
        }
    }

    // =========================================================================
    // CHROME
    // =========================================================================

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&self) {
        let next = self.state.read(|s| s.ui.theme.toggled());
        self.state.write(|s| s.ui.theme = next);
        self.services.themes.save(next);
    }

    pub fn open_about(&self) {
        self.state.write(|s| s.ui.about_open = true);
    }

    pub fn close_about(&self) {
        self.state.write(|s| s.ui.about_open = false);
    }

    // =========================================================================
    // ALERTS
    // =========================================================================

    /// Replace the visible alert and schedule its dismissal, cancelling the
    /// previous alert's timer.
    pub fn show_alert(&self, severity: AlertSeverity, message: &str) {
        let mut seq = 0;
        self.state.write(|s| seq = s.alert.show(severity, message));

        let state = self.state.clone();
        let guard = self.services.scheduler.schedule(
            ALERT_DISMISS_AFTER,
            Box::new(move || {
                state.write(|s| {
                    s.alert.expire(seq);
                });
            }),
        );
        *self.alert_timer.borrow_mut() = Some(guard);
    }

    pub fn dismiss_alert(&self) {
        drop(self.alert_timer.borrow_mut().take());
        self.state.write(|s| s.alert.dismiss());
    }

    fn raise(&self, err: &AppError) {
        log::warn!("{err}");
        self.show_alert(err.severity(), err.user_message());
    }
}
