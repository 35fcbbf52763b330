//! Identity provider adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller subscribes once at startup through [`IdentityProvider::observe`]
//! and receives every session change, including a session restored on page
//! load. Sign-in itself is a popup flow owned by the provider.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::{AppConfig, FormMode};
use crate::error::AppError;
use crate::state::auth::Identity;
use crate::util::guard::DropGuard;

/// Callback receiving the current identity whenever the session changes.
pub type IdentityListener = Box<dyn Fn(Option<Identity>)>;

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Run the popup sign-in flow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] for every failure, cancellation included.
    async fn sign_in(&self) -> Result<Identity, AppError>;

    /// End the session. Failures are logged, never surfaced.
    async fn sign_out(&self);

    /// Subscribe to session changes until the returned guard is dropped.
    fn observe(&self, listener: IdentityListener) -> DropGuard;
}

/// Provider used when sign-in is disabled or could not be initialized.
#[derive(Clone, Copy, Debug, Default)]
pub struct Anonymous;

#[async_trait(?Send)]
impl IdentityProvider for Anonymous {
    async fn sign_in(&self) -> Result<Identity, AppError> {
        Err(AppError::Auth("no identity provider configured".to_owned()))
    }

    async fn sign_out(&self) {}

    fn observe(&self, listener: IdentityListener) -> DropGuard {
        listener(None);
        DropGuard::noop()
    }
}

/// Pick the provider for the configured form mode.
pub fn provider_for(config: &AppConfig) -> Rc<dyn IdentityProvider> {
    if config.form_mode == FormMode::ManualEmail {
        return Rc::new(Anonymous);
    }
    if !config.firebase.is_configured() {
        log::warn!("sign-in mode without FIREBASE_API_KEY; sign-in disabled");
        return Rc::new(Anonymous);
    }

    #[cfg(feature = "csr")]
    {
        match super::firebase::FirebaseIdentity::connect(&config.firebase) {
            Ok(provider) => Rc::new(provider),
            Err(e) => {
                log::warn!("identity provider unavailable: {e}");
                Rc::new(Anonymous)
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(Anonymous)
    }
}
