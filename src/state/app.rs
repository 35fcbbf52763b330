//! Aggregate view state rendered by the presentation layer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::FormMode;
use crate::error::AppError;
use crate::net::types::EmailPayload;
use crate::state::alert::AlertState;
use crate::state::auth::{AuthState, Identity};
use crate::state::draft::ResponseDraft;
use crate::state::poem::PoemState;
use crate::state::ui::{Theme, UiState};

/// Everything the page renders. Owned by the controller; components only
/// read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub mode: FormMode,
    pub poem: PoemState,
    pub auth: AuthState,
    pub draft: ResponseDraft,
    pub alert: AlertState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(mode: FormMode, theme: Theme) -> Self {
        Self {
            mode,
            poem: PoemState::default(),
            auth: AuthState { loading: mode == FormMode::SignIn, ..AuthState::default() },
            draft: ResponseDraft::default(),
            alert: AlertState::default(),
            ui: UiState { theme, about_open: false },
        }
    }

    /// Whether the response form should show its fields rather than the
    /// sign-in prompt.
    #[must_use]
    pub fn form_unlocked(&self) -> bool {
        match self.mode {
            FormMode::SignIn => self.auth.is_signed_in(),
            FormMode::ManualEmail => true,
        }
    }

    /// Validate the draft and build the outgoing payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a precondition fails.
    pub fn prepare_submission(&self) -> Result<EmailPayload, AppError> {
        let draft = self.draft.validate(self.mode, self.auth.identity.as_ref())?;
        Ok(EmailPayload::compose(&draft, self.poem.poem.as_ref()))
    }

    /// Clear the draft after a poem load or a send. The signed-in name is
    /// seeded again so the prefill survives the reset.
    pub fn reset_draft(&mut self) {
        self.draft.reset();
        if let Some(id) = &self.auth.identity {
            prefill_name(&mut self.draft, id);
        }
    }

    /// Apply a session change from the identity provider.
    pub fn apply_identity(&mut self, identity: Option<Identity>) {
        match &identity {
            Some(id) => {
                self.draft.lock_email(&id.email);
                prefill_name(&mut self.draft, id);
            }
            None if self.auth.is_signed_in() => self.draft.clear(),
            None => {}
        }
        self.auth.set_identity(identity);
    }
}

fn prefill_name(draft: &mut ResponseDraft, identity: &Identity) {
    if draft.name.trim().is_empty() {
        identity.display_name.clone_into(&mut draft.name);
    }
}
