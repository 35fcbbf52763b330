//! In-progress reflection and the submission state machine.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::config::FormMode;
use crate::error::ValidationFailure;
use crate::state::auth::Identity;

/// Editable fields of the response form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Reflection,
}

/// Submission lifecycle; both outcomes return to `Editable`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editable,
    Submitting,
}

/// The user's reflection before it is sent.
///
/// When `email_locked` is set the address came from the signed-in identity
/// and field edits to it are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseDraft {
    pub name: String,
    pub email: String,
    pub reflection: String,
    pub email_locked: bool,
    pub status: SubmitStatus,
}

/// A draft that passed every precondition, ready to become a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub name: String,
    pub email: String,
    pub reflection: String,
}

impl ResponseDraft {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Apply a field edit. Returns `false` when the field is locked.
    pub fn edit(&mut self, field: DraftField, value: String) -> bool {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Reflection => self.reflection = value,
            DraftField::Email if self.email_locked => return false,
            DraftField::Email => self.email = value,
        }
        true
    }

    /// Bind the email to an identity-sourced address.
    pub fn lock_email(&mut self, email: &str) {
        email.clone_into(&mut self.email);
        self.email_locked = true;
    }

    /// Clear every field, including a locked email.
    pub fn clear(&mut self) {
        *self = Self { status: self.status, ..Self::default() };
    }

    /// Clear the mutable fields, keeping a locked email.
    pub fn reset(&mut self) {
        self.name.clear();
        self.reflection.clear();
        if !self.email_locked {
            self.email.clear();
        }
    }

    /// Enter `Submitting`. Returns `false` if a send is already outstanding.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    pub fn finish_submit(&mut self) {
        self.status = SubmitStatus::Editable;
    }

    /// Check submission preconditions in display order: identity, then
    /// required fields, then email shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationFailure`] encountered.
    pub fn validate(&self, mode: FormMode, identity: Option<&Identity>) -> Result<ValidatedDraft, ValidationFailure> {
        let email = match mode {
            FormMode::SignIn => identity.ok_or(ValidationFailure::MissingIdentity)?.email.clone(),
            FormMode::ManualEmail => self.email.trim().to_owned(),
        };

        let name = self.name.trim();
        let reflection = self.reflection.trim();
        if name.is_empty() || reflection.is_empty() || email.is_empty() {
            return Err(ValidationFailure::MissingFields);
        }

        let email = match mode {
            FormMode::SignIn => email,
            FormMode::ManualEmail => normalize_email(&email).ok_or(ValidationFailure::InvalidEmail)?,
        };

        Ok(ValidatedDraft { name: name.to_owned(), email, reflection: self.reflection.clone() })
    }
}

/// Lowercase and shape-check an address: exactly one `@` with both sides set.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let mut parts = normalized.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Some(normalized),
        _ => None,
    }
}
