//! Signed-in identity and sign-in progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fed by the identity provider's session observer; read by the response form
//! to decide between the sign-in prompt and the editable draft.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

impl Identity {
    /// Build an identity, falling back to the email's local part when the
    /// provider has no display name.
    pub fn new(display_name: Option<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        let display_name = display_name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| name_from_email(&email));
        Self { display_name, email }
    }
}

fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("reader")
        .to_owned()
}

/// Authentication state tracking the current identity.
///
/// `loading` stays `true` until the provider reports its first session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
    pub signing_in: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Mark a popup sign-in as outstanding. Returns `false` if one already is.
    pub fn begin_sign_in(&mut self) -> bool {
        if self.signing_in {
            return false;
        }
        self.signing_in = true;
        true
    }

    pub fn finish_sign_in(&mut self) {
        self.signing_in = false;
    }

    pub fn set_identity(&mut self, identity: Option<Identity>) {
        self.identity = identity;
        self.loading = false;
    }
}
