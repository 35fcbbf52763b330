//! Error taxonomy for everything the controller captures.
//!
//! ERROR HANDLING
//! ==============
//! Adapters return `AppError`; the controller logs it and turns it into a
//! single alert. Nothing here is fatal and nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use crate::state::alert::AlertSeverity;

/// Which outbound call a network failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkOp {
    FetchPoem,
    SendEmail,
}

impl fmt::Display for NetworkOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FetchPoem => "poem fetch",
            Self::SendEmail => "email send",
        })
    }
}

/// Submission preconditions that can fail before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("no signed-in identity")]
    MissingIdentity,
    #[error("required field is empty")]
    MissingFields,
    #[error("email address is malformed")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Transport failure, non-success status, or unusable response body.
    #[error("{op} failed: {detail}")]
    Network { op: NetworkOp, detail: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// Sign-in rejected, cancelled, or errored; the provider does not say which.
    #[error("sign-in failed: {0}")]
    Auth(String),
}

impl AppError {
    pub fn network(op: NetworkOp, detail: impl Into<String>) -> Self {
        Self::Network { op, detail: detail.into() }
    }

    #[must_use]
    pub fn severity(&self) -> AlertSeverity {
        match self {
            Self::Validation(_) => AlertSeverity::Warning,
            Self::Network { .. } | Self::Auth(_) => AlertSeverity::Failure,
        }
    }

    /// Fixed human-readable text shown in the alert banner.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network { op: NetworkOp::FetchPoem, .. } => "Failed to fetch poem. Please try again.",
            Self::Network { op: NetworkOp::SendEmail, .. } => "Failed to send email. Please try again.",
            Self::Validation(ValidationFailure::MissingIdentity) => "Please sign in with Google to send the email.",
            Self::Validation(ValidationFailure::MissingFields) => "Please fill in all fields.",
            Self::Validation(ValidationFailure::InvalidEmail) => "Please enter a valid email address.",
            Self::Auth(_) => "Google sign-in failed.",
        }
    }
}
