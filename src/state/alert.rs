//! Transient, auto-expiring status message.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use std::time::Duration;

/// How long an alert stays up when the user does not dismiss it.
pub const ALERT_DISMISS_AFTER: Duration = Duration::from_millis(4000);

pub const SENT_MESSAGE: &str = "Your thoughts have been sent successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Warning,
    Failure,
}

impl AlertSeverity {
    /// Modifier class used by the alert banner.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub severity: AlertSeverity,
}

/// At most one visible alert; `seq` identifies which one a dismissal
/// timer was scheduled for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub current: Option<Alert>,
    pub seq: u64,
}

impl AlertState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Replace any visible alert and return the new alert's sequence number.
    pub fn show(&mut self, severity: AlertSeverity, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Alert { message: message.into(), severity });
        self.seq
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the alert only if it is still the one identified by `seq`.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
