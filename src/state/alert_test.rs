use super::*;

#[test]
fn alert_state_default_hidden() {
    let state = AlertState::default();
    assert!(!state.is_visible());
    assert_eq!(state.seq, 0);
}

#[test]
fn show_replaces_previous_alert() {
    let mut state = AlertState::default();
    let first = state.show(AlertSeverity::Warning, "first");
    let second = state.show(AlertSeverity::Success, "second");
    assert_ne!(first, second);
    let current = state.current.clone().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.severity, AlertSeverity::Success);
}

#[test]
fn expire_ignores_stale_sequence() {
    let mut state = AlertState::default();
    let stale = state.show(AlertSeverity::Failure, "old");
    let fresh = state.show(AlertSeverity::Failure, "new");
    assert!(!state.expire(stale));
    assert!(state.is_visible());
    assert!(state.expire(fresh));
    assert!(!state.is_visible());
}

#[test]
fn expire_after_dismiss_is_noop() {
    let mut state = AlertState::default();
    let seq = state.show(AlertSeverity::Warning, "bye");
    state.dismiss();
    assert!(!state.expire(seq));
}

#[test]
fn severity_modifiers_match_banner_styles() {
    assert_eq!(AlertSeverity::Success.css_modifier(), "success");
    assert_eq!(AlertSeverity::Warning.css_modifier(), "warning");
    assert_eq!(AlertSeverity::Failure.css_modifier(), "danger");
}

#[test]
fn dismiss_delay_is_four_seconds() {
    assert_eq!(ALERT_DISMISS_AFTER.as_millis(), 4000);
}
