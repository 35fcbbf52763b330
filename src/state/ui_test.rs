use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_light_and_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.about_open);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_strings_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_twice_is_identity() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
