use super::*;

fn lines(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("line {i}")).collect()
}

// =============================================================
// Poem truncation
// =============================================================

#[test]
fn poem_with_27_lines_is_unchanged() {
    let poem = Poem::new("Ode", "Keats", lines(27));
    assert_eq!(poem.lines, lines(27));
    assert!(!poem.truncated);
}

#[test]
fn poem_with_exactly_28_lines_is_not_truncated() {
    let poem = Poem::new("Ode", "Keats", lines(28));
    assert_eq!(poem.lines.len(), 28);
    assert!(!poem.truncated);
}

#[test]
fn poem_with_40_lines_keeps_first_28() {
    let poem = Poem::new("Ode", "Keats", lines(40));
    assert_eq!(poem.lines.len(), MAX_DISPLAY_LINES);
    assert_eq!(poem.lines.first().map(String::as_str), Some("line 1"));
    assert_eq!(poem.lines.last().map(String::as_str), Some("line 28"));
    assert!(poem.truncated);
}

#[test]
fn body_joins_lines_with_newlines_in_order() {
    let poem = Poem::new("t", "a", vec!["one".into(), String::new(), "three".into()]);
    assert_eq!(poem.body(), "one\n\nthree");
}

// =============================================================
// PoemState transitions
// =============================================================

#[test]
fn poem_state_default_is_idle_without_poem() {
    let state = PoemState::default();
    assert_eq!(state.status, LoadStatus::Idle);
    assert!(state.poem.is_none());
}

#[test]
fn begin_load_rejects_reentry_while_loading() {
    let mut state = PoemState::default();
    assert!(state.begin_load());
    assert!(state.is_loading());
    assert!(!state.begin_load());
}

#[test]
fn begin_load_allowed_after_failure() {
    let mut state = PoemState::default();
    state.begin_load();
    state.fail_load();
    assert_eq!(state.status, LoadStatus::Failed);
    assert!(state.begin_load());
}

#[test]
fn fail_load_keeps_previous_poem() {
    let mut state = PoemState::default();
    state.begin_load();
    state.finish_load(Poem::new("First", "Someone", lines(3)));
    state.begin_load();
    state.fail_load();
    assert_eq!(state.poem.as_ref().map(|p| p.title.as_str()), Some("First"));
}
