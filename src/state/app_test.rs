use super::*;
use crate::error::ValidationFailure;
use crate::state::poem::Poem;

fn ada() -> Identity {
    Identity::new(Some("Ada".into()), "ada@example.com")
}

#[test]
fn new_sign_in_state_waits_for_session() {
    let state = AppState::new(FormMode::SignIn, Theme::Dark);
    assert!(state.auth.loading);
    assert_eq!(state.ui.theme, Theme::Dark);
    assert!(!state.form_unlocked());
}

#[test]
fn manual_mode_form_is_always_unlocked() {
    let state = AppState::new(FormMode::ManualEmail, Theme::Light);
    assert!(!state.auth.loading);
    assert!(state.form_unlocked());
}

#[test]
fn apply_identity_locks_email_and_prefills_name() {
    let mut state = AppState::new(FormMode::SignIn, Theme::Light);
    state.apply_identity(Some(ada()));
    assert!(state.form_unlocked());
    assert!(state.draft.email_locked);
    assert_eq!(state.draft.email, "ada@example.com");
    assert_eq!(state.draft.name, "Ada");
}

#[test]
fn apply_identity_keeps_typed_name() {
    let mut state = AppState::new(FormMode::SignIn, Theme::Light);
    state.draft.name = "Countess".into();
    state.apply_identity(Some(ada()));
    assert_eq!(state.draft.name, "Countess");
}

#[test]
fn sign_out_clears_draft() {
    let mut state = AppState::new(FormMode::SignIn, Theme::Light);
    state.apply_identity(Some(ada()));
    state.draft.reflection = "half written".into();
    state.apply_identity(None);
    assert!(!state.auth.is_signed_in());
    assert_eq!(state.draft, ResponseDraft::default());
}

#[test]
fn initial_empty_session_leaves_draft_alone() {
    let mut state = AppState::new(FormMode::SignIn, Theme::Light);
    state.draft.reflection = "typed early".into();
    state.apply_identity(None);
    assert!(!state.auth.loading);
    assert_eq!(state.draft.reflection, "typed early");
}

#[test]
fn prepare_submission_without_identity_is_validation_error() {
    let state = AppState::new(FormMode::SignIn, Theme::Light);
    assert_eq!(
        state.prepare_submission(),
        Err(AppError::Validation(ValidationFailure::MissingIdentity))
    );
}

#[test]
fn prepare_submission_builds_payload_from_poem() {
    let mut state = AppState::new(FormMode::SignIn, Theme::Light);
    state.apply_identity(Some(ada()));
    state.draft.reflection = "it stayed with me".into();
    state.poem.finish_load(Poem::new("Ozymandias", "Percy Bysshe Shelley", vec!["I met a traveller".into()]));

    let payload = state.prepare_submission().unwrap();
    assert_eq!(payload.to_name, "Ada");
    assert_eq!(payload.to_email, "ada@example.com");
    assert_eq!(payload.poem_title, "Ozymandias");
    assert_eq!(payload.poem_content, "I met a traveller");
    assert_eq!(payload.user_thoughts, "it stayed with me");
}

#[test]
fn reset_draft_reseeds_name_from_identity() {
    let mut state = AppState::new(FormMode::SignIn, Theme::Light);
    state.apply_identity(Some(ada()));
    state.draft.name = "Someone else".into();
    state.draft.reflection = "draft".into();

    state.reset_draft();

    assert_eq!(state.draft.name, "Ada");
    assert_eq!(state.draft.email, "ada@example.com");
    assert!(state.draft.reflection.is_empty());
}

#[test]
fn reset_draft_without_identity_clears_name() {
    let mut state = AppState::new(FormMode::ManualEmail, Theme::Light);
    state.draft.name = "Ada".into();
    state.reset_draft();
    assert!(state.draft.name.is_empty());
}
