use super::*;

fn filled(name: &str, email: &str, reflection: &str) -> ResponseDraft {
    ResponseDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        reflection: reflection.to_owned(),
        ..ResponseDraft::default()
    }
}

fn ada() -> Identity {
    Identity::new(Some("Ada".into()), "ada@example.com")
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn edit_updates_unlocked_fields() {
    let mut draft = ResponseDraft::default();
    assert!(draft.edit(DraftField::Name, "Ada".into()));
    assert!(draft.edit(DraftField::Email, "ada@example.com".into()));
    assert!(draft.edit(DraftField::Reflection, "lovely".into()));
    assert_eq!(draft, filled("Ada", "ada@example.com", "lovely"));
}

#[test]
fn edit_rejects_locked_email() {
    let mut draft = ResponseDraft::default();
    draft.lock_email("ada@example.com");
    assert!(!draft.edit(DraftField::Email, "mallory@example.com".into()));
    assert_eq!(draft.email, "ada@example.com");
}

#[test]
fn reset_keeps_locked_email_only() {
    let mut draft = filled("Ada", "", "thoughts");
    draft.lock_email("ada@example.com");
    draft.reset();
    assert!(draft.name.is_empty());
    assert!(draft.reflection.is_empty());
    assert_eq!(draft.email, "ada@example.com");

    let mut draft = filled("Ada", "ada@example.com", "thoughts");
    draft.reset();
    assert!(draft.email.is_empty());
}

#[test]
fn clear_drops_locked_email_too() {
    let mut draft = filled("Ada", "", "thoughts");
    draft.lock_email("ada@example.com");
    draft.clear();
    assert_eq!(draft, ResponseDraft::default());
}

#[test]
fn begin_submit_is_not_reentrant() {
    let mut draft = ResponseDraft::default();
    assert!(draft.begin_submit());
    assert!(!draft.begin_submit());
    draft.finish_submit();
    assert_eq!(draft.status, SubmitStatus::Editable);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn sign_in_mode_requires_identity_first() {
    let draft = filled("", "", "");
    assert_eq!(draft.validate(FormMode::SignIn, None), Err(ValidationFailure::MissingIdentity));
}

#[test]
fn sign_in_mode_uses_identity_email() {
    let draft = filled("Ada", "", "moving");
    let ok = draft.validate(FormMode::SignIn, Some(&ada())).unwrap();
    assert_eq!(ok.email, "ada@example.com");
    assert_eq!(ok.name, "Ada");
}

#[test]
fn empty_reflection_is_missing_fields() {
    let draft = filled("Ada", "ada@example.com", "");
    assert_eq!(draft.validate(FormMode::ManualEmail, None), Err(ValidationFailure::MissingFields));
}

#[test]
fn blank_name_is_missing_fields() {
    let draft = filled("   ", "", "thoughts");
    assert_eq!(draft.validate(FormMode::SignIn, Some(&ada())), Err(ValidationFailure::MissingFields));
}

#[test]
fn manual_mode_requires_email() {
    let draft = filled("Ada", "  ", "thoughts");
    assert_eq!(draft.validate(FormMode::ManualEmail, None), Err(ValidationFailure::MissingFields));
}

#[test]
fn manual_mode_rejects_malformed_email() {
    let draft = filled("Ada", "ada.example.com", "thoughts");
    assert_eq!(draft.validate(FormMode::ManualEmail, None), Err(ValidationFailure::InvalidEmail));
}

#[test]
fn manual_mode_normalizes_email() {
    let draft = filled("Ada", " Ada@Example.com ", "thoughts");
    let ok = draft.validate(FormMode::ManualEmail, None).unwrap();
    assert_eq!(ok.email, "ada@example.com");
}

#[test]
fn normalize_email_rejects_bad_shapes() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("user"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("user@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}
