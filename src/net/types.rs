//! Wire shapes for the poem API and the email-dispatch API.
//!
//! DESIGN
//! ======
//! Field names mirror the external schemas exactly (`PoetryDB` records and
//! the `EmailJS` template parameters) so serde does the mapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::draft::ValidatedDraft;
use crate::state::poem::Poem;

pub const SENDER_LABEL: &str = "ResponsePoetry";
const UNKNOWN: &str = "Unknown";
const CONTENT_UNAVAILABLE: &str = "Poem content unavailable";

/// One poem as returned by the poem API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PoemRecord {
    pub title: String,
    pub author: String,
    pub lines: Vec<String>,
}

/// Template parameters for the reflection email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub to_name: String,
    pub to_email: String,
    pub poem_title: String,
    pub poem_author: String,
    pub poem_content: String,
    pub user_thoughts: String,
    pub from_name: String,
}

impl EmailPayload {
    /// Combine a validated draft with the displayed poem, substituting fixed
    /// placeholders for anything missing.
    pub fn compose(draft: &ValidatedDraft, poem: Option<&Poem>) -> Self {
        let or_unknown = |value: Option<&str>| {
            value.filter(|v| !v.is_empty()).unwrap_or(UNKNOWN).to_owned()
        };
        let content = poem.map(Poem::body).filter(|b| !b.is_empty());

        Self {
            to_name: draft.name.clone(),
            to_email: draft.email.clone(),
            poem_title: or_unknown(poem.map(|p| p.title.as_str())),
            poem_author: or_unknown(poem.map(|p| p.author.as_str())),
            poem_content: content.unwrap_or_else(|| CONTENT_UNAVAILABLE.to_owned()),
            user_thoughts: draft.reflection.clone(),
            from_name: SENDER_LABEL.to_owned(),
        }
    }
}

/// Request body for the email-dispatch send endpoint.
#[derive(Debug, Serialize)]
pub struct EmailSendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a EmailPayload,
}
