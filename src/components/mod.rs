//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `RwSignal<AppState>` from context and forward
//! every user intent to the controller handle. None of them mutate state
//! directly.

pub mod about_modal;
pub mod alert_banner;
pub mod auth_bar;
pub mod poem_card;
pub mod response_form;
pub mod theme_toggle;
