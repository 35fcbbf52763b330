//! View-state models owned by the controller.
//!
//! DESIGN
//! ======
//! State is split by concern (`poem`, `auth`, `draft`, `alert`, `ui`) and
//! aggregated in `app::AppState`. Each model carries its own transition
//! methods so the controller stays a thin orchestrator over adapters.

pub mod alert;
pub mod app;
pub mod auth;
pub mod draft;
pub mod poem;
pub mod ui;
