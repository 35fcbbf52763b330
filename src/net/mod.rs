//! Adapters for the three external services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `poems` fetches from the poem API, `email` dispatches through the
//! transactional-email service, `identity` wraps the sign-in provider, and
//! `types` defines the wire shapes they exchange.

pub mod email;
#[cfg(feature = "csr")]
pub mod firebase;
pub mod identity;
pub mod poems;
pub mod types;
