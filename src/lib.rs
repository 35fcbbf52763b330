//! # response-poetry
//!
//! Leptos + WASM single-page client that shows a random poem and lets the
//! reader email their reflection on it to themselves.
//!
//! This crate contains the root component, pages, components, the view-state
//! controller, and the adapters for the poem API, the identity provider, and
//! the email-dispatch service. Browser-only code is gated behind the `csr`
//! feature so the state machine can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
