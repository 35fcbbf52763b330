//! Utility helpers shared across the controller and UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (timers, storage) sit behind small traits here; the
//! controller only sees the traits.

pub mod guard;
pub mod scheduler;
pub mod theme;
