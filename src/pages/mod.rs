//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The single page lays out the floating chrome and the two cards; every
//! rendering detail lives in `components`.

pub mod home;
