//! Ephemeral UI session state.
//!
//! # Responsibility
//! - Track the resource dialog and its pending form.
//! - Track the light/dark theme preference.
//!
//! # Invariants
//! - Session state never mutates the catalog directly.

pub mod dialog;
pub mod theme;
