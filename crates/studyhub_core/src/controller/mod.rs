//! Interaction controller.
//!
//! # Responsibility
//! - Turn user intents into catalog mutations and session transitions.
//! - Own every piece of application state; no process-wide globals.
//!
//! # Invariants
//! - Destructive actions run only through `confirm()` after a request.
//! - Delete/edit always address resources by `(subject, local index)`.
//! - Selection never points at a subject that no longer exists.

pub mod confirm;
pub mod interaction;
