//! Catalog domain model.
//!
//! # Responsibility
//! - Define the resource record, the subject catalog, and form validation.
//! - Keep every operation pure; persistence lives in `repo` and `service`.
//!
//! # Invariants
//! - Resources are addressed by `(subject, local index)`.
//! - No subject is left empty by a resource delete or edit.

pub mod catalog;
pub mod form;
pub mod resource;
pub mod sample;
