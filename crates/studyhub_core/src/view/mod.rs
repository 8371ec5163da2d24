//! View projection.
//!
//! Pure functions recomputed wholesale after every event; no rendering here.

pub mod projection;
