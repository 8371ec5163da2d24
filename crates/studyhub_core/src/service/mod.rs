//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog mutations and their commit step.
//! - Keep controller/CLI layers decoupled from storage details.

pub mod catalog_service;
