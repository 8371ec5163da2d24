//! Persistence layer: key-value backends and the catalog store adapter.
//!
//! # Responsibility
//! - Define the local-storage style `KvRepository` contract.
//! - Isolate SQLite and JSON details from service orchestration.
//!
//! # Invariants
//! - Catalog and theme live under independent keys.
//! - Reads degrade, writes report.

pub mod catalog_store;
pub mod kv_repo;
