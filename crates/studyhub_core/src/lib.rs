//! Core domain logic for StudyHub.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod view;

pub use config::StudyHubConfig;
pub use controller::confirm::{ConfirmAction, PendingConfirmation};
pub use controller::interaction::{Controller, ControllerError, ControllerResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{Catalog, CatalogError};
pub use model::form::{is_valid_url, FormValidationError, ResourceForm, ValidatedForm};
pub use model::resource::{Resource, ResourceRef};
pub use model::sample::sample_catalog;
pub use repo::catalog_store::{CatalogPersistence, CatalogStore, StoreError, CATALOG_KEY, THEME_KEY};
pub use repo::kv_repo::{KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use service::catalog_service::{CatalogService, CatalogServiceError, CatalogServiceResult};
pub use session::dialog::{DialogSession, DialogState};
pub use session::theme::{Theme, ThemePersistence, ThemeSession};
pub use view::projection::{
    locale_compare, subject_list, subject_names, visible_resources, CatalogView, Selection,
    SubjectEntry, VisibleResource, ALL_RESOURCES_TITLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
