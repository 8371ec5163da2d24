//! Persistent store adapter for the catalog blob and theme flag.
//!
//! # Responsibility
//! - Serialize the full catalog as one JSON object under a fixed key.
//! - Fall back to sample data when the blob is missing or unreadable.
//! - Persist the theme flag under its own independent key.
//!
//! # Invariants
//! - `load_catalog` never fails; every failure degrades to sample data.
//! - `save_catalog` writes the whole catalog and reports write failures.

use crate::model::catalog::Catalog;
use crate::model::sample::sample_catalog;
use crate::repo::kv_repo::{KvRepository, RepoError};
use crate::session::theme::{Theme, ThemePersistence};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized catalog.
pub const CATALOG_KEY: &str = "studyhub_v2_resources";
/// Storage key holding the serialized light-theme flag.
pub const THEME_KEY: &str = "studyhub_theme_light";

/// Store adapter error.
#[derive(Debug)]
pub enum StoreError {
    /// Backend read/write failure.
    Repo(RepoError),
    /// Value could not be serialized before writing.
    Serialize(serde_json::Error),
    /// Stored value under `key` could not be parsed.
    Corrupt {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize value: {err}"),
            Self::Corrupt { key, source } => {
                write!(f, "stored value under `{key}` is corrupt: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Persistence interface injected into the catalog service.
pub trait CatalogPersistence {
    /// Loads the catalog, degrading to sample data on any failure.
    fn load_catalog(&self) -> Catalog;
    /// Writes the full catalog.
    fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError>;
}

/// JSON store adapter over any key-value repository.
pub struct CatalogStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> CatalogStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying key-value repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Reads and parses the stored catalog without falling back.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    pub fn try_load_catalog(&self) -> Result<Option<Catalog>, StoreError> {
        let Some(raw) = self.repo.get(CATALOG_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str::<Catalog>(raw.as_str())
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: CATALOG_KEY,
                source,
            })
    }
}

impl<R: KvRepository> CatalogPersistence for CatalogStore<R> {
    fn load_catalog(&self) -> Catalog {
        match self.try_load_catalog() {
            Ok(Some(catalog)) => {
                info!(
                    "event=catalog_load module=repo status=ok source=storage subjects={} resources={}",
                    catalog.len_subjects(),
                    catalog.resource_count()
                );
                catalog
            }
            Ok(None) => {
                info!("event=catalog_load module=repo status=ok source=sample reason=missing");
                sample_catalog()
            }
            Err(err) => {
                warn!(
                    "event=catalog_load module=repo status=fallback source=sample reason={}",
                    fallback_reason(&err)
                );
                sample_catalog()
            }
        }
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let raw = serde_json::to_string(catalog).map_err(StoreError::Serialize)?;
        self.repo.set(CATALOG_KEY, raw.as_str())?;
        Ok(())
    }
}

impl<R: KvRepository> ThemePersistence for CatalogStore<R> {
    fn load_theme(&self) -> Result<Option<Theme>, StoreError> {
        let Some(raw) = self.repo.get(THEME_KEY)? else {
            return Ok(None);
        };
        let is_light =
            serde_json::from_str::<bool>(raw.as_str()).map_err(|source| StoreError::Corrupt {
                key: THEME_KEY,
                source,
            })?;
        Ok(Some(Theme::from_is_light(is_light)))
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&theme.is_light()).map_err(StoreError::Serialize)?;
        self.repo.set(THEME_KEY, raw.as_str())?;
        Ok(())
    }
}

fn fallback_reason(err: &StoreError) -> &'static str {
    match err {
        StoreError::Repo(_) => "read_failed",
        StoreError::Serialize(_) | StoreError::Corrupt { .. } => "corrupt",
    }
}
