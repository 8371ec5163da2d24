//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the in-memory catalog and its injected persistence.
//! - Run every mutation followed by an explicit commit.
//!
//! # Invariants
//! - A failed commit rolls the in-memory catalog back to its prior state.
//! - No-op mutations do not commit.
//! - Service layer remains storage-agnostic.

use crate::model::catalog::{Catalog, CatalogError};
use crate::model::resource::{Resource, ResourceRef};
use crate::model::sample::sample_catalog;
use crate::repo::catalog_store::{CatalogPersistence, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum CatalogServiceError {
    /// Addressing failure; nothing was mutated or written.
    Catalog(CatalogError),
    /// Commit failed; the in-memory catalog was rolled back.
    Commit(StoreError),
}

impl Display for CatalogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Commit(err) => write!(f, "failed to save catalog: {err}"),
        }
    }
}

impl Error for CatalogServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Commit(err) => Some(err),
        }
    }
}

impl From<CatalogError> for CatalogServiceError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Catalog service facade over a persistence implementation.
pub struct CatalogService<P: CatalogPersistence> {
    catalog: Catalog,
    persistence: P,
}

impl<P: CatalogPersistence> CatalogService<P> {
    /// Creates a service with the catalog loaded from `persistence`.
    pub fn new(persistence: P) -> Self {
        let catalog = persistence.load_catalog();
        Self::with_catalog(catalog, persistence)
    }

    /// Creates a service over an already loaded catalog.
    pub fn with_catalog(catalog: Catalog, persistence: P) -> Self {
        Self {
            catalog,
            persistence,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Adds an empty subject. Returns `false` when it already existed.
    pub fn add_subject(&mut self, name: &str) -> CatalogServiceResult<bool> {
        if self.catalog.contains_subject(name) {
            return Ok(false);
        }
        self.mutate("add_subject", |catalog| Ok(catalog.add_subject(name)))
    }

    /// Deletes a subject with all its resources. Returns `false` when absent.
    pub fn delete_subject(&mut self, name: &str) -> CatalogServiceResult<bool> {
        if !self.catalog.contains_subject(name) {
            return Ok(false);
        }
        self.mutate("delete_subject", |catalog| Ok(catalog.delete_subject(name)))
    }

    /// Appends a resource, creating the subject when absent.
    pub fn add_resource(
        &mut self,
        subject: &str,
        resource: Resource,
    ) -> CatalogServiceResult<ResourceRef> {
        self.mutate("add_resource", |catalog| {
            Ok(catalog.add_resource(subject, resource))
        })
    }

    /// Deletes one resource, dropping its subject when emptied.
    pub fn delete_resource(&mut self, target: &ResourceRef) -> CatalogServiceResult<Resource> {
        self.mutate("delete_resource", |catalog| catalog.delete_resource(target))
    }

    /// Moves/replaces one resource by remove-then-append.
    pub fn edit_resource(
        &mut self,
        target: &ResourceRef,
        new_subject: &str,
        name: &str,
        url: &str,
    ) -> CatalogServiceResult<ResourceRef> {
        self.mutate("edit_resource", |catalog| {
            catalog.edit_resource(target, new_subject, name, url)
        })
    }

    /// Replaces the whole catalog with the built-in sample data.
    pub fn reset_to_sample(&mut self) -> CatalogServiceResult<()> {
        self.mutate("reset_to_sample", |catalog| {
            *catalog = sample_catalog();
            Ok(())
        })
    }

    fn mutate<T>(
        &mut self,
        operation: &'static str,
        apply: impl FnOnce(&mut Catalog) -> Result<T, CatalogError>,
    ) -> CatalogServiceResult<T> {
        let snapshot = self.catalog.clone();
        let output = match apply(&mut self.catalog) {
            Ok(output) => output,
            Err(err) => {
                self.catalog = snapshot;
                return Err(err.into());
            }
        };

        if let Err(err) = self.persistence.save_catalog(&self.catalog) {
            error!(
                "event=catalog_commit module=service status=error operation={operation} error={err}"
            );
            self.catalog = snapshot;
            return Err(CatalogServiceError::Commit(err));
        }

        info!(
            "event=catalog_commit module=service status=ok operation={operation} subjects={} resources={}",
            self.catalog.len_subjects(),
            self.catalog.resource_count()
        );
        Ok(output)
    }
}
