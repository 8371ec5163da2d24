//! Subject-to-resources catalog.
//!
//! # Responsibility
//! - Hold the ordered subject mapping that is the single source of truth.
//! - Provide pure add/remove/move operations without any I/O.
//!
//! # Invariants
//! - Subject iteration order is key insertion order.
//! - A subject emptied by `delete_resource`/`edit_resource` is removed.
//! - Operations on a missing subject or index fail without mutation.

use crate::model::resource::{Resource, ResourceRef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from catalog addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Subject key does not exist.
    SubjectNotFound(String),
    /// Subject exists but has no resource at `index`.
    ResourceNotFound { subject: String, index: usize },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubjectNotFound(subject) => write!(f, "subject not found: `{subject}`"),
            Self::ResourceNotFound { subject, index } => {
                write!(f, "resource not found: `{subject}` index {index}")
            }
        }
    }
}

impl Error for CatalogError {}

/// Ordered mapping from subject name to its resources.
///
/// Serialized transparently as a JSON object `subject -> [resource]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    subjects: IndexMap<String, Vec<Resource>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subject names in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// `(subject, resources)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[Resource])> {
        self.subjects
            .iter()
            .map(|(subject, resources)| (subject.as_str(), resources.as_slice()))
    }

    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Resources of one subject, or `None` when the subject is absent.
    pub fn resources(&self, subject: &str) -> Option<&[Resource]> {
        self.subjects.get(subject).map(Vec::as_slice)
    }

    /// Resolves one reference.
    pub fn resource(&self, target: &ResourceRef) -> Result<&Resource, CatalogError> {
        let resources = self
            .subjects
            .get(target.subject.as_str())
            .ok_or_else(|| CatalogError::SubjectNotFound(target.subject.clone()))?;
        resources
            .get(target.index)
            .ok_or_else(|| CatalogError::ResourceNotFound {
                subject: target.subject.clone(),
                index: target.index,
            })
    }

    pub fn len_subjects(&self) -> usize {
        self.subjects.len()
    }

    /// Total number of resources across all subjects.
    pub fn resource_count(&self) -> usize {
        self.subjects.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Returns whether any subject currently maps to an empty list.
    pub fn has_empty_subject(&self) -> bool {
        self.subjects.values().any(Vec::is_empty)
    }

    /// Creates `name` with an empty list.
    ///
    /// Returns `false` when the subject already exists (no-op).
    pub fn add_subject(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.subjects.contains_key(name.as_str()) {
            return false;
        }
        self.subjects.insert(name, Vec::new());
        true
    }

    /// Removes a subject and all its resources.
    ///
    /// Returns `false` when the subject did not exist.
    pub fn delete_subject(&mut self, name: &str) -> bool {
        self.subjects.shift_remove(name).is_some()
    }

    /// Appends `resource` to `subject`, creating the subject when absent.
    ///
    /// Returns the reference of the appended resource.
    pub fn add_resource(&mut self, subject: impl Into<String>, resource: Resource) -> ResourceRef {
        let subject = subject.into();
        let resources = self.subjects.entry(subject.clone()).or_default();
        resources.push(resource);
        ResourceRef::new(subject, resources.len() - 1)
    }

    /// Removes the resource at `target`, dropping the subject when emptied.
    pub fn delete_resource(&mut self, target: &ResourceRef) -> Result<Resource, CatalogError> {
        let resources = self
            .subjects
            .get_mut(target.subject.as_str())
            .ok_or_else(|| CatalogError::SubjectNotFound(target.subject.clone()))?;
        if target.index >= resources.len() {
            return Err(CatalogError::ResourceNotFound {
                subject: target.subject.clone(),
                index: target.index,
            });
        }
        let removed = resources.remove(target.index);
        if resources.is_empty() {
            self.subjects.shift_remove(target.subject.as_str());
        }
        Ok(removed)
    }

    /// Replaces the resource at `target` by remove-then-append.
    ///
    /// The description is carried over from the original record. The updated
    /// resource lands at the end of `new_subject`'s list, even when the
    /// subject is unchanged.
    pub fn edit_resource(
        &mut self,
        target: &ResourceRef,
        new_subject: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<ResourceRef, CatalogError> {
        let removed = self.delete_resource(target)?;
        let updated = Resource::with_desc(name, url, removed.desc);
        Ok(self.add_resource(new_subject, updated))
    }
}
