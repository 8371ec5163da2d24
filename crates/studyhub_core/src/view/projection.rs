//! Pure projection from catalog + selection + filter to display lists.
//!
//! # Responsibility
//! - Derive the sorted subject sidebar.
//! - Derive the filtered resource grid, tagged with local indices.
//!
//! # Invariants
//! - Every `VisibleResource` carries `(subject, index)` valid for delete/edit.
//! - The "all" view walks subjects in catalog key order, not sorted order.
//! - Blank filters match everything.

use crate::model::catalog::Catalog;
use crate::model::resource::{Resource, ResourceRef};
use std::cmp::Ordering;

/// Title shown when every subject is visible.
pub const ALL_RESOURCES_TITLE: &str = "All Resources";

/// Currently viewed subject, or every subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Subject(String),
}

impl Selection {
    /// Toggle semantics of a sidebar click: same subject goes back to `All`.
    pub fn toggled(&self, subject: &str) -> Self {
        match self {
            Self::Subject(current) if current == subject => Self::All,
            _ => Self::Subject(subject.to_string()),
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Subject(subject) => Some(subject.as_str()),
        }
    }
}

/// Sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectEntry {
    pub name: String,
    pub count: usize,
    /// `true` when this subject is the current selection.
    pub active: bool,
}

/// Grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleResource {
    pub subject: String,
    /// Index local to `subject`'s list.
    pub index: usize,
    pub resource: Resource,
}

impl VisibleResource {
    pub fn resource_ref(&self) -> ResourceRef {
        ResourceRef::new(self.subject.clone(), self.index)
    }
}

/// One full recompute of everything the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub title: String,
    pub subjects: Vec<SubjectEntry>,
    pub resources: Vec<VisibleResource>,
    /// Normalized filter that produced `resources`.
    pub filter: String,
}

impl CatalogView {
    pub fn build(catalog: &Catalog, selection: &Selection, filter: &str) -> Self {
        Self {
            title: title(selection).to_string(),
            subjects: subject_list(catalog, selection),
            resources: visible_resources(catalog, selection, filter),
            filter: normalize_filter(filter),
        }
    }

    /// Whether the grid has nothing to show for the current filter.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Sorted subject names.
pub fn subject_names(catalog: &Catalog) -> Vec<String> {
    let mut names: Vec<String> = catalog.subjects().map(str::to_string).collect();
    names.sort_by(|left, right| locale_compare(left, right));
    names
}

/// Sorted sidebar rows.
pub fn subject_list(catalog: &Catalog, selection: &Selection) -> Vec<SubjectEntry> {
    subject_names(catalog)
        .into_iter()
        .map(|name| SubjectEntry {
            count: catalog.resources(name.as_str()).map_or(0, <[Resource]>::len),
            active: selection.subject() == Some(name.as_str()),
            name,
        })
        .collect()
}

/// Filtered resources for the selection.
pub fn visible_resources(
    catalog: &Catalog,
    selection: &Selection,
    filter: &str,
) -> Vec<VisibleResource> {
    let needle = normalize_filter(filter);
    let mut visible = Vec::new();

    let mut push_subject = |subject: &str, resources: &[Resource]| {
        for (index, resource) in resources.iter().enumerate() {
            if matches_filter(subject, resource, needle.as_str()) {
                visible.push(VisibleResource {
                    subject: subject.to_string(),
                    index,
                    resource: resource.clone(),
                });
            }
        }
    };

    match selection {
        Selection::Subject(subject) => {
            if let Some(resources) = catalog.resources(subject.as_str()) {
                push_subject(subject.as_str(), resources);
            }
        }
        Selection::All => {
            for (subject, resources) in catalog.entries() {
                push_subject(subject, resources);
            }
        }
    }

    visible
}

/// Header title for the selection.
pub fn title(selection: &Selection) -> &str {
    selection.subject().unwrap_or(ALL_RESOURCES_TITLE)
}

/// Case-insensitive primary order with a lowercase-first tiebreak.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let folded_left = left.chars().flat_map(char::to_lowercase);
    let folded_right = right.chars().flat_map(char::to_lowercase);
    folded_left.cmp(folded_right).then_with(|| right.cmp(left))
}

fn normalize_filter(filter: &str) -> String {
    filter.trim().to_lowercase()
}

fn matches_filter(subject: &str, resource: &Resource, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        subject,
        resource.name.as_str(),
        resource.desc.as_str(),
        resource.url.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
