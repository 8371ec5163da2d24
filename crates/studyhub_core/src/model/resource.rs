//! Resource record and addressing.
//!
//! # Responsibility
//! - Define the bookmarked link record stored under a subject.
//! - Define the `(subject, index)` reference used by delete/edit paths.
//!
//! # Invariants
//! - `ResourceRef::index` is local to its subject list, never global.
//! - Serialized field names are exactly `name`, `url`, `desc`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One bookmarked link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Display name shown on the card.
    pub name: String,
    /// Target link, kept as entered by the user.
    pub url: String,
    /// Optional free-text description. Blank means "no description".
    #[serde(default)]
    pub desc: String,
}

impl Resource {
    /// Creates a resource with an empty description.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_desc(name, url, String::new())
    }

    /// Creates a resource with an explicit description.
    pub fn with_desc(
        name: impl Into<String>,
        url: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            desc: desc.into(),
        }
    }

    /// Returns the description, or `None` when blank.
    pub fn description(&self) -> Option<&str> {
        let trimmed = self.desc.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.desc.as_str())
        }
    }
}

/// Stable address of one resource within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub subject: String,
    /// Position within `subject`'s list.
    pub index: usize,
}

impl ResourceRef {
    pub fn new(subject: impl Into<String>, index: usize) -> Self {
        Self {
            subject: subject.into(),
            index,
        }
    }
}

impl Display for ResourceRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.subject, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::{Resource, ResourceRef};

    #[test]
    fn missing_desc_deserializes_as_empty() {
        let resource: Resource =
            serde_json::from_str(r#"{"name":"Desmos","url":"https://www.desmos.com"}"#).unwrap();
        assert_eq!(resource.desc, "");
        assert_eq!(resource.description(), None);
    }

    #[test]
    fn resource_ref_display_includes_local_index() {
        assert_eq!(ResourceRef::new("Math", 1).to_string(), "Math[1]");
    }
}
