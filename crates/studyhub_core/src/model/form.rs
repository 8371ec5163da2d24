//! Resource dialog form and its validation rules.
//!
//! # Responsibility
//! - Hold the three user-editable dialog fields.
//! - Validate them for the add path (strict) or the edit path (relaxed).
//!
//! # Invariants
//! - Validated values are trimmed.
//! - Add rules are checked in order subject, name, url; the first violation wins.
//! - Edit rules only require every field to be non-empty.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum UTF-16 length for subject and resource names on the add path.
pub const MIN_NAME_CHARS: usize = 4;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_.-]+(\.[A-Za-z0-9_.-]+)+[/A-Za-z0-9_\-.?=&%]*")
        .expect("valid url regex")
});

/// Violated form rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormValidationError {
    SubjectTooShort,
    NameTooShort,
    InvalidUrl,
    /// Edit path: at least one field is blank.
    MissingField,
}

impl Display for FormValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubjectTooShort => write!(f, "Subject must be at least 4 characters."),
            Self::NameTooShort => write!(f, "Resource name must be at least 4 characters."),
            Self::InvalidUrl => {
                write!(f, "Please enter a valid URL starting with http:// or https://")
            }
            Self::MissingField => write!(f, "Please provide subject, name and link."),
        }
    }
}

impl Error for FormValidationError {}

/// Raw dialog fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub subject: String,
    pub name: String,
    pub url: String,
}

/// Trimmed form values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub subject: String,
    pub name: String,
    pub url: String,
}

impl ResourceForm {
    pub fn new(subject: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    /// Strict rules used when adding a new resource.
    pub fn validate_for_add(&self) -> Result<ValidatedForm, FormValidationError> {
        let validated = self.trimmed();
        if text_length(validated.subject.as_str()) < MIN_NAME_CHARS {
            return Err(FormValidationError::SubjectTooShort);
        }
        if text_length(validated.name.as_str()) < MIN_NAME_CHARS {
            return Err(FormValidationError::NameTooShort);
        }
        if !is_valid_url(validated.url.as_str()) {
            return Err(FormValidationError::InvalidUrl);
        }
        Ok(validated)
    }

    /// Relaxed rules used when editing an existing resource.
    pub fn validate_for_edit(&self) -> Result<ValidatedForm, FormValidationError> {
        let validated = self.trimmed();
        if validated.subject.is_empty() || validated.name.is_empty() || validated.url.is_empty() {
            return Err(FormValidationError::MissingField);
        }
        Ok(validated)
    }

    fn trimmed(&self) -> ValidatedForm {
        ValidatedForm {
            subject: self.subject.trim().to_string(),
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
        }
    }
}

/// Length in UTF-16 code units, the unit browser form inputs measure in.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Returns whether `url` looks like `http(s)://host.tld[/path]`.
///
/// Only the prefix is checked; trailing text after a valid prefix is accepted.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_url, FormValidationError, ResourceForm};

    #[test]
    fn url_pattern_requires_scheme_and_dotted_host() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://www.khanacademy.org/math?x=1&y=2"));
        assert!(!is_valid_url("notaurl"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://localhost"));
    }

    #[test]
    fn add_rules_report_first_violation_in_order() {
        let form = ResourceForm::new("Chm", "ab", "notaurl");
        assert_eq!(
            form.validate_for_add().unwrap_err(),
            FormValidationError::SubjectTooShort
        );

        let form = ResourceForm::new("Chem", "ab", "notaurl");
        assert_eq!(
            form.validate_for_add().unwrap_err(),
            FormValidationError::NameTooShort
        );

        let form = ResourceForm::new("Chem", "Test Site", "notaurl");
        assert_eq!(
            form.validate_for_add().unwrap_err(),
            FormValidationError::InvalidUrl
        );
    }

    #[test]
    fn add_rules_trim_before_measuring() {
        let form = ResourceForm::new("  Chem  ", " Test Site ", " https://example.com ");
        let validated = form.validate_for_add().unwrap();
        assert_eq!(validated.subject, "Chem");
        assert_eq!(validated.name, "Test Site");
        assert_eq!(validated.url, "https://example.com");

        let padded = ResourceForm::new("  ab  ", "Test Site", "https://example.com");
        assert_eq!(
            padded.validate_for_add().unwrap_err(),
            FormValidationError::SubjectTooShort
        );
    }

    #[test]
    fn name_length_counts_utf16_units() {
        let emoji = ResourceForm::new("😀😀", "😀😀", "https://example.com");
        assert!(emoji.validate_for_add().is_ok());

        let accented = ResourceForm::new("Ché", "Test Site", "https://example.com");
        assert_eq!(
            accented.validate_for_add().unwrap_err(),
            FormValidationError::SubjectTooShort
        );
    }

    #[test]
    fn edit_rules_only_require_non_empty_fields() {
        let form = ResourceForm::new("Ch", "ab", "x");
        assert!(form.validate_for_edit().is_ok());

        let blank = ResourceForm::new("Chem", "   ", "https://example.com");
        assert_eq!(
            blank.validate_for_edit().unwrap_err(),
            FormValidationError::MissingField
        );
    }
}
