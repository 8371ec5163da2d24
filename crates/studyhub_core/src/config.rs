//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank values count as unset.
//! - Resolution never fails; invalid logging values surface at `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "STUDYHUB_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "STUDYHUB_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "STUDYHUB_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "studyhub.sqlite3";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyHubConfig {
    /// SQLite file backing local storage.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Logging stays off when `None`.
    pub log_dir: Option<String>,
}

impl StudyHubConfig {
    /// Resolves from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StudyHubConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_variables_are_missing_or_blank() {
        let env = HashMap::from([(LOG_DIR_ENV, "   ")]);
        let config = StudyHubConfig::from_lookup(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.db_path, std::env::temp_dir().join("studyhub.sqlite3"));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let env = HashMap::from([
            (DB_PATH_ENV, " /tmp/hub.db "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/var/log/studyhub"),
        ]);
        let config = StudyHubConfig::from_lookup(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/tmp/hub.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/studyhub"));
    }
}
