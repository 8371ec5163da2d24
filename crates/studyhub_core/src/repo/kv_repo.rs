//! Local key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Provide the `get/set/remove` string storage seam used by store adapters.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set` replaces the whole value stored under a key.
//! - `get` on a missing key returns `Ok(None)`, never an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage backend error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Backend could not read the key.
    ReadFailed { key: String, reason: String },
    /// Backend refused the write (for example a storage quota).
    WriteRejected { key: String, reason: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::ReadFailed { key, reason } => write!(f, "read failed for key `{key}`: {reason}"),
            Self::WriteRejected { key, reason } => {
                write!(f, "write rejected for key `{key}`: {reason}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::ReadFailed { .. } | Self::WriteRejected { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value storage, modelled after browser local storage.
pub trait KvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove(&self, key: &str) -> RepoResult<()>;
}

impl<R: KvRepository + ?Sized> KvRepository for &R {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        (**self).remove(key)
    }
}

/// SQLite-backed key-value repository over the `local_storage` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1;", params![key])?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: BTreeMap<String, String>,
    reject_writes: bool,
    read_failure: bool,
    write_count: usize,
}

/// In-memory key-value repository.
///
/// Clones share the same underlying map, so a test can keep one handle for
/// inspection while the store owns another. Writes and reads can be switched
/// to fail to simulate quota or backend errors.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvRepository {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `set` calls fail with `RepoError::WriteRejected`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.state.borrow_mut().reject_writes = reject;
    }

    /// Makes subsequent `get` calls fail with `RepoError::ReadFailed`.
    pub fn set_read_failure(&self, fail: bool) {
        self.state.borrow_mut().read_failure = fail;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.state.borrow().write_count
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.borrow().entries.get(key).cloned()
    }
}

impl KvRepository for MemoryKvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let state = self.state.borrow();
        if state.read_failure {
            return Err(RepoError::ReadFailed {
                key: key.to_string(),
                reason: "storage unavailable".to_string(),
            });
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_writes {
            return Err(RepoError::WriteRejected {
                key: key.to_string(),
                reason: "storage quota exceeded".to_string(),
            });
        }
        state.entries.insert(key.to_string(), value.to_string());
        state.write_count += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.state.borrow_mut().entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, MemoryKvRepository, RepoError};

    #[test]
    fn memory_clones_share_entries() {
        let repo = MemoryKvRepository::new();
        let handle = repo.clone();
        repo.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn rejected_write_keeps_previous_value() {
        let repo = MemoryKvRepository::new();
        repo.set("k", "old").unwrap();
        repo.set_reject_writes(true);

        let err = repo.set("k", "new").unwrap_err();
        assert!(matches!(err, RepoError::WriteRejected { .. }));
        assert_eq!(repo.raw("k").as_deref(), Some("old"));
    }
}
