//! Persistent key-value store
//!
//! Values are stored as JSON text in a SQLite database (`~/.galaxycode/progress.db`
//! by default). Keys are independent: there are no multi-key transactions.
//!
//! Reads never fail from the caller's point of view. A value that cannot be
//! read or deserialized is reported as absent and logged. Writes that fail
//! (quota, serialization, database) are logged and leave the previous value
//! in place.
//!
//! # Usage
//!
//! ```ignore
//! let store = KvStore::open(&path, Some(DEFAULT_QUOTA_BYTES))?;
//! store.set("theme", &"dark");
//! let theme: Option<String> = store.get("theme");
//! ```

mod db;

pub use db::StoreDb;

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default storage quota, the usual per-origin budget of browser local storage
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to prepare storage location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
}

/// Handle to the key-value store. Cheap to clone, all clones share one connection.
#[derive(Clone)]
pub struct KvStore {
    db: StoreDb,
    quota_bytes: Option<usize>,
}

impl KvStore {
    /// Open or create a store backed by the database file at `path`
    pub fn open(path: &Path, quota_bytes: Option<usize>) -> Result<Self, StoreError> {
        Ok(Self {
            db: StoreDb::open(path)?,
            quota_bytes,
        })
    }

    /// Open a store that lives only as long as this process
    pub fn open_in_memory(quota_bytes: Option<usize>) -> Result<Self, StoreError> {
        Ok(Self {
            db: StoreDb::open_in_memory()?,
            quota_bytes,
        })
    }

    pub fn quota_bytes(&self) -> Option<usize> {
        self.quota_bytes
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Returns `None` when the key was never set or its value cannot be
    /// deserialized as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read '{}' from storage: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed value stored under '{}': {}", key, e);
                None
            }
        }
    }

    /// Read the JSON text stored under `key` without interpreting it
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.db.conn();
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |r| r.get(0))
            .optional()?;
        Ok(value)
    }

    /// Serialize and store `value` under `key`, logging instead of failing.
    ///
    /// Returns whether the value was written.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Skipped writing '{}' to storage: {}", key, e);
                false
            }
        }
    }

    /// Serialize and store `value` under `key`
    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.set_raw(key, &text)
    }

    /// Store JSON text under `key` as-is
    pub fn set_raw(&self, key: &str, text: &str) -> Result<(), StoreError> {
        let conn = self.db.conn();

        if let Some(quota) = self.quota_bytes {
            let others: i64 = conn.query_row(
                "SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0)
                 FROM kv WHERE key != ?1",
                [key],
                |r| r.get(0),
            )?;
            let needed = others.max(0) as usize + key.len() + text.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        conn.execute(
            r#"INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
               ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3"#,
            rusqlite::params![key, text, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    /// Delete the entry under `key`. Returns whether an entry existed.
    pub fn remove(&self, key: &str) -> bool {
        let conn = self.db.conn();
        match conn.execute("DELETE FROM kv WHERE key = ?1", [key]) {
            Ok(deleted) => deleted > 0,
            Err(e) => {
                tracing::warn!("Failed to remove '{}' from storage: {}", key, e);
                false
            }
        }
    }

    /// All stored keys in ascending order
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        theme: String,
        font_size: u32,
    }

    #[test]
    fn test_set_then_get() {
        let store = KvStore::open_in_memory(None).unwrap();
        let prefs = Prefs {
            theme: "dark".to_string(),
            font_size: 14,
        };

        assert!(store.set("prefs", &prefs));
        assert_eq!(store.get::<Prefs>("prefs"), Some(prefs));
    }

    #[test]
    fn test_get_missing_key_is_absent() {
        let store = KvStore::open_in_memory(None).unwrap();
        assert_eq!(store.get::<Prefs>("prefs"), None);
    }

    #[test]
    fn test_malformed_value_is_absent() {
        let store = KvStore::open_in_memory(None).unwrap();
        store.set_raw("prefs", "{not json").unwrap();
        assert_eq!(store.get::<Prefs>("prefs"), None);

        store.set_raw("prefs", r#"{"theme": 3}"#).unwrap();
        assert_eq!(store.get::<Prefs>("prefs"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = KvStore::open_in_memory(None).unwrap();
        store.set("count", &1);
        store.set("count", &2);
        assert_eq!(store.get::<u32>("count"), Some(2));
        assert_eq!(store.keys().unwrap(), vec!["count".to_string()]);
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let store = KvStore::open_in_memory(Some(64)).unwrap();
        assert!(store.set("note", "short"));

        let long = "x".repeat(100);
        let err = store.try_set("note", &long).unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { quota: 64, .. }));
        assert!(!store.set("note", &long));

        assert_eq!(store.get::<String>("note").as_deref(), Some("short"));
    }

    #[test]
    fn test_quota_counts_other_keys() {
        let store = KvStore::open_in_memory(Some(40)).unwrap();
        assert!(store.set("a", &"y".repeat(20)));
        // The existing value of "b" does not count against its own replacement
        assert!(store.set("b", "z"));
        assert!(!store.set("b", &"z".repeat(20)));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let store = KvStore::open_in_memory(None).unwrap();
        assert!(!store.remove("missing"));

        store.set("present", &true);
        assert!(store.remove("present"));
        assert_eq!(store.get::<bool>("present"), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.db");

        {
            let store = KvStore::open(&path, None).unwrap();
            store.set("visited", &vec!["home", "challenges"]);
        }

        let store = KvStore::open(&path, None).unwrap();
        assert_eq!(
            store.get::<Vec<String>>("visited"),
            Some(vec!["home".to_string(), "challenges".to_string()])
        );
    }
}
