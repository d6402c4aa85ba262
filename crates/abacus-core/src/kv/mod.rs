//! Synchronous key-value storage for small records
//!
//! Holds the passcode, calculation history and notes. Every value is written
//! as one unit, so readers observe either the previous or the new value of a
//! key and never a partial write.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Key holding the passcode (raw digit string)
pub const PASSCODE_KEY: &str = "calc_pwd";
/// Key holding the calculation history (JSON array)
pub const HISTORY_KEY: &str = "calc_history";
/// Key holding the notes collection (JSON array)
pub const NOTES_KEY: &str = "calc_notes";

/// Trait for key-value storage operations
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// List stored keys in ascending order
    fn keys(&self) -> Result<Vec<String>>;
}

/// Load and validate a JSON value stored under `key`.
///
/// Returns `Ok(None)` when the key is absent and [`Error::CorruptRecord`] when
/// the stored text does not match the expected schema.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|error| Error::CorruptRecord {
            key: key.to_string(),
            reason: error.to_string(),
        })
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Keys are used as file names, so only a conservative alphabet is accepted.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("Invalid storage key: {key:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryItem;

    #[test]
    fn test_load_json_missing_key() {
        let store = MemoryKeyValueStore::new();
        let value: Option<Vec<HistoryItem>> = load_json(&store, HISTORY_KEY).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_load_json_reports_corrupt_record() {
        let store = MemoryKeyValueStore::new();
        store
            .set(HISTORY_KEY, r#"[{"expression": 1, "result": "2"}]"#)
            .unwrap();

        let err = load_json::<Vec<HistoryItem>>(&store, HISTORY_KEY).unwrap_err();
        match err {
            Error::CorruptRecord { key, .. } => assert_eq!(key, HISTORY_KEY),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_save_then_load_json() {
        let store = MemoryKeyValueStore::new();
        let items = vec![HistoryItem {
            expression: "2 + 3".to_string(),
            result: "5".to_string(),
            timestamp: 1,
        }];
        save_json(&store, HISTORY_KEY, &items).unwrap();

        let loaded: Vec<HistoryItem> = load_json(&store, HISTORY_KEY).unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key(NOTES_KEY).is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
    }
}
