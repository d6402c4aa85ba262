//! File-backed key-value store
//!
//! One file per key inside a directory. Writes go through a temporary file in
//! the same directory which is then renamed over the target.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{validate_key, KeyValueStore};
use crate::error::{Error, Result};

const VALUE_EXTENSION: &str = "json";

/// Key-value store persisting each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!("Opened key-value store at {}", dir.display());
        Ok(Self { dir })
    }

    /// Directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&path)
            .map_err(|error| Error::Io(error.error))?;
        tracing::debug!("Stored key `{key}` ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed key `{key}`");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(VALUE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{NOTES_KEY, PASSCODE_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_key() {
        let tmp = tempdir().unwrap();
        let store = FileKeyValueStore::open(tmp.path()).unwrap();
        assert_eq!(store.get(PASSCODE_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_get_and_overwrite() {
        let tmp = tempdir().unwrap();
        let store = FileKeyValueStore::open(tmp.path()).unwrap();

        store.set(PASSCODE_KEY, "1234").unwrap();
        assert_eq!(store.get(PASSCODE_KEY).unwrap().as_deref(), Some("1234"));

        store.set(PASSCODE_KEY, "5678").unwrap();
        assert_eq!(store.get(PASSCODE_KEY).unwrap().as_deref(), Some("5678"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempdir().unwrap();
        {
            let store = FileKeyValueStore::open(tmp.path()).unwrap();
            store.set(NOTES_KEY, "[]").unwrap();
        }

        let reopened = FileKeyValueStore::open(tmp.path()).unwrap();
        assert_eq!(reopened.get(NOTES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_and_keys() {
        let tmp = tempdir().unwrap();
        let store = FileKeyValueStore::open(tmp.path()).unwrap();
        store.set(PASSCODE_KEY, "1234").unwrap();
        store.set(NOTES_KEY, "[]").unwrap();
        fs::write(tmp.path().join("stray.txt"), "ignored").unwrap();

        assert_eq!(store.keys().unwrap(), vec![NOTES_KEY, PASSCODE_KEY]);

        store.remove(PASSCODE_KEY).unwrap();
        store.remove(PASSCODE_KEY).unwrap();
        assert_eq!(store.keys().unwrap(), vec![NOTES_KEY]);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let tmp = tempdir().unwrap();
        let store = FileKeyValueStore::open(tmp.path()).unwrap();
        store.set(NOTES_KEY, "[]").unwrap();

        let entries = fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
