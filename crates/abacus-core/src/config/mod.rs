//! Storage location configuration shared by the desktop app and CLI.
//!
//! The data directory is resolved in order: explicit override (e.g. a CLI
//! flag), the `ABACUS_DATA_DIR` environment variable, the platform data
//! directory, and finally `./abacus`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ABACUS_DATA_DIR";

const APP_DIR_NAME: &str = "abacus";
const KV_DIR_NAME: &str = "kv";
const MEDIA_DB_FILE_NAME: &str = "media.db";

/// Resolved on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory for everything Abacus persists.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Build a config rooted at an explicit directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory from an optional override and the environment.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let env_dir = normalize_text_option(std::env::var(DATA_DIR_ENV).ok());
        Self::resolve_with(override_dir, env_dir, dirs::data_dir())
    }

    fn resolve_with(
        override_dir: Option<PathBuf>,
        env_dir: Option<String>,
        platform_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }
        if let Some(dir) = env_dir {
            return Self::new(dir);
        }
        let base = platform_dir.unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR_NAME))
    }

    /// Directory holding the key-value records.
    pub fn kv_dir(&self) -> PathBuf {
        self.data_dir.join(KV_DIR_NAME)
    }

    /// Path of the media database.
    pub fn media_db_path(&self) -> PathBuf {
        self.data_dir.join(MEDIA_DB_FILE_NAME)
    }

    /// Root directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_explicit_override() {
        let config = AppConfig::resolve_with(
            Some(PathBuf::from("/explicit")),
            Some("/from-env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(config.data_dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn resolve_uses_env_before_platform_dir() {
        let config = AppConfig::resolve_with(
            None,
            Some("/from-env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(config.data_dir, PathBuf::from("/from-env"));
    }

    #[test]
    fn resolve_falls_back_to_platform_then_cwd() {
        let config = AppConfig::resolve_with(None, None, Some(PathBuf::from("/platform")));
        assert_eq!(config.data_dir, PathBuf::from("/platform/abacus"));

        let config = AppConfig::resolve_with(None, None, None);
        assert_eq!(config.data_dir, PathBuf::from("./abacus"));
    }

    #[test]
    fn layout_paths_live_under_data_dir() {
        let config = AppConfig::new("/data");
        assert_eq!(config.kv_dir(), PathBuf::from("/data/kv"));
        assert_eq!(config.media_db_path(), PathBuf::from("/data/media.db"));
    }
}
