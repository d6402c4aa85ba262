//! Storage client shared by every view.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::calc::HistoryLog;
use crate::config::AppConfig;
use crate::db::{Database, LibSqlBlobStore};
use crate::gallery::GalleryManager;
use crate::gate::PasscodeGate;
use crate::kv::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, HISTORY_KEY, NOTES_KEY, PASSCODE_KEY,
};
use crate::models::{MediaId, MediaItem, UploadedFile};
use crate::notes::NotesManager;
use crate::Result;

/// Key-value store plus media database, constructed once per session.
#[derive(Clone)]
pub struct VaultService {
    kv: Arc<dyn KeyValueStore>,
    db: Arc<Mutex<Database>>,
    data_dir: Option<PathBuf>,
}

impl VaultService {
    /// Open (or create) the on-disk stores described by `config`.
    pub async fn open(config: &AppConfig) -> Result<Self> {
        std::fs::create_dir_all(config.data_dir())?;

        let kv = FileKeyValueStore::open(config.kv_dir())?;
        let db = Database::open(config.media_db_path()).await?;
        tracing::info!("Opened vault at {}", config.data_dir().display());

        Ok(Self {
            kv: Arc::new(kv),
            db: Arc::new(Mutex::new(db)),
            data_dir: Some(config.data_dir().to_path_buf()),
        })
    }

    /// Open throwaway in-memory stores (primarily for tests).
    pub async fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory().await?;
        Ok(Self {
            kv: Arc::new(MemoryKeyValueStore::new()),
            db: Arc::new(Mutex::new(db)),
            data_dir: None,
        })
    }

    /// Root data directory, `None` for in-memory vaults.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn kv(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.kv)
    }

    pub fn passcode_gate(&self) -> Result<PasscodeGate> {
        PasscodeGate::load(self.kv())
    }

    pub fn history(&self) -> Result<HistoryLog> {
        HistoryLog::load(self.kv())
    }

    pub fn notes(&self) -> Result<NotesManager> {
        NotesManager::load(self.kv())
    }

    pub async fn list_media(&self) -> Result<Vec<MediaItem>> {
        let db = self.db.lock().await;
        GalleryManager::new(LibSqlBlobStore::new(db.connection()))
            .list_media()
            .await
    }

    pub async fn get_media(&self, id: &MediaId) -> Result<Option<MediaItem>> {
        let db = self.db.lock().await;
        GalleryManager::new(LibSqlBlobStore::new(db.connection()))
            .get_media(id)
            .await
    }

    pub async fn add_media(&self, files: Vec<UploadedFile>) -> Result<Vec<MediaItem>> {
        let db = self.db.lock().await;
        GalleryManager::new(LibSqlBlobStore::new(db.connection()))
            .add_media(files)
            .await
    }

    pub async fn delete_media(&self, id: &MediaId) -> Result<()> {
        let db = self.db.lock().await;
        GalleryManager::new(LibSqlBlobStore::new(db.connection()))
            .delete_media(id)
            .await
    }

    pub async fn media_count(&self) -> Result<usize> {
        let db = self.db.lock().await;
        GalleryManager::new(LibSqlBlobStore::new(db.connection()))
            .count()
            .await
    }

    /// Forget the passcode; the next qualifying input sets a new one.
    pub fn reset_passcode(&self) -> Result<()> {
        self.kv.remove(PASSCODE_KEY)?;
        tracing::warn!("Passcode removed");
        Ok(())
    }

    /// Remove the passcode, history, notes and every media item.
    pub async fn reset_all(&self) -> Result<()> {
        for key in [PASSCODE_KEY, HISTORY_KEY, NOTES_KEY] {
            self.kv.remove(key)?;
        }

        let db = self.db.lock().await;
        let gallery = GalleryManager::new(LibSqlBlobStore::new(db.connection()));
        for item in gallery.list_media().await? {
            gallery.delete_media(&item.id).await?;
        }
        tracing::warn!("All vault data removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::UnlockOutcome;
    use crate::models::NotePatch;
    use tempfile::tempdir;

    fn png(name: &str) -> UploadedFile {
        UploadedFile::new(name, Some("image/png".to_string()), vec![1, 2, 3])
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_open_creates_layout() {
        let temp = tempdir().unwrap();
        let config = AppConfig::new(temp.path().join("data"));

        let vault = VaultService::open(&config).await.unwrap();
        assert!(config.kv_dir().is_dir());
        assert!(config.media_db_path().exists());
        assert_eq!(vault.data_dir(), Some(config.data_dir()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_data_survives_reopen() {
        let temp = tempdir().unwrap();
        let config = AppConfig::new(temp.path());

        {
            let vault = VaultService::open(&config).await.unwrap();
            let mut gate = vault.passcode_gate().unwrap();
            gate.attempt_unlock("2468").unwrap();
            let mut notes = vault.notes().unwrap();
            let note = notes.create().unwrap();
            notes.update(&note.id, NotePatch::title("groceries")).unwrap();
            vault.add_media(vec![png("a.png")]).await.unwrap();
        }

        let vault = VaultService::open(&config).await.unwrap();
        let mut gate = vault.passcode_gate().unwrap();
        assert_eq!(gate.attempt_unlock("2468").unwrap(), UnlockOutcome::Unlocked);
        assert_eq!(vault.notes().unwrap().list()[0].title, "groceries");
        assert_eq!(vault.media_count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_media_round_trip() {
        let vault = VaultService::open_in_memory().await.unwrap();
        let added = vault
            .add_media(vec![png("a.png"), png("b.png")])
            .await
            .unwrap();
        assert_eq!(vault.list_media().await.unwrap().len(), 2);

        let fetched = vault.get_media(&added[0].id).await.unwrap().unwrap();
        assert_eq!(fetched.blob, vec![1, 2, 3]);

        vault.delete_media(&added[0].id).await.unwrap();
        assert_eq!(vault.media_count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_reset_passcode_keeps_content() {
        let vault = VaultService::open_in_memory().await.unwrap();
        vault.passcode_gate().unwrap().attempt_unlock("1234").unwrap();
        vault.notes().unwrap().create().unwrap();

        vault.reset_passcode().unwrap();
        assert!(!vault.passcode_gate().unwrap().is_set());
        assert_eq!(vault.notes().unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_reset_all() {
        let vault = VaultService::open_in_memory().await.unwrap();
        vault.passcode_gate().unwrap().attempt_unlock("1234").unwrap();
        vault.notes().unwrap().create().unwrap();
        vault.add_media(vec![png("a.png")]).await.unwrap();

        vault.reset_all().await.unwrap();
        assert!(!vault.passcode_gate().unwrap().is_set());
        assert!(vault.notes().unwrap().is_empty());
        assert!(vault.history().unwrap().is_empty());
        assert_eq!(vault.media_count().await.unwrap(), 0);
    }
}
