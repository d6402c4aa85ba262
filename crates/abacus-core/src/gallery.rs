//! Gallery operations over a blob store

use crate::db::BlobStore;
use crate::error::Result;
use crate::models::{MediaId, MediaItem, UploadedFile};

/// Media listing, upload and deletion on top of a [`BlobStore`]
pub struct GalleryManager<B> {
    store: B,
}

impl<B: BlobStore> GalleryManager<B> {
    pub const fn new(store: B) -> Self {
        Self { store }
    }

    /// All media, newest first. Items created in the same millisecond fall
    /// back to id order, which is time-sortable.
    pub async fn list_media(&self) -> Result<Vec<MediaItem>> {
        let mut items = self.store.list().await?;
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_str().cmp(&a.id.as_str()))
        });
        Ok(items)
    }

    pub async fn get_media(&self, id: &MediaId) -> Result<Option<MediaItem>> {
        self.store.get(id).await
    }

    /// Store one uploaded file as a new media item
    pub async fn add_file(&self, file: UploadedFile) -> Result<MediaItem> {
        let item = MediaItem::from_upload(file)?;
        self.store.add(&item).await?;
        tracing::info!("Added {} `{}` to gallery", item.kind.as_str(), item.name);
        Ok(item)
    }

    /// Store several files, one media item each.
    ///
    /// Each add completes before the next starts; the first failure stops the
    /// batch and items stored before it are kept.
    pub async fn add_media(&self, files: Vec<UploadedFile>) -> Result<Vec<MediaItem>> {
        let mut added = Vec::with_capacity(files.len());
        for file in files {
            added.push(self.add_file(file).await?);
        }
        Ok(added)
    }

    pub async fn delete_media(&self, id: &MediaId) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!("Deleted media {id} from gallery");
        Ok(())
    }

    pub async fn count(&self) -> Result<usize> {
        self.store.count().await
    }
}

/// Preview selection after `deleted` is removed: the preview closes when it
/// showed the deleted item and stays otherwise.
pub fn preview_after_delete(current: Option<MediaId>, deleted: &MediaId) -> Option<MediaId> {
    current.filter(|id| id != deleted)
}
