//! Media repository implementation

use libsql::{params, Connection, Row, Value};

use crate::error::{Error, Result};
use crate::models::{MediaId, MediaItem};

const MEDIA_COLUMNS: &str = "id, name, kind, mime_type, size_bytes, blob, created_at";

/// Trait for blob storage operations (async)
#[allow(async_fn_in_trait)]
pub trait BlobStore {
    /// Insert a new media item; fails if the id already exists
    async fn add(&self, item: &MediaItem) -> Result<()>;

    /// Get a media item by ID
    async fn get(&self, id: &MediaId) -> Result<Option<MediaItem>>;

    /// All stored media items, in no particular order
    async fn list(&self) -> Result<Vec<MediaItem>>;

    /// Delete a media item; deleting a missing id is not an error
    async fn delete(&self, id: &MediaId) -> Result<()>;

    /// Number of stored media items
    async fn count(&self) -> Result<usize>;
}

/// libSQL implementation of `BlobStore`
pub struct LibSqlBlobStore<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlBlobStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a media item from a database row, validating every field
    fn parse_media(row: &Row) -> Result<MediaItem> {
        let id: String = row.get(0)?;
        let id: MediaId = id.parse().map_err(|_| corrupt(&id, "invalid id"))?;
        let kind: String = row.get(2)?;
        let kind = kind
            .parse()
            .map_err(|_| corrupt(&id.as_str(), &format!("unknown kind `{kind}`")))?;
        let size_bytes: i64 = row.get(4)?;
        let blob: Vec<u8> = row.get(5)?;

        if usize::try_from(size_bytes).ok() != Some(blob.len()) {
            return Err(corrupt(
                &id.as_str(),
                &format!("size {size_bytes} does not match payload {}", blob.len()),
            ));
        }

        Ok(MediaItem {
            id,
            name: row.get(1)?,
            kind,
            mime_type: row.get(3)?,
            size_bytes,
            blob,
            created_at: row.get(6)?,
        })
    }
}

fn corrupt(id: &str, reason: &str) -> Error {
    Error::CorruptRecord {
        key: format!("media/{id}"),
        reason: reason.to_string(),
    }
}

impl BlobStore for LibSqlBlobStore<'_> {
    async fn add(&self, item: &MediaItem) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO media (id, name, kind, mime_type, size_bytes, blob, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![
                    item.id.as_str(),
                    item.name.clone(),
                    item.kind.as_str(),
                    item.mime_type.clone(),
                    item.size_bytes,
                    Value::Blob(item.blob.clone()),
                    item.created_at
                ],
            )
            .await
            .map_err(|error| Error::Storage(format!("Failed to add media {}: {error}", item.id)))?;

        tracing::debug!("Stored media {} ({} bytes)", item.id, item.size_bytes);
        Ok(())
    }

    async fn get(&self, id: &MediaId) -> Result<Option<MediaItem>> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id = ?"),
                params![id.as_str()],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Self::parse_media(&row).map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<MediaItem>> {
        let mut rows = self
            .conn
            .query(&format!("SELECT {MEDIA_COLUMNS} FROM media"), ())
            .await
            .map_err(|error| Error::Storage(format!("Failed to fetch media: {error}")))?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(Self::parse_media(&row)?);
        }
        Ok(items)
    }

    async fn delete(&self, id: &MediaId) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM media WHERE id = ?", params![id.as_str()])
            .await
            .map_err(|error| Error::Storage(format!("Failed to delete media {id}: {error}")))?;

        tracing::debug!("Deleted media {id} (rows affected: {removed})");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM media", ()).await?;
        let count: i64 = match rows.next().await? {
            Some(row) => row.get(0)?,
            None => 0,
        };
        usize::try_from(count).map_err(|_| Error::Database(format!("Invalid media count {count}")))
    }
}
