//! libSQL database handle for the blob store

use std::path::Path;

use libsql::{Builder, Connection, Database as LibSqlDatabase};

use super::migrations;
use crate::error::Result;

/// Local libSQL database holding the media table
pub struct Database {
    // Keeps the database alive for as long as the connection is used
    _db: LibSqlDatabase,
    conn: Connection,
}

impl Database {
    /// Open or create the media database at `path` and migrate it.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let location = path.as_ref().to_string_lossy().into_owned();
        let database = Self::build(&location).await?;
        tracing::debug!("Opened media database at {location}");
        Ok(database)
    }

    /// Throwaway database that lives only as long as the handle
    pub async fn open_in_memory() -> Result<Self> {
        Self::build(":memory:").await
    }

    async fn build(location: &str) -> Result<Self> {
        let db = Builder::new_local(location).build().await?;
        let conn = db.connect()?;

        // WAL is not available in memory; failure to switch is harmless
        if let Err(error) = conn.execute("PRAGMA journal_mode = WAL", ()).await {
            tracing::trace!("journal_mode unchanged for {location}: {error}");
        }
        migrations::run(&conn).await?;

        Ok(Self { _db: db, conn })
    }

    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn media_rows(db: &Database) -> i64 {
        let mut rows = db
            .connection()
            .query("SELECT COUNT(*) FROM media", ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::open_in_memory().await.unwrap();
        assert_eq!(media_rows(&db).await, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_file_database_reopens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("media.db");

        let first = Database::open(&path).await.unwrap();
        first
            .connection()
            .execute(
                "INSERT INTO media (id, name, kind, mime_type, size_bytes, blob, created_at)
                 VALUES ('a', 'a.png', 'image', 'image/png', 1, x'00', 1)",
                (),
            )
            .await
            .unwrap();
        drop(first);

        let reopened = Database::open(&path).await.unwrap();
        assert_eq!(media_rows(&reopened).await, 1);
        assert!(path.exists());
    }
}
