//! Versioned schema for the media database

use libsql::Connection;

use crate::error::Result;

/// Ordered schema steps; step `n` brings the database to version `n + 1`.
const STEPS: &[&[&str]] = &[&[
    "CREATE TABLE IF NOT EXISTS media (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        kind TEXT NOT NULL CHECK (kind IN ('image', 'video')),
        mime_type TEXT NOT NULL,
        size_bytes INTEGER NOT NULL,
        blob BLOB NOT NULL,
        created_at INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_media_created ON media(created_at DESC)",
]];

#[allow(clippy::cast_possible_wrap)]
const LATEST_VERSION: i64 = STEPS.len() as i64;

/// Bring the schema up to [`LATEST_VERSION`], applying each missing step in
/// its own transaction.
pub async fn run(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
        (),
    )
    .await?;

    let current = schema_version(conn).await?;
    for (index, statements) in STEPS.iter().enumerate() {
        #[allow(clippy::cast_possible_wrap)]
        let version = index as i64 + 1;
        if version > current {
            apply(conn, version, statements).await?;
        }
    }
    Ok(())
}

async fn schema_version(conn: &Connection) -> Result<i64> {
    let mut rows = conn
        .query("SELECT COALESCE(MAX(version), 0) FROM schema_version", ())
        .await?;
    match rows.next().await? {
        Some(row) => Ok(row.get::<i64>(0)?),
        None => Ok(0),
    }
}

async fn apply(conn: &Connection, version: i64, statements: &[&str]) -> Result<()> {
    conn.execute("BEGIN IMMEDIATE", ()).await?;

    let outcome = async {
        for statement in statements {
            conn.execute(statement, ()).await?;
        }
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
        conn.execute("COMMIT", ()).await?;
        Ok::<(), libsql::Error>(())
    }
    .await;

    if let Err(error) = outcome {
        conn.execute("ROLLBACK", ()).await.ok();
        tracing::error!("Media schema step {version} failed: {error}");
        return Err(error.into());
    }

    tracing::info!("Media database migrated to version {version}");
    Ok(())
}
