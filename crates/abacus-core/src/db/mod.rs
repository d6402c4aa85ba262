//! Blob store for Abacus media
//!
//! Binary media and its metadata live in a local libSQL database. All
//! operations are async; callers that need ordering must await one operation
//! before issuing the next.

mod connection;
mod media_repository;
mod migrations;

pub use connection::Database;
pub use media_repository::{BlobStore, LibSqlBlobStore};
