//! abacus-core - Core library for Abacus
//!
//! Holds the calculator engine, the passcode gate, the view router and the
//! two local stores (key-value records and the media database) shared by the
//! desktop app and the CLI.

pub mod calc;
pub mod config;
pub mod db;
pub mod error;
pub mod gallery;
pub mod gate;
pub mod kv;
pub mod models;
pub mod notes;
pub mod router;
pub mod services;
pub mod storage;
pub mod util;

pub use error::{Error, Result};
pub use models::{MediaId, Note, NoteId};
