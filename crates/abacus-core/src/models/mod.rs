//! Data models for Abacus

mod history;
mod media;
mod note;

pub use history::{HistoryItem, HISTORY_LIMIT};
pub use media::{MediaId, MediaItem, MediaKind, UploadedFile};
pub use note::{Note, NoteId, NotePatch, NEW_NOTE_TITLE};
