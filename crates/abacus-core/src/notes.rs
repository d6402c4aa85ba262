//! Notes collection and editor selection
//!
//! Notes live in one JSON array under [`NOTES_KEY`]. Every mutation writes the
//! whole collection before the in-memory copy is swapped, so a failed write
//! leaves both the store and this manager unchanged.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::kv::{load_json, save_json, KeyValueStore, NOTES_KEY};
use crate::models::{Note, NoteId, NotePatch};

pub struct NotesManager {
    store: Arc<dyn KeyValueStore>,
    notes: Vec<Note>,
    active: Option<NoteId>,
}

impl NotesManager {
    /// Load the collection; a missing record is an empty collection
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let notes = read_notes(store.as_ref())?;
        Ok(Self {
            store,
            notes,
            active: None,
        })
    }

    /// Load the collection, falling back to an empty one when the record is
    /// unreadable. The stored record is left as is.
    pub fn load_or_empty(store: Arc<dyn KeyValueStore>) -> Self {
        match read_notes(store.as_ref()) {
            Ok(notes) => Self {
                store,
                notes,
                active: None,
            },
            Err(e) => {
                tracing::error!("Failed to load notes: {e}");
                Self {
                    store,
                    notes: Vec::new(),
                    active: None,
                }
            }
        }
    }

    /// Re-read the collection from the store
    pub fn reload(&mut self) -> Result<()> {
        self.notes = read_notes(self.store.as_ref())?;
        if let Some(id) = self.active {
            if self.get(&id).is_none() {
                self.active = None;
            }
        }
        Ok(())
    }

    /// Notes, most recently created first
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// Create a blank note at the front of the list and open it for editing
    pub fn create(&mut self) -> Result<Note> {
        let note = Note::new();
        let mut updated = Vec::with_capacity(self.notes.len() + 1);
        updated.push(note.clone());
        updated.extend(self.notes.iter().cloned());

        self.commit(updated)?;
        self.active = Some(note.id);
        tracing::debug!("Created note {}", note.id);
        Ok(note)
    }

    /// Merge `patch` into the note with `id` and persist
    pub fn update(&mut self, id: &NoteId, patch: NotePatch) -> Result<Note> {
        let mut updated = self.notes.clone();
        let note = updated
            .iter_mut()
            .find(|note| note.id == *id)
            .ok_or_else(|| Error::NotFound(format!("Note {id}")))?;
        note.apply(patch);
        let note = note.clone();

        self.commit(updated)?;
        Ok(note)
    }

    /// Remove the note with `id`, closing the editor if it was open
    pub fn delete(&mut self, id: &NoteId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(Error::NotFound(format!("Note {id}")));
        }
        let updated = self
            .notes
            .iter()
            .filter(|note| note.id != *id)
            .cloned()
            .collect();

        self.commit(updated)?;
        if self.active == Some(*id) {
            self.active = None;
        }
        tracing::debug!("Deleted note {id}");
        Ok(())
    }

    /// Open an existing note in the editor
    pub fn open(&mut self, id: &NoteId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(Error::NotFound(format!("Note {id}")));
        }
        self.active = Some(*id);
        Ok(())
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// The note currently open in the editor
    pub fn active(&self) -> Option<&Note> {
        self.active.and_then(|id| self.get(&id))
    }

    fn commit(&mut self, notes: Vec<Note>) -> Result<()> {
        save_json(self.store.as_ref(), NOTES_KEY, &notes)?;
        self.notes = notes;
        Ok(())
    }
}

fn read_notes(store: &dyn KeyValueStore) -> Result<Vec<Note>> {
    let notes: Vec<Note> = load_json(store, NOTES_KEY)?.unwrap_or_default();

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id) {
            return Err(Error::CorruptRecord {
                key: NOTES_KEY.to_string(),
                reason: format!("duplicate note id {}", note.id),
            });
        }
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FileKeyValueStore, MemoryKeyValueStore};
    use crate::models::NEW_NOTE_TITLE;
    use pretty_assertions::assert_eq;

    fn memory_store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryKeyValueStore::new())
    }

    #[test]
    fn test_create_inserts_at_front_and_opens() {
        let mut notes = NotesManager::load(memory_store()).unwrap();
        let first = notes.create().unwrap();
        let second = notes.create().unwrap();

        assert_eq!(first.title, NEW_NOTE_TITLE);
        assert!(first.content.is_empty());
        let ids: Vec<NoteId> = notes.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(notes.active().map(|n| n.id), Some(second.id));
    }

    #[test]
    fn test_edit_round_trips_through_storage() {
        let temp = tempfile::tempdir().unwrap();
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::open(temp.path()).unwrap());

        let mut notes = NotesManager::load(Arc::clone(&store)).unwrap();
        let created = notes.create().unwrap();
        notes
            .update(&created.id, NotePatch::content("buy milk"))
            .unwrap();

        let reloaded = NotesManager::load(store).unwrap();
        let note = reloaded.get(&created.id).unwrap();
        assert_eq!(note.content, "buy milk");
        assert_eq!(note.title, NEW_NOTE_TITLE);
        assert!(note.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_missing_note_fails() {
        let mut notes = NotesManager::load(memory_store()).unwrap();
        let result = notes.update(&NoteId::new(), NotePatch::title("x"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_deleting_open_note_closes_editor() {
        let store = memory_store();
        let mut notes = NotesManager::load(Arc::clone(&store)).unwrap();
        let only = notes.create().unwrap();
        assert!(notes.active().is_some());

        notes.delete(&only.id).unwrap();
        assert!(notes.active().is_none());
        assert!(notes.is_empty());
        assert!(NotesManager::load(store).unwrap().is_empty());
    }

    #[test]
    fn test_deleting_other_note_keeps_editor_open() {
        let mut notes = NotesManager::load(memory_store()).unwrap();
        let first = notes.create().unwrap();
        let second = notes.create().unwrap();
        notes.open(&second.id).unwrap();

        notes.delete(&first.id).unwrap();
        assert_eq!(notes.active().map(|n| n.id), Some(second.id));
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_corrupt() {
        let store = memory_store();
        let note = Note::new();
        save_json(store.as_ref(), NOTES_KEY, &vec![note.clone(), note]).unwrap();

        assert!(matches!(
            NotesManager::load(Arc::clone(&store)),
            Err(Error::CorruptRecord { .. })
        ));
        assert!(NotesManager::load_or_empty(store).is_empty());
    }

    #[test]
    fn test_malformed_record_falls_back_to_empty() {
        let store = memory_store();
        store.set(NOTES_KEY, r#"[{"id": 1}]"#).unwrap();

        let notes = NotesManager::load_or_empty(Arc::clone(&store));
        assert!(notes.is_empty());
        // The unreadable record is not overwritten by loading
        assert_eq!(store.get(NOTES_KEY).unwrap().as_deref(), Some(r#"[{"id": 1}]"#));
    }

    #[test]
    fn test_reload_drops_missing_active_note() {
        let store = memory_store();
        let mut notes = NotesManager::load(Arc::clone(&store)).unwrap();
        notes.create().unwrap();

        store.remove(NOTES_KEY).unwrap();
        notes.reload().unwrap();
        assert!(notes.active().is_none());
        assert!(notes.is_empty());
    }
}
