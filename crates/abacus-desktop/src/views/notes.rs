//! Notes view - private notes list and editor

use dioxus::prelude::*;

use abacus_core::models::{Note, NoteId, NotePatch};
use abacus_core::notes::NotesManager;
use abacus_core::util::format_local_date;

use crate::components::{NoteCard, NoteEditor, TopBar};
use crate::services::{confirm, show_error};
use crate::state::AppState;
use crate::theme::palette;

/// Characters of content shown under each title
const PREVIEW_CHARS: usize = 60;

#[component]
pub fn NotesView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    let mut notes = use_signal(|| None::<NotesManager>);

    use_effect(move || {
        let Some(vault) = (state.vault)() else {
            return;
        };
        notes.set(Some(NotesManager::load_or_empty(vault.kv())));
    });

    let create_note = move |_| {
        let result = notes.write().as_mut().map(NotesManager::create);
        match result {
            Some(Ok(note)) => tracing::info!("Created new note: {}", note.id),
            Some(Err(e)) => tracing::error!("Failed to create note: {}", e),
            None => {}
        }
    };

    let mut open_note = move |id: NoteId| {
        if let Some(manager) = notes.write().as_mut() {
            if let Err(e) = manager.open(&id) {
                tracing::warn!("Cannot open note {}: {}", id, e);
            }
        }
    };

    let mut save_note = move |id: NoteId, patch: NotePatch| {
        if let Some(manager) = notes.write().as_mut() {
            if let Err(e) = manager.update(&id, patch) {
                tracing::error!("Failed to save note {}: {}", id, e);
            }
        }
    };

    let close_editor = move |()| {
        if let Some(manager) = notes.write().as_mut() {
            manager.close();
        }
    };

    let delete_note = move |id: NoteId| {
        spawn(async move {
            if !confirm("Delete note", "Delete this note? This cannot be undone.").await {
                return;
            }
            let result = notes.write().as_mut().map(|manager| manager.delete(&id));
            if let Some(Err(e)) = result {
                tracing::error!("Failed to delete note {}: {}", id, e);
                show_error("The note could not be deleted.").await;
            }
        });
    };

    let (listed, active): (Vec<Note>, Option<Note>) = notes
        .read()
        .as_ref()
        .map(|manager| (manager.list().to_vec(), manager.active().cloned()))
        .unwrap_or_default();

    if let Some(note) = active {
        let note_id = note.id;
        return rsx! {
            NoteEditor {
                key: "{note_id}",
                note,
                on_save: move |patch| save_note(note_id, patch),
                on_back: close_editor,
                on_delete: delete_note,
            }
        };
    }

    rsx! {
        div {
            class: "notes",
            style: "height: 100vh; display: flex; flex-direction: column;",

            TopBar {
                title: "Notes",
                on_back: move |()| state.back(),
                trailing: rsx! {
                    button {
                        class: "new-note-button",
                        style: "border: none; background: transparent; color: {colors.accent}; font-size: 15px; cursor: pointer;",
                        onclick: create_note,
                        "+ New Note"
                    }
                },
            }

            div {
                class: "note-list",
                style: "flex: 1; overflow-y: auto;",

                if listed.is_empty() {
                    div {
                        style: "padding: 40px; text-align: center; color: {colors.text_muted};",
                        "No notes yet"
                    }
                } else {
                    for note in listed {
                        {
                            let note_id = note.id;
                            let title = note.display_title().to_string();
                            let preview = note.content_preview(PREVIEW_CHARS);
                            let updated = format_local_date(note.updated_at);

                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    title,
                                    preview,
                                    updated,
                                    onclick: move |_| open_note(note_id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
