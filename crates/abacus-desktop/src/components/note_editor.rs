//! Note editor component

use std::time::Duration;

use dioxus::prelude::*;

use abacus_core::models::{Note, NoteId, NotePatch};
use abacus_core::util::{format_local_date, format_local_time};

use super::TopBar;
use crate::theme::palette;

/// Save after this long without typing
const IDLE_SAVE_MS: u64 = 800;

/// Title and content editor with debounced saving.
///
/// Key the component by note id; local buffers are seeded on mount.
#[component]
pub fn NoteEditor(
    note: Note,
    on_save: EventHandler<NotePatch>,
    on_back: EventHandler<()>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let colors = palette();
    let note_id = note.id;

    let mut title = use_signal(|| note.title.clone());
    let mut content = use_signal(|| note.content.clone());

    // Version-based save tracking to debounce writes.
    let mut save_version = use_signal(|| 0u64);
    let mut last_saved_version = use_signal(|| 0u64);

    let save_now = move || {
        let current_version = *save_version.peek();
        if current_version == 0 || current_version == *last_saved_version.peek() {
            return;
        }
        on_save.call(NotePatch {
            title: Some(title.peek().clone()),
            content: Some(content.peek().clone()),
        });
        last_saved_version.set(current_version);
    };

    use_effect(move || {
        let current_version = save_version();
        if current_version == 0 || current_version == *last_saved_version.peek() {
            return;
        }
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(IDLE_SAVE_MS)).await;
            if *save_version.peek() != current_version {
                return;
            }
            let mut save = save_now;
            save();
        });
    });

    let on_title_input = move |evt: Event<FormData>| {
        title.set(evt.value());
        save_version.set(*save_version.peek() + 1);
    };

    let on_content_input = move |evt: Event<FormData>| {
        content.set(evt.value());
        save_version.set(*save_version.peek() + 1);
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        if evt.modifiers().ctrl() && evt.key() == Key::Character("s".to_string()) {
            evt.prevent_default();
            let mut save = save_now;
            save();
        }
    };

    let edited = format!(
        "Edited {} {}",
        format_local_date(note.updated_at),
        format_local_time(note.updated_at)
    );

    rsx! {
        div {
            class: "note-editor",
            style: "height: 100vh; display: flex; flex-direction: column;",

            TopBar {
                title: "Notes",
                on_back: move |()| {
                    let mut save = save_now;
                    save();
                    on_back.call(());
                },
                trailing: rsx! {
                    button {
                        style: "border: none; background: transparent; color: {colors.error}; font-size: 15px; cursor: pointer;",
                        onclick: move |_| on_delete.call(note_id),
                        "Delete"
                    }
                },
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 8px; padding: 16px;",

                input {
                    class: "note-title-input",
                    r#type: "text",
                    value: "{title}",
                    placeholder: "Title",
                    oninput: on_title_input,
                    onblur: move |_| {
                        let mut save = save_now;
                        save();
                    },
                    onkeydown: on_keydown,
                    style: "
                        border: none;
                        outline: none;
                        background: transparent;
                        color: {colors.text_primary};
                        font-size: 22px;
                        font-weight: 600;
                    ",
                }

                div {
                    style: "font-size: 11px; color: {colors.text_muted};",
                    "{edited}"
                }

                textarea {
                    class: "editor-textarea",
                    value: "{content}",
                    placeholder: "Start typing...",
                    oninput: on_content_input,
                    onblur: move |_| {
                        let mut save = save_now;
                        save();
                    },
                    onkeydown: on_keydown,
                    style: "
                        flex: 1;
                        width: 100%;
                        border: none;
                        outline: none;
                        resize: none;
                        font-family: inherit;
                        font-size: 15px;
                        line-height: 1.6;
                        background: transparent;
                        color: {colors.text_primary};
                    ",
                }
            }
        }
    }
}
