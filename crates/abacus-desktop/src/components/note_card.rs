//! Note card component

use dioxus::prelude::*;

use crate::theme::palette;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    title: String,
    preview: String,
    updated: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "note-item",
            style: "
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border};
                cursor: pointer;
                background: {colors.bg_primary};
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                style: "display: flex; align-items: baseline; gap: 8px; margin-bottom: 4px;",
                div {
                    class: "note-title",
                    style: "
                        flex: 1;
                        font-weight: 500;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        color: {colors.text_primary};
                    ",
                    "{title}"
                }
                div {
                    class: "note-date",
                    style: "font-size: 11px; color: {colors.text_muted};",
                    "{updated}"
                }
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {colors.text_secondary};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }
        }
    }
}
