//! Calculation history side panel

use dioxus::prelude::*;

use abacus_core::models::HistoryItem;
use abacus_core::util::format_local_time;

use crate::theme::palette;

/// Newest-first list of past calculations with restore and clear
#[component]
pub fn HistoryPanel(
    items: Vec<HistoryItem>,
    on_restore: EventHandler<HistoryItem>,
    on_clear: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let colors = palette();
    let has_items = !items.is_empty();

    rsx! {
        aside {
            class: "history-panel",
            style: "
                position: fixed;
                top: 0;
                right: 0;
                bottom: 0;
                width: min(320px, 85vw);
                display: flex;
                flex-direction: column;
                background: {colors.bg_secondary};
                border-left: 1px solid {colors.border};
                z-index: 10;
            ",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    padding: 16px;
                    border-bottom: 1px solid {colors.border};
                ",
                h2 { style: "flex: 1; margin: 0; font-size: 18px;", "History" }
                if has_items {
                    button {
                        style: "border: none; background: transparent; color: {colors.error}; cursor: pointer;",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
                button {
                    style: "border: none; background: transparent; color: {colors.accent}; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "Done"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto;",

                if has_items {
                    for (index, item) in items.into_iter().enumerate() {
                        {
                            let time = format_local_time(item.timestamp);
                            let expression = item.expression.clone();
                            let result = item.result.clone();
                            let timestamp = item.timestamp;

                            rsx! {
                                div {
                                    key: "{index}-{timestamp}",
                                    class: "history-entry",
                                    style: "
                                        padding: 12px 16px;
                                        border-bottom: 1px solid {colors.border};
                                        text-align: right;
                                        cursor: pointer;
                                    ",
                                    onclick: move |_| on_restore.call(item.clone()),

                                    div {
                                        style: "font-size: 13px; color: {colors.text_secondary};",
                                        "{expression} ="
                                    }
                                    div { style: "font-size: 22px;", "{result}" }
                                    div {
                                        style: "font-size: 11px; color: {colors.text_muted};",
                                        "{time}"
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        style: "padding: 24px; text-align: center; color: {colors.text_muted};",
                        "No history yet"
                    }
                }
            }
        }
    }
}
