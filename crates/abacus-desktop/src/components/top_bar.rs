//! Header with a back button

use dioxus::prelude::*;

use crate::theme::palette;

/// View header: back button, title and optional trailing actions
#[component]
pub fn TopBar(title: String, on_back: EventHandler<()>, trailing: Option<Element>) -> Element {
    let colors = palette();

    rsx! {
        header {
            class: "top-bar",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            button {
                class: "back-button",
                style: "
                    border: none;
                    background: transparent;
                    color: {colors.accent};
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| on_back.call(()),
                "\u{2039} Back"
            }

            h1 {
                style: "
                    flex: 1;
                    margin: 0;
                    font-size: 18px;
                    font-weight: 600;
                ",
                "{title}"
            }

            {trailing}
        }
    }
}
