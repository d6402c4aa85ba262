//! Transient notice shown over the current view

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn NoticeBanner(message: String) -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    rsx! {
        div {
            class: "notice-banner",
            role: "status",
            style: "
                position: fixed;
                left: 16px;
                right: 16px;
                bottom: 24px;
                padding: 12px 16px;
                border-radius: 12px;
                background: {colors.bg_tertiary};
                color: {colors.text_primary};
                font-size: 14px;
                box-shadow: 0 6px 24px rgba(0, 0, 0, 0.5);
                cursor: pointer;
            ",
            onclick: move |_| state.notice.set(None),
            "{message}"
        }
    }
}
