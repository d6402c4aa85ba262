//! Home view - launcher grid behind the passcode

use dioxus::prelude::*;

use abacus_core::router::{search_url, LaunchTarget, Launcher, LAUNCHERS};

use crate::components::LauncherTile;
use crate::services::open_external;
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn HomeView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let mut query = use_signal(String::new);

    let launch = move |launcher: Launcher| match launcher.target {
        LaunchTarget::View(view) => state.open(view),
        LaunchTarget::External(url) => open_external(url),
    };

    let mut submit_search = move || {
        open_external(&search_url(&query.peek()));
        query.set(String::new());
    };

    rsx! {
        div {
            class: "home-container",
            style: "
                height: 100vh;
                display: flex;
                flex-direction: column;
                background: linear-gradient(160deg, #1c1c3a 0%, #000000 100%);
            ",

            form {
                class: "search-bar",
                style: "padding: 24px 20px 8px;",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit_search();
                },

                input {
                    r#type: "search",
                    placeholder: "Search the web",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 10px 14px;
                        border: 1px solid {colors.border};
                        border-radius: 12px;
                        font-size: 15px;
                        background: {colors.bg_secondary};
                        color: {colors.text_primary};
                        outline: none;
                    ",
                }
            }

            div {
                class: "launcher-grid",
                style: "
                    flex: 1;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    align-content: start;
                    gap: 20px 8px;
                    padding: 24px 16px;
                ",

                for launcher in LAUNCHERS.iter().copied() {
                    LauncherTile {
                        key: "{launcher.id}",
                        launcher,
                        onclick: launch,
                    }
                }
            }

            nav {
                class: "dock",
                style: "
                    display: flex;
                    justify-content: center;
                    padding: 12px;
                    margin: 0 16px 16px;
                    border-radius: 24px;
                    background: rgba(255, 255, 255, 0.08);
                ",
                button {
                    class: "lock-button",
                    title: "Lock",
                    style: "
                        width: 56px;
                        height: 56px;
                        border: none;
                        border-radius: 16px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        font-size: 24px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.lock(),
                    "\u{1F5A9}"
                }
            }
        }
    }
}
