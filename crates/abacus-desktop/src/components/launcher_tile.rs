//! Home-screen launcher tile

use dioxus::prelude::*;

use abacus_core::router::Launcher;

use crate::theme::palette;

#[component]
pub fn LauncherTile(launcher: Launcher, onclick: EventHandler<Launcher>) -> Element {
    let colors = palette();

    rsx! {
        button {
            class: "launcher-tile",
            title: "{launcher.name}",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 6px;
                border: none;
                background: transparent;
                color: {colors.text_primary};
                cursor: pointer;
            ",
            onclick: move |_| onclick.call(launcher),

            span {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 60px;
                    height: 60px;
                    border-radius: 16px;
                    background: {colors.bg_tertiary};
                    font-size: 30px;
                ",
                "{launcher.icon}"
            }
            span { style: "font-size: 12px;", "{launcher.name}" }
        }
    }
}
