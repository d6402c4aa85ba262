//! Full-screen media preview

use std::rc::Rc;

use dioxus::prelude::*;

use abacus_core::models::{MediaId, MediaItem, MediaKind};
use abacus_core::storage::DisplayHandles;

use crate::theme::palette;

/// Shows one item over the gallery with close and delete actions
#[component]
pub fn MediaPreview(
    item: MediaItem,
    on_close: EventHandler<()>,
    on_delete: EventHandler<MediaId>,
) -> Element {
    let handles = use_context::<DisplayHandles>();
    let handle = use_hook(|| Rc::new(handles.acquire(&item)));
    let colors = palette();
    let id = item.id;
    let uri = handle.uri();

    rsx! {
        div {
            class: "media-preview",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                flex-direction: column;
                background: {colors.overlay};
                z-index: 20;
            ",

            div {
                style: "display: flex; align-items: center; gap: 12px; padding: 12px 16px;",
                button {
                    style: "border: none; background: transparent; color: {colors.accent}; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
                span {
                    style: "flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; color: {colors.text_secondary};",
                    "{item.name}"
                }
                button {
                    style: "border: none; background: transparent; color: {colors.error}; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }

            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; overflow: hidden;",
                match item.kind {
                    MediaKind::Image => rsx! {
                        img {
                            src: "{uri}",
                            alt: "{item.name}",
                            style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                        }
                    },
                    MediaKind::Video => rsx! {
                        video {
                            src: "{uri}",
                            controls: true,
                            autoplay: true,
                            style: "max-width: 100%; max-height: 100%;",
                        }
                    },
                }
            }
        }
    }
}
