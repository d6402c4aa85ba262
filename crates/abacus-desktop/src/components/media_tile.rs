//! Gallery grid cell

use std::rc::Rc;

use dioxus::prelude::*;

use abacus_core::models::{MediaId, MediaItem, MediaKind};
use abacus_core::storage::{DisplayHandles, ThumbnailOptions};

use crate::theme::palette;

/// Square thumbnail for one media item.
///
/// The display handle lives as long as the tile is mounted.
#[component]
pub fn MediaTile(item: MediaItem, onclick: EventHandler<MediaId>) -> Element {
    let handles = use_context::<DisplayHandles>();
    let handle = use_hook(|| Rc::new(handles.acquire_thumbnail(&item, ThumbnailOptions::default())));
    let colors = palette();
    let id = item.id;
    let uri = handle.uri();

    rsx! {
        button {
            class: "media-tile",
            title: "{item.name}",
            style: "
                position: relative;
                aspect-ratio: 1;
                padding: 0;
                border: none;
                overflow: hidden;
                background: {colors.bg_secondary};
                cursor: pointer;
            ",
            onclick: move |_| onclick.call(id),

            match item.kind {
                MediaKind::Image => rsx! {
                    img {
                        src: "{uri}",
                        alt: "{item.name}",
                        style: "width: 100%; height: 100%; object-fit: cover; display: block;",
                    }
                },
                MediaKind::Video => rsx! {
                    video {
                        src: "{uri}",
                        muted: true,
                        preload: "metadata",
                        style: "width: 100%; height: 100%; object-fit: cover; display: block;",
                    }
                    span {
                        style: "
                            position: absolute;
                            right: 6px;
                            bottom: 6px;
                            font-size: 14px;
                            color: {colors.text_primary};
                            text-shadow: 0 1px 3px rgba(0, 0, 0, 0.8);
                        ",
                        "\u{25B6}"
                    }
                },
            }
        }
    }
}
