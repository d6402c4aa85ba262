//! Gallery view - private photos and videos

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use abacus_core::gallery::preview_after_delete;
use abacus_core::models::{MediaId, MediaItem, UploadedFile};

use crate::components::{MediaPreview, MediaTile, TopBar};
use crate::services::{confirm, show_error};
use crate::state::AppState;
use crate::theme::palette;

const MEDIA_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "mp4", "mov", "webm", "mkv",
];

#[derive(Clone, PartialEq)]
enum Listing {
    Loading,
    Loaded(Vec<MediaItem>),
}

#[component]
pub fn GalleryView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    let mut listing = use_signal(|| Listing::Loading);
    let mut preview = use_signal(|| None::<MediaId>);
    let mut uploading = use_signal(|| false);

    // Bumped after every mutation to refresh the listing
    let mut refresh = use_signal(|| 0u64);

    use_effect(move || {
        let _ = refresh();
        let Some(vault) = (state.vault)() else {
            return;
        };
        spawn(async move {
            let items = match vault.list_media().await {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!("Failed to list media: {}", e);
                    Vec::new()
                }
            };
            tracing::debug!("Gallery holds {} items", items.len());
            listing.set(Listing::Loaded(items));
        });
    });

    let on_upload = move |_| {
        let Some(vault) = state.vault() else {
            return;
        };
        spawn(async move {
            let Some(picked) = AsyncFileDialog::new()
                .add_filter("Photos and videos", MEDIA_EXTENSIONS)
                .pick_files()
                .await
            else {
                return;
            };

            uploading.set(true);
            let mut files = Vec::with_capacity(picked.len());
            for handle in picked {
                let name = handle.file_name();
                let bytes = handle.read().await;
                files.push(UploadedFile::new(name, None, bytes));
            }

            if let Err(e) = vault.add_media(files).await {
                tracing::error!("Failed to add media: {}", e);
                show_error("Some files could not be added.").await;
            }
            uploading.set(false);
            refresh.set(*refresh.peek() + 1);
        });
    };

    let on_delete = move |id: MediaId| {
        let Some(vault) = state.vault() else {
            return;
        };
        spawn(async move {
            if !confirm("Delete item", "Delete this item from the gallery?").await {
                return;
            }
            match vault.delete_media(&id).await {
                Ok(()) => {
                    let current = *preview.peek();
                    preview.set(preview_after_delete(current, &id));
                }
                Err(e) => {
                    tracing::error!("Failed to delete media {}: {}", id, e);
                    show_error("The item could not be deleted.").await;
                }
            }
            refresh.set(*refresh.peek() + 1);
        });
    };

    let current_listing = listing();
    let previewed = match (&current_listing, preview()) {
        (Listing::Loaded(items), Some(id)) => items.iter().find(|item| item.id == id).cloned(),
        _ => None,
    };

    rsx! {
        div {
            class: "gallery",
            style: "height: 100vh; display: flex; flex-direction: column;",

            TopBar {
                title: "Photos",
                on_back: move |()| state.back(),
                trailing: rsx! {
                    button {
                        class: "upload-button",
                        disabled: uploading(),
                        style: "border: none; background: transparent; color: {colors.accent}; font-size: 15px; cursor: pointer;",
                        onclick: on_upload,
                        if uploading() { "Adding..." } else { "Add" }
                    }
                },
            }

            div {
                style: "flex: 1; overflow-y: auto;",
                match current_listing {
                    Listing::Loading => rsx! {
                        div {
                            style: "padding: 40px; text-align: center; color: {colors.text_muted};",
                            "Loading..."
                        }
                    },
                    Listing::Loaded(items) if items.is_empty() => rsx! {
                        div {
                            style: "padding: 40px; text-align: center; color: {colors.text_muted};",
                            "No photos or videos yet"
                        }
                    },
                    Listing::Loaded(items) => rsx! {
                        div {
                            class: "media-grid",
                            style: "
                                display: grid;
                                grid-template-columns: repeat(3, 1fr);
                                gap: 2px;
                            ",
                            for item in items {
                                {
                                    let id = item.id;
                                    rsx! {
                                        MediaTile {
                                            key: "{id}",
                                            item,
                                            onclick: move |id| preview.set(Some(id)),
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }

            if let Some((previewed_id, item)) = previewed.map(|item| (item.id, item)) {
                MediaPreview {
                    key: "{previewed_id}",
                    item,
                    on_close: move |()| preview.set(None),
                    on_delete,
                }
            }
        }
    }
}
