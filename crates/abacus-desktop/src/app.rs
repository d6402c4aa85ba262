//! Main application component

use std::time::Duration;

use dioxus::prelude::*;

use abacus_core::router::{View, ViewRouter};
use abacus_core::storage::DisplayHandles;

use crate::components::NoticeBanner;
use crate::services::open_vault;
use crate::state::{AppState, VaultStatus};
use crate::theme::palette;
use crate::views::{CalculatorView, GalleryView, HomeView, NotesView};

/// How long a notice stays on screen
const NOTICE_MS: u64 = 4000;

/// Root application component
#[component]
pub fn App() -> Element {
    let mut vault = use_signal(|| None);
    let mut vault_status = use_signal(|| VaultStatus::Opening);
    let router = use_signal(ViewRouter::new);
    let mut notice = use_signal(|| None::<String>);

    // Open storage once per session
    use_future(move || async move {
        match open_vault().await {
            Ok(service) => {
                vault.set(Some(service));
                vault_status.set(VaultStatus::Ready);
            }
            Err(e) => {
                tracing::error!("Failed to open vault: {}", e);
                vault_status.set(VaultStatus::Failed(e.to_string()));
            }
        }
    });

    // Dismiss notices after a while; a newer notice restarts the timer
    use_effect(move || {
        let Some(shown) = notice() else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(NOTICE_MS)).await;
            if notice.peek().as_deref() == Some(shown.as_str()) {
                notice.set(None);
            }
        });
    });

    use_context_provider(|| AppState {
        vault,
        vault_status,
        router,
        notice,
    });
    use_context_provider(DisplayHandles::new);

    let colors = palette();
    let view = router().current();

    rsx! {
        div {
            class: "app-container",
            style: "
                height: 100vh;
                overflow: hidden;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                user-select: none;
            ",

            match view {
                View::Calculator => rsx! { CalculatorView {} },
                View::Home => rsx! { HomeView {} },
                View::Gallery => rsx! { GalleryView {} },
                View::Notes => rsx! { NotesView {} },
            }

            if let Some(message) = notice() {
                NoticeBanner { message }
            }
        }
    }
}
