//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use abacus_core::router::{View, ViewRouter};
use abacus_core::services::VaultService;

/// Whether the storage client finished opening
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VaultStatus {
    Opening,
    Ready,
    Failed(String),
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Storage client, once opened
    pub vault: Signal<Option<VaultService>>,
    /// Outcome of opening the storage client
    pub vault_status: Signal<VaultStatus>,
    /// Which screen is shown
    pub router: Signal<ViewRouter>,
    /// Transient message shown over the current view
    pub notice: Signal<Option<String>>,
}

impl AppState {
    /// Clone of the storage client, if it is open
    #[must_use]
    pub fn vault(&self) -> Option<VaultService> {
        self.vault.read().clone()
    }

    pub fn unlock(&mut self) {
        self.route(ViewRouter::unlock);
    }

    pub fn open(&mut self, target: View) {
        self.route(|router| router.open(target));
    }

    pub fn back(&mut self) {
        self.route(ViewRouter::back);
    }

    pub fn lock(&mut self) {
        self.route(ViewRouter::lock);
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }

    fn route(&mut self, step: impl FnOnce(&mut ViewRouter) -> abacus_core::Result<View>) {
        let mut router = self.router.write();
        if let Err(e) = step(&mut *router) {
            tracing::warn!("Ignoring navigation: {}", e);
        }
    }
}
