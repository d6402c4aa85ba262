//! Persisted calculation history

use std::sync::Arc;

use crate::error::Result;
use crate::kv::{load_json, save_json, KeyValueStore, HISTORY_KEY};
use crate::models::{HistoryItem, HISTORY_LIMIT};

/// Newest-first log of successful evaluations, capped at [`HISTORY_LIMIT`]
pub struct HistoryLog {
    store: Arc<dyn KeyValueStore>,
    items: Vec<HistoryItem>,
}

impl HistoryLog {
    /// Load the history from the store; a missing record is an empty log
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let mut items: Vec<HistoryItem> = load_json(store.as_ref(), HISTORY_KEY)?.unwrap_or_default();
        if items.len() > HISTORY_LIMIT {
            tracing::warn!(
                "Stored history has {} entries, keeping the newest {HISTORY_LIMIT}",
                items.len()
            );
            items.truncate(HISTORY_LIMIT);
        }
        Ok(Self { store, items })
    }

    /// Load the history, falling back to an empty log when the record is
    /// unreadable. The next [`record`](Self::record) replaces the bad record.
    pub fn load_or_empty(store: Arc<dyn KeyValueStore>) -> Self {
        match Self::load(Arc::clone(&store)) {
            Ok(log) => log,
            Err(e) => {
                tracing::error!("Failed to load history: {e}");
                Self {
                    store,
                    items: Vec::new(),
                }
            }
        }
    }

    /// Entries, newest first
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend an entry, evicting the oldest beyond the cap, and persist
    pub fn record(&mut self, item: HistoryItem) -> Result<()> {
        let mut updated = Vec::with_capacity(HISTORY_LIMIT);
        updated.push(item);
        updated.extend(self.items.iter().take(HISTORY_LIMIT - 1).cloned());
        save_json(self.store.as_ref(), HISTORY_KEY, &updated)?;
        self.items = updated;
        Ok(())
    }

    /// Remove every entry. Irreversible.
    pub fn clear(&mut self) -> Result<()> {
        save_json(self.store.as_ref(), HISTORY_KEY, &Vec::<HistoryItem>::new())?;
        self.items.clear();
        tracing::info!("Calculation history cleared");
        Ok(())
    }
}
