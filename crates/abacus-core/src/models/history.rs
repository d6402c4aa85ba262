//! Calculation history entries

use serde::{Deserialize, Serialize};

/// Maximum number of history entries kept; older entries are evicted.
pub const HISTORY_LIMIT: usize = 50;

/// One successful evaluation, as shown in the history panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryItem {
    /// Expression as the user entered it, e.g. `2 + 3`
    pub expression: String,
    /// Formatted result, e.g. `5`
    pub result: String,
    /// Evaluation time (Unix ms)
    pub timestamp: i64,
}
