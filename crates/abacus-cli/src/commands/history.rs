use abacus_core::services::VaultService;

use crate::commands::common::{format_history_lines, history_to_list_item, HistoryListItem};
use crate::error::CliError;

pub fn run_history_list(vault: &VaultService, limit: usize, as_json: bool) -> Result<(), CliError> {
    let history = vault.history()?;
    let items = &history.items()[..limit.min(history.len())];

    if as_json {
        let json_items = items
            .iter()
            .map(history_to_list_item)
            .collect::<Vec<HistoryListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if items.is_empty() {
        println!("No calculations yet");
    } else {
        for line in format_history_lines(items) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn run_history_clear(vault: &VaultService, confirmed: bool) -> Result<usize, CliError> {
    if !confirmed {
        return Err(CliError::ConfirmationRequired("clear history"));
    }

    let mut history = vault.history()?;
    let removed = history.len();
    history.clear()?;
    println!("Cleared {removed} calculation(s)");
    Ok(removed)
}
