use abacus_core::services::VaultService;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct VaultStatus {
    pub data_dir: Option<String>,
    pub passcode_set: bool,
    pub history_entries: usize,
    pub notes: usize,
    pub media_items: usize,
}

pub async fn collect_status(vault: &VaultService) -> Result<VaultStatus, CliError> {
    Ok(VaultStatus {
        data_dir: vault.data_dir().map(|dir| dir.display().to_string()),
        passcode_set: vault.passcode_gate()?.is_set(),
        history_entries: vault.history()?.len(),
        notes: vault.notes()?.len(),
        media_items: vault.media_count().await?,
    })
}

pub fn format_status_lines(status: &VaultStatus) -> Vec<String> {
    let location = status.data_dir.as_deref().unwrap_or("(in memory)");
    let passcode = if status.passcode_set { "set" } else { "not set" };
    vec![
        format!("Data directory: {location}"),
        format!("Passcode:       {passcode}"),
        format!("History:        {}", status.history_entries),
        format!("Notes:          {}", status.notes),
        format!("Media:          {}", status.media_items),
    ]
}

pub async fn run_status(vault: &VaultService, as_json: bool) -> Result<(), CliError> {
    let status = collect_status(vault).await?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        for line in format_status_lines(&status) {
            println!("{line}");
        }
    }
    Ok(())
}
