use std::path::Path;

use abacus_core::models::MediaId;
use abacus_core::services::VaultService;

use crate::commands::common::{format_media_lines, media_to_list_item, MediaListItem};
use crate::error::CliError;

pub async fn run_media_list(vault: &VaultService, as_json: bool) -> Result<(), CliError> {
    let items = vault.list_media().await?;

    if as_json {
        let json_items = items
            .iter()
            .map(media_to_list_item)
            .collect::<Vec<MediaListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if items.is_empty() {
        println!("No photos or videos yet");
    } else {
        for line in format_media_lines(&items) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn parse_media_id(raw: &str) -> Result<MediaId, CliError> {
    raw.trim()
        .parse::<MediaId>()
        .map_err(|_| CliError::InvalidMediaId(raw.to_string()))
}

/// Write one item's payload to `path`, returning the byte count
pub async fn run_media_export(
    vault: &VaultService,
    raw_id: &str,
    path: &Path,
) -> Result<usize, CliError> {
    let id = parse_media_id(raw_id)?;
    let item = vault
        .get_media(&id)
        .await?
        .ok_or_else(|| CliError::MediaNotFound(raw_id.trim().to_string()))?;

    std::fs::write(path, &item.blob)?;
    println!("{}", path.display());
    Ok(item.blob.len())
}
