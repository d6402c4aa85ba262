use std::path::PathBuf;

use abacus_core::config::AppConfig;
use abacus_core::models::{HistoryItem, MediaItem};
use abacus_core::services::VaultService;
use abacus_core::util::{format_local_date, format_local_time, unix_millis_now};
use abacus_core::Note;
use serde::Serialize;

use crate::error::CliError;

const KIB_BYTES: u64 = 1024;
const MIB_BYTES: u64 = KIB_BYTES * 1024;
const GIB_BYTES: u64 = MIB_BYTES * 1024;

#[derive(Debug, Serialize)]
pub struct HistoryListItem {
    pub expression: String,
    pub result: String,
    pub timestamp: i64,
    pub relative_time: String,
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub updated_at: i64,
    pub relative_time: String,
}

#[derive(Debug, Serialize)]
pub struct MediaListItem {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub created_at: i64,
}

pub async fn open_vault(data_dir: Option<PathBuf>) -> Result<VaultService, CliError> {
    let config = AppConfig::resolve(data_dir);
    tracing::debug!("Opening vault at {}", config.data_dir().display());
    Ok(VaultService::open(&config).await?)
}

pub fn history_to_list_item(item: &HistoryItem) -> HistoryListItem {
    let now_ms = unix_millis_now();
    HistoryListItem {
        expression: item.expression.clone(),
        result: item.result.clone(),
        timestamp: item.timestamp,
        relative_time: format_relative_time(item.timestamp, now_ms),
    }
}

pub fn format_history_lines(items: &[HistoryItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let when = format!(
                "{} {}",
                format_local_date(item.timestamp),
                format_local_time(item.timestamp)
            );
            format!("{when:<16}  {} = {}", item.expression, item.result)
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    let now_ms = unix_millis_now();
    NoteListItem {
        id: note.id.to_string(),
        title: note.display_title().to_string(),
        preview: note_preview(note, 80),
        content: note.content.clone(),
        updated_at: note.updated_at,
        relative_time: format_relative_time(note.updated_at, now_ms),
    }
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now_ms = unix_millis_now();
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let short_id = id.chars().take(13).collect::<String>();
            let title = truncate_chars(note.display_title(), 24);
            let preview = note_preview(note, 40);
            let relative_time = format_relative_time(note.updated_at, now_ms);
            format!("{short_id:<13}  {title:<24}  {preview:<40}  {relative_time}")
        })
        .collect()
}

pub fn media_to_list_item(item: &MediaItem) -> MediaListItem {
    MediaListItem {
        id: item.id.to_string(),
        name: item.name.clone(),
        kind: item.kind.as_str().to_string(),
        mime_type: item.mime_type.clone(),
        size_bytes: item.size_bytes,
        created_at: item.created_at,
    }
}

pub fn format_media_lines(items: &[MediaItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            format!(
                "{}  {:<5}  {:>9}  {}  {}",
                item.id,
                item.kind.as_str(),
                format_size(item.size_bytes),
                format_local_date(item.created_at),
                item.name
            )
        })
        .collect()
}

/// First line of the content, whitespace collapsed and cut to `max_chars`
pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let first_line = note.content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, max_chars)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = text.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

pub fn format_size(size_bytes: i64) -> String {
    let bytes = u64::try_from(size_bytes).unwrap_or(0);

    if bytes < KIB_BYTES {
        format!("{bytes} B")
    } else if bytes < MIB_BYTES {
        format_scaled(bytes, KIB_BYTES, "KB")
    } else if bytes < GIB_BYTES {
        format_scaled(bytes, MIB_BYTES, "MB")
    } else {
        format_scaled(bytes, GIB_BYTES, "GB")
    }
}

fn format_scaled(bytes: u64, unit: u64, suffix: &str) -> String {
    let mut whole = bytes / unit;
    let mut tenth = ((bytes % unit) * 10 + (unit / 2)) / unit;

    if tenth == 10 {
        whole += 1;
        tenth = 0;
    }

    format!("{whole}.{tenth} {suffix}")
}
