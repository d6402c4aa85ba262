//! UI Components
//!
//! Reusable UI components for the desktop application.

mod history_panel;
mod keypad;
mod launcher_tile;
mod media_preview;
mod media_tile;
mod note_card;
mod note_editor;
mod notice_banner;
mod top_bar;

pub use history_panel::HistoryPanel;
pub use keypad::{CalcKey, Keypad};
pub use launcher_tile::LauncherTile;
pub use media_preview::MediaPreview;
pub use media_tile::MediaTile;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use notice_banner::NoticeBanner;
pub use top_bar::TopBar;
