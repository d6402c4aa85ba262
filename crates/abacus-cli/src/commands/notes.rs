use abacus_core::services::VaultService;

use crate::commands::common::{format_note_lines, note_to_list_item, NoteListItem};
use crate::error::CliError;

pub fn run_notes_list(vault: &VaultService, as_json: bool) -> Result<(), CliError> {
    let notes = vault.notes()?;

    if as_json {
        let json_items = notes
            .list()
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        println!("No notes yet");
    } else {
        for line in format_note_lines(notes.list()) {
            println!("{line}");
        }
    }

    Ok(())
}
