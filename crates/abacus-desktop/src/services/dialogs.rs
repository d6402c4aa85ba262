//! Native message dialogs

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

/// Ask a yes/no question; anything but an explicit yes counts as no.
pub async fn confirm(title: &str, description: &str) -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;
    matches!(result, MessageDialogResult::Yes)
}

/// Report a failed operation to the user.
pub async fn show_error(description: &str) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Something went wrong")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
