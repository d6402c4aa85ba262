//! Application services
//!
//! Storage startup, native dialogs and the external browser.

mod dialogs;
mod external;
mod vault;

pub use dialogs::{confirm, show_error};
pub use external::open_external;
pub use vault::open_vault;
