pub mod calc;
pub mod common;
pub mod completions;
pub mod history;
pub mod media;
pub mod notes;
pub mod reset;
pub mod status;
