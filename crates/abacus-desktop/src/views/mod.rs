//! Application views
//!
//! One view per router state.

mod calculator;
mod gallery;
mod home;
mod notes;

pub use calculator::CalculatorView;
pub use gallery::GalleryView;
pub use home::HomeView;
pub use notes::NotesView;
