//! Rendering helpers for stored media.

mod display_handle;
mod thumbnail;

pub use display_handle::{DisplayHandle, DisplayHandles};
pub use thumbnail::{generate_thumbnail, Thumbnail, ThumbnailOptions, THUMBNAIL_MIME};
