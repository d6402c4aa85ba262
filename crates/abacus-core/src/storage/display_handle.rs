//! Transient display handles for rendering stored media.
//!
//! A [`DisplayHandle`] is the renderable form of a media payload (a `data:`
//! URI). Handles are issued by a [`DisplayHandles`] pool that counts how many
//! are alive. A handle is released exactly once, when it is dropped.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

use super::thumbnail::{generate_thumbnail, ThumbnailOptions, THUMBNAIL_MIME};
use crate::models::{MediaId, MediaItem, MediaKind};

/// Pool issuing display handles and tracking the live ones
#[derive(Debug, Clone, Default)]
pub struct DisplayHandles {
    live: Arc<AtomicUsize>,
}

impl DisplayHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle rendering the full payload of `item`.
    pub fn acquire(&self, item: &MediaItem) -> DisplayHandle {
        self.issue(item.id, &item.mime_type, &item.blob)
    }

    /// Handle suited for a grid cell.
    ///
    /// Images are downscaled; videos and images that cannot be decoded fall
    /// back to the full payload.
    pub fn acquire_thumbnail(&self, item: &MediaItem, options: ThumbnailOptions) -> DisplayHandle {
        if item.kind == MediaKind::Image {
            match generate_thumbnail(&item.blob, options) {
                Ok(thumbnail) => {
                    return self.issue(item.id, THUMBNAIL_MIME, &thumbnail.jpeg);
                }
                Err(error) => {
                    tracing::debug!("Using full payload for {}: {error}", item.id);
                }
            }
        }
        self.acquire(item)
    }

    /// Number of handles issued and not yet released
    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    fn issue(&self, media_id: MediaId, mime_type: &str, bytes: &[u8]) -> DisplayHandle {
        let encoded = BASE64_STANDARD.encode(bytes);
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!("Acquired display handle for {media_id} ({live} live)");
        DisplayHandle {
            media_id,
            uri: format!("data:{mime_type};base64,{encoded}"),
            live: Arc::clone(&self.live),
        }
    }
}

/// Renderable reference to a media payload, released on drop
pub struct DisplayHandle {
    media_id: MediaId,
    uri: String,
    live: Arc<AtomicUsize>,
}

impl DisplayHandle {
    /// Media item this handle renders
    pub const fn media_id(&self) -> MediaId {
        self.media_id
    }

    /// URI usable as an `img`/`video` source
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Drop for DisplayHandle {
    fn drop(&mut self) {
        let remaining = self.live.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        tracing::trace!(
            "Released display handle for {} ({remaining} live)",
            self.media_id
        );
    }
}

impl fmt::Debug for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayHandle")
            .field("media_id", &self.media_id)
            .field("uri_len", &self.uri.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UploadedFile;
    use std::io::Cursor;

    fn item(name: &str, content_type: &str, bytes: Vec<u8>) -> MediaItem {
        MediaItem::from_upload(UploadedFile::new(
            name,
            Some(content_type.to_string()),
            bytes,
        ))
        .unwrap()
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        let mut cursor = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(image)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        cursor.into_inner()
    }

    #[test]
    fn handles_are_released_exactly_once_on_drop() {
        let pool = DisplayHandles::new();
        let video = item("clip.mp4", "video/mp4", vec![1, 2, 3]);

        let first = pool.acquire(&video);
        let second = pool.acquire(&video);
        assert_eq!(pool.live_count(), 2);

        drop(first);
        assert_eq!(pool.live_count(), 1);
        drop(second);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn handle_uri_embeds_payload() {
        let pool = DisplayHandles::new();
        let video = item("clip.mp4", "video/mp4", b"abc".to_vec());

        let handle = pool.acquire(&video);
        assert_eq!(handle.uri(), "data:video/mp4;base64,YWJj");
        assert_eq!(handle.media_id(), video.id);
    }

    #[test]
    fn thumbnail_handle_downscales_images() {
        let pool = DisplayHandles::new();
        let photo = item("photo.png", "image/png", png(640, 480));

        let full = pool.acquire(&photo);
        let thumb = pool.acquire_thumbnail(&photo, ThumbnailOptions::default());
        assert!(thumb.uri().starts_with("data:image/jpeg;base64,"));
        assert_ne!(thumb.uri(), full.uri());
        assert_eq!(pool.live_count(), 2);
    }

    #[test]
    fn thumbnail_handle_falls_back_for_undecodable_images() {
        let pool = DisplayHandles::new();
        let broken = item("broken.png", "image/png", b"garbage".to_vec());

        let handle = pool.acquire_thumbnail(&broken, ThumbnailOptions::default());
        assert!(handle.uri().starts_with("data:image/png;base64,"));
        assert_eq!(pool.live_count(), 1);
    }
}
