//! Downscaled JPEG previews for the gallery grid.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView};

use crate::{Error, Result};

/// MIME type of every generated thumbnail
pub const THUMBNAIL_MIME: &str = "image/jpeg";

/// Bounds for a grid thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailOptions {
    /// Longest allowed edge in pixels.
    pub max_edge: u32,
    /// JPEG quality, 1-100.
    pub quality: u8,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            max_edge: 320,
            quality: 80,
        }
    }
}

/// Encoded thumbnail and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode an image payload and shrink it to fit a `max_edge` square.
///
/// Aspect ratio is preserved and small images are never enlarged.
pub fn generate_thumbnail(payload: &[u8], options: ThumbnailOptions) -> Result<Thumbnail> {
    if options.max_edge == 0 {
        return Err(Error::InvalidInput(
            "Thumbnail edge must be greater than zero".to_string(),
        ));
    }

    let decoded = image::load_from_memory(payload)
        .map_err(|error| Error::Storage(format!("Cannot decode image payload: {error}")))?;

    let fitted = fit_within(decoded, options.max_edge);
    let (width, height) = fitted.dimensions();

    // JPEG has no alpha channel
    let pixels = fitted.to_rgb8();
    let mut jpeg = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut jpeg, options.quality.clamp(1, 100))
        .encode_image(&pixels)
        .map_err(|error| Error::Storage(format!("Cannot encode thumbnail: {error}")))?;

    Ok(Thumbnail {
        jpeg: jpeg.into_inner(),
        width,
        height,
    })
}

fn fit_within(image: DynamicImage, max_edge: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width.max(height) <= max_edge {
        image
    } else {
        image.thumbnail(max_edge, max_edge)
    }
}
