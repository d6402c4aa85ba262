//! Media model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::util::unix_millis_now;

/// A unique identifier for a media item, using UUID v7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaId(Uuid);

impl MediaId {
    /// Create a new unique media ID using UUID v7.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID.
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MediaId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Broad media classification used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Anything that does not declare an `image/` type is treated as video.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.trim().to_ascii_lowercase().starts_with("image/") {
            Self::Image
        } else {
            Self::Video
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(Error::InvalidInput(format!("Unknown media kind: {other}"))),
        }
    }
}

/// A file picked by the user, before it becomes a [`MediaItem`].
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original file name.
    pub name: String,
    /// Declared content type, if the picker supplied one.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    /// Read a file from disk, guessing its content type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| Error::InvalidInput(format!("Not a file: {}", path.display())))?;
        Ok(Self::new(name, None, bytes))
    }

    /// Declared content type, falling back to a guess from the file name.
    #[must_use]
    pub fn resolved_content_type(&self) -> String {
        self.content_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(
                || {
                    mime_guess::from_path(&self.name)
                        .first_or_octet_stream()
                        .essence_str()
                        .to_string()
                },
                str::to_ascii_lowercase,
            )
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A media object held in the blob store. Never mutated after creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique media identifier.
    pub id: MediaId,
    /// Original file name.
    pub name: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Content MIME type.
    pub mime_type: String,
    /// Payload size in bytes.
    pub size_bytes: i64,
    /// Binary payload.
    #[serde(skip)]
    pub blob: Vec<u8>,
    /// Creation timestamp (Unix ms).
    pub created_at: i64,
}

impl MediaItem {
    /// Build a media record from an uploaded file.
    pub fn from_upload(file: UploadedFile) -> Result<Self> {
        let name = file.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "Media file name cannot be empty".to_string(),
            ));
        }

        let mime_type = file.resolved_content_type();
        let size_bytes = i64::try_from(file.bytes.len())
            .map_err(|_| Error::InvalidInput(format!("Media file too large: {name}")))?;

        Ok(Self {
            id: MediaId::new(),
            name,
            kind: MediaKind::from_content_type(&mime_type),
            mime_type,
            size_bytes,
            blob: file.bytes,
            created_at: unix_millis_now(),
        })
    }
}

impl fmt::Debug for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaItem")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_id_parse() {
        let id = MediaId::new();
        let parsed: MediaId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_content_type("IMAGE/JPEG"), MediaKind::Image);
        assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
        assert_eq!(
            MediaKind::from_content_type("application/octet-stream"),
            MediaKind::Video
        );
    }

    #[test]
    fn test_from_upload_uses_declared_type() {
        let file = UploadedFile::new("clip.bin", Some("image/gif".to_string()), vec![1, 2, 3]);
        let item = MediaItem::from_upload(file).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.mime_type, "image/gif");
        assert_eq!(item.size_bytes, 3);
        assert_eq!(item.blob, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_upload_guesses_missing_type() {
        let file = UploadedFile::new("holiday.jpg", None, vec![0; 4]);
        let item = MediaItem::from_upload(file).unwrap();
        assert_eq!(item.mime_type, "image/jpeg");
        assert_eq!(item.kind, MediaKind::Image);

        let file = UploadedFile::new("holiday.mp4", Some("  ".to_string()), vec![0; 4]);
        assert_eq!(MediaItem::from_upload(file).unwrap().kind, MediaKind::Video);
    }

    #[test]
    fn test_from_upload_rejects_blank_name() {
        let file = UploadedFile::new("  ", Some("image/png".to_string()), Vec::new());
        assert!(MediaItem::from_upload(file).is_err());
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        assert_eq!("image".parse::<MediaKind>().unwrap(), MediaKind::Image);
        assert!("audio".parse::<MediaKind>().is_err());
    }
}
