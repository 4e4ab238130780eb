//! # Content Sniffing
//!
//! Determines the real image type of a byte buffer from its magic bytes,
//! using the [`infer`] crate. File names and client-declared content types
//! are never consulted.
//!
//! Only three types are accepted; everything else is [`Unrecognized`].
//!
//! # Example
//! ```rust
//! use image_resize_service::image::mime::{classify, MimeType};
//!
//! let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
//! let mime = classify(&png_magic).unwrap();
//! assert_eq!(mime, MimeType::Png);
//! assert_eq!(mime.extension(), ".png");
//! assert!(mime.alpha_capable());
//!
//! assert!(classify(b"plain text").is_err());
//! ```

use std::path::Path;

use thiserror::Error;

/// The accepted raster types.
///
/// The canonical extension, MIME string and alpha capability are all
/// derived from the variant, so they cannot disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MimeType {
    Jpeg,
    Png,
    Webp,
}

impl MimeType {
    /// Canonical MIME string, e.g. `"image/png"`.
    pub fn essence(self) -> &'static str {
        match self {
            MimeType::Jpeg => "image/jpeg",
            MimeType::Png => "image/png",
            MimeType::Webp => "image/webp",
        }
    }

    /// Canonical extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            MimeType::Jpeg => ".jpg",
            MimeType::Png => ".png",
            MimeType::Webp => ".webp",
        }
    }

    /// Whether the format stores a per-pixel alpha channel.
    pub fn alpha_capable(self) -> bool {
        match self {
            MimeType::Jpeg => false,
            MimeType::Png | MimeType::Webp => true,
        }
    }

    /// Maps a sniffed MIME string onto an accepted type.
    pub fn from_essence(essence: &str) -> Option<Self> {
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(MimeType::Jpeg),
            "image/png" => Some(MimeType::Png),
            "image/webp" => Some(MimeType::Webp),
            _ => None,
        }
    }
}

/// Content that does not sniff as one of the accepted types.
///
/// `detected` holds whatever MIME type the sniffer did recognise
/// (e.g. `"image/gif"`), or `None` when nothing matched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized image type: {}", .detected.unwrap_or("unknown"))]
pub struct Unrecognized {
    pub detected: Option<&'static str>,
}

/// Classifies a buffer by its leading bytes.
pub fn classify(bytes: &[u8]) -> Result<MimeType, Unrecognized> {
    let detected = infer::get(bytes).map(|kind| kind.mime_type());
    detected
        .and_then(MimeType::from_essence)
        .ok_or(Unrecognized { detected })
}

/// Classifies a file on disk, reading only the header bytes the sniffer needs.
///
/// Files that cannot be opened are reported as unrecognized.
pub fn classify_path(path: &Path) -> Result<MimeType, Unrecognized> {
    let detected = infer::get_from_path(path)
        .ok()
        .flatten()
        .map(|kind| kind.mime_type());
    detected
        .and_then(MimeType::from_essence)
        .ok_or(Unrecognized { detected })
}
