//! # Upload Configuration
//!
//! Locates the folders the service reads from and writes to.
//!
//! Both live directly under a service root:
//! - `Image/`: source tree scanned by the batch endpoint.
//! - `subImage/`: destination for every resized image; also the public
//!   URL prefix returned to clients.
//!
//! # Example
//! ```rust
//! use image_resize_service::config::upload::UploadConfig;
//! use std::path::{Path, PathBuf};
//!
//! let cfg = UploadConfig::new("/srv/resizer");
//!
//! assert_eq!(cfg.source_root(), PathBuf::from("/srv/resizer/Image"));
//! assert_eq!(cfg.dest_root(), Path::new("/srv/resizer/subImage"));
//! assert_eq!(cfg.dest_dir, "subImage");
//! ```
use std::path::PathBuf;

/// Folder scanned by the batch endpoint.
pub const SOURCE_DIR: &str = "Image";
/// Folder receiving resized output.
pub const DEST_DIR: &str = "subImage";

/// Configuration for upload directories.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadConfig {
    /// Service root that both folders are resolved against.
    pub root: PathBuf,
    /// Subdirectory holding batch input.
    pub source_dir: String,
    /// Subdirectory holding resized output.
    pub dest_dir: String,
}

impl UploadConfig {
    /// Uses the fixed `Image/` and `subImage/` folder names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_dir: SOURCE_DIR.into(),
            dest_dir: DEST_DIR.into(),
        }
    }

    pub fn source_root(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    pub fn dest_root(&self) -> PathBuf {
        self.root.join(&self.dest_dir)
    }
}
