//! # Batch Resize Runner
//!
//! Walks the source tree, resizes every recognized image and mirrors the
//! directory layout into the destination folder.
//!
//! Items are processed strictly in walk order (pre-order, unsorted). A
//! failing item is recorded in the report and the walk moves on; only a
//! missing source folder or an uncreatable destination root stops the run.
//! Output names are the source file stem, kept as-is, plus the sniffed
//! extension. There is no collision handling: a later file mapping to the
//! same path (`photo.jpg` and `photo.png` both holding JPEG data) replaces
//! the earlier one.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::upload::UploadConfig;
use crate::error::batch::BatchError;
use crate::image::mime::{MimeType, classify_path};
use crate::image::processor::{ImageProcessor, ResizeOpts};

/// Outcome of one batch run. `resized + skipped == total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Recognized images found in the source tree.
    pub total: usize,
    pub resized: usize,
    pub skipped: usize,
    /// Human-readable messages in walk order.
    pub errors: Vec<String>,
}

/// Batch runner bound to the configured folders.
#[derive(Clone)]
pub struct BatchService {
    image: Arc<dyn ImageProcessor>,
    resize: ResizeOpts,
    source_root: PathBuf,
    dest_root: PathBuf,
}

impl BatchService {
    pub fn new(image: Arc<dyn ImageProcessor>, resize: ResizeOpts, cfg: &UploadConfig) -> Self {
        Self {
            image,
            resize,
            source_root: cfg.source_root(),
            dest_root: cfg.dest_root(),
        }
    }

    pub fn run(&self) -> Result<BatchReport, BatchError> {
        run(
            self.image.as_ref(),
            self.resize,
            &self.source_root,
            &self.dest_root,
        )
    }
}

fn folder_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Resizes every image under `source_root` into `dest_root`.
///
/// # Errors
/// - [`BatchError::SourceMissing`] when `source_root` is not a directory
/// - [`BatchError::DestUnavailable`] when `dest_root` cannot be created
pub fn run(
    image: &dyn ImageProcessor,
    opts: ResizeOpts,
    source_root: &Path,
    dest_root: &Path,
) -> Result<BatchReport, BatchError> {
    if !source_root.is_dir() {
        return Err(BatchError::SourceMissing {
            dir: folder_label(source_root),
        });
    }
    fs::create_dir_all(dest_root).map_err(|e| BatchError::DestUnavailable {
        dir: folder_label(dest_root),
        detail: e.to_string(),
    })?;

    let dest_label = folder_label(dest_root);
    let mut report = BatchReport::default();

    for entry in WalkDir::new(source_root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let at = e
                    .path()
                    .map(|p| relative(p, source_root).display().to_string())
                    .unwrap_or_default();
                warn!(path = %at, error = %e, "walk error");
                report.errors.push(format!("Cannot read directory: {at} - {e}"));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let mime = match classify_path(path) {
            Ok(mime) => mime,
            Err(e) => {
                debug!(path = %path.display(), reason = %e, "not an image, skipped");
                continue;
            }
        };

        report.total += 1;
        let rel = relative(path, source_root);
        match resize_one(image, opts, path, rel, mime, dest_root, &dest_label) {
            Ok(out) => {
                debug!(src = %rel.display(), dst = %out.display(), "resized");
                report.resized += 1;
            }
            Err(msg) => {
                warn!(src = %rel.display(), error = %msg, "item skipped");
                report.errors.push(msg);
                report.skipped += 1;
            }
        }
    }

    info!(
        total = report.total,
        resized = report.resized,
        skipped = report.skipped,
        "batch finished"
    );
    Ok(report)
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn resize_one(
    image: &dyn ImageProcessor,
    opts: ResizeOpts,
    path: &Path,
    rel: &Path,
    mime: MimeType,
    dest_root: &Path,
    dest_label: &str,
) -> Result<PathBuf, String> {
    let rel_dir = rel.parent().unwrap_or(Path::new(""));
    let out_dir = dest_root.join(rel_dir);
    fs::create_dir_all(&out_dir).map_err(|_| {
        format!(
            "Cannot create directory: {}",
            Path::new(dest_label).join(rel_dir).display()
        )
    })?;

    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read: {} - {e}", rel.display()))?;

    let resized = image
        .resize_same_format(&bytes, mime, opts)
        .map_err(|e| format!("Failed to {}: {} - {e}", e.stage(), rel.display()))?;
    drop(bytes);

    let stem = rel.file_stem().unwrap_or_default().to_string_lossy();
    let out = out_dir.join(format!("{stem}{}", mime.extension()));
    fs::write(&out, &resized.bytes)
        .map_err(|e| format!("Failed to save: {} - {e}", rel.display()))?;
    Ok(out)
}
