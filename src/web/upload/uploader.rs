use std::sync::Arc;

use tracing::{info, warn};

use super::filename::{self, DestinationName};
use super::storage::FileStorage;
use crate::error::upload::UploadError;
use crate::image::mime::{MimeType, classify};
use crate::image::processor::{ImageProcessor, ResizeOpts};
use crate::time::clock::Clock;

/// One image as received from a client.
#[derive(Clone, Copy, Debug)]
pub struct UploadRequest<'a> {
    pub bytes: &'a [u8],
    /// Requested output name; only its sanitized stem is used.
    pub filename: &'a str,
    pub overwrite: bool,
}

/// Where a resized upload ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadOutcome {
    /// Public path, `<prefix>/<file_name>`.
    pub url: String,
    pub name: DestinationName,
    /// Full path reported by the storage backend.
    pub stored_at: String,
    pub mime: MimeType,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
}

/// Validates, resizes and stores single uploads.
#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn FileStorage>,
    image: Arc<dyn ImageProcessor>,
    clock: Arc<dyn Clock>,
    resize: ResizeOpts,
    url_prefix: String,
}

impl UploadService {
    pub fn new(
        storage: Arc<dyn FileStorage>,
        image: Arc<dyn ImageProcessor>,
        clock: Arc<dyn Clock>,
        resize: ResizeOpts,
        url_prefix: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            image,
            clock,
            resize,
            url_prefix: url_prefix.into().trim_matches('/').to_string(),
        }
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Runs one upload end to end.
    ///
    /// The type is sniffed from `req.bytes` before anything touches the
    /// output folder, so rejected uploads never leave files behind. With
    /// `overwrite` the previous file is replaced only once the new bytes are
    /// encoded.
    pub fn upload(&self, req: UploadRequest<'_>) -> Result<UploadOutcome, UploadError> {
        let mime = classify(req.bytes)?;

        self.storage
            .ensure_root()
            .map_err(|e| UploadError::StorageUnavailable {
                dir: self.url_prefix.clone(),
                detail: format!("{e:#}"),
            })?;

        let name = filename::resolve(
            req.filename,
            mime.extension(),
            req.overwrite,
            |candidate| self.storage.exists(candidate),
            self.clock.as_ref(),
        );

        let resized = self.image.resize_same_format(req.bytes, mime, self.resize)?;

        // `save` truncates; an overwrite needs no separate delete.
        let stored_at = self
            .storage
            .save(&name.file_name, &resized.bytes)
            .map_err(|e| UploadError::Save(format!("{e:#}")))?;

        if !self.storage.exists(&name.file_name) {
            warn!(file = %name.file_name, "written file is missing");
            return Err(UploadError::Save(format!(
                "{} missing after write",
                name.file_name
            )));
        }

        let outcome = UploadOutcome {
            url: format!("{}/{}", self.url_prefix, name.file_name),
            stored_at,
            mime,
            width: resized.plan.target_width,
            height: resized.plan.target_height,
            bytes: resized.bytes.len() as u64,
            name,
        };
        info!(
            file = %outcome.name.file_name,
            stem = %outcome.name.stem,
            renamed = outcome.name.renamed,
            path = %outcome.stored_at,
            mime = outcome.mime.essence(),
            width = outcome.width,
            height = outcome.height,
            bytes = outcome.bytes,
            "upload stored"
        );
        Ok(outcome)
    }
}
