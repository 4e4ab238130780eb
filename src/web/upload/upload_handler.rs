//! # Single Image Upload Handler
//!
//! `POST /upload_resize`: accepts one image as `multipart/form-data`,
//! shrinks it to the bounding box and stores it in the output folder.
//!
//! ## Form fields
//! - `image` (file, required)
//! - `filename` (text, optional): output name; defaults to the uploaded
//!   file's own name when the field is absent. A blank value is kept and
//!   sanitizes to `image`.
//! - `overwrite` (text, optional): `"1"` replaces an existing file of the
//!   same name instead of picking a fresh one
//!
//! ## Responses
//! - `200 {"success":true,"url":"subImage/<name>"}`
//! - `400 {"error":"..."}` for a missing or unreadable upload, and
//!   `400 {"error":"Unsupported image type","mime":"..."}` for other types
//! - `500 {"error":"..."}` when the folder, the pipeline or the write fails
//!
//! ## Example
//! ```rust,ignore
//! use axum::{Router, routing::post, Extension};
//! use std::sync::Arc;
//! use image_resize_service::web::upload::upload_handler::upload_handler;
//!
//! let app = Router::new()
//!     .route("/upload_resize", post(upload_handler))
//!     .layer(Extension(upload_service));
//! ```

use std::sync::Arc;

use axum::{
    Extension, Json,
    body::Bytes,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Multipart, multipart::MultipartRejection};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::upload::UploadError;
use crate::web::upload::uploader::{UploadRequest, UploadService};

/// JSON body returned after a successful upload.
#[derive(Debug, Serialize)]
struct UploadResp {
    success: bool,
    /// Public path of the stored file, e.g. `subImage/cat.png`.
    url: String,
}

/// Fields collected from the multipart body.
#[derive(Debug, Default)]
struct UploadForm {
    image: Option<Bytes>,
    original_name: Option<String>,
    filename: Option<String>,
    overwrite: bool,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut form = UploadForm::default();
        let invalid = |e: axum_extra::extract::multipart::MultipartError| {
            UploadError::InvalidUpload(e.body_text())
        };

        while let Some(field) = multipart.next_field().await.map_err(invalid)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    form.original_name = field.file_name().map(str::to_string);
                    form.image = Some(field.bytes().await.map_err(invalid)?);
                }
                "filename" => form.filename = Some(field.text().await.map_err(invalid)?),
                "overwrite" => form.overwrite = field.text().await.map_err(invalid)?.trim() == "1",
                _ => {}
            }
        }
        Ok(form)
    }

    /// A `filename` field, even a blank one, wins over the uploaded file's name.
    fn requested_name(&self) -> String {
        self.filename
            .as_deref()
            .or(self.original_name.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Axum handler for `POST /upload_resize`.
///
/// The pipeline is CPU bound, so it runs on the blocking pool and the
/// handler awaits it before answering.
pub async fn upload_handler(
    Extension(upload_svc): Extension<Arc<UploadService>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match handle(upload_svc, multipart).await {
        Ok(url) => Json(UploadResp { success: true, url }).into_response(),
        Err(e) => {
            warn!(
                status = e.status().as_u16(),
                error = %e,
                detail = %e.detail().unwrap_or_default(),
                "upload rejected"
            );
            e.into_response()
        }
    }
}

async fn handle(
    upload_svc: Arc<UploadService>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, UploadError> {
    let multipart = multipart.map_err(|e| UploadError::InvalidUpload(e.body_text()))?;
    let form = UploadForm::read(multipart).await?;

    let requested = form.requested_name();
    let overwrite = form.overwrite;
    let data = match form.image {
        Some(data) if !data.is_empty() => data,
        _ => return Err(UploadError::MissingImage),
    };
    info!(bytes = data.len(), requested = %requested, overwrite, "upload received");

    let outcome = tokio::task::spawn_blocking(move || {
        upload_svc.upload(UploadRequest {
            bytes: &data,
            filename: &requested,
            overwrite,
        })
    })
    .await
    .map_err(|e| UploadError::Internal(e.to_string()))??;

    Ok(outcome.url)
}
