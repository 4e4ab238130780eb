use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::api::ErrorBody;
use super::pipeline::PipelineError;
use crate::image::mime::Unrecognized;

/// Everything that can stop a single-image upload.
///
/// Validation failures map to `400` and happen before anything is written;
/// environment and pipeline failures map to `500`.
///
/// # Example
/// ```
/// use axum::http::StatusCode;
/// use image_resize_service::error::upload::UploadError;
///
/// assert_eq!(UploadError::MissingImage.status(), StatusCode::BAD_REQUEST);
/// assert_eq!(UploadError::MissingImage.to_string(), "Missing image");
/// ```
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Missing image")]
    MissingImage,

    #[error("Invalid upload")]
    InvalidUpload(String),

    #[error("Unsupported image type")]
    UnsupportedType(#[from] Unrecognized),

    #[error("Failed to create {dir} directory")]
    StorageUnavailable { dir: String, detail: String },

    #[error("{}", pipeline_message(.0))]
    Pipeline(#[from] PipelineError),

    #[error("Failed to save resized image")]
    Save(String),

    #[error("Internal server error")]
    Internal(String),
}

fn pipeline_message(err: &PipelineError) -> String {
    match err {
        PipelineError::Decode(_) => "Failed to read image".into(),
        PipelineError::Resample(_) => "Failed to resize image".into(),
        PipelineError::Encode(_) => "Failed to save resized image".into(),
        PipelineError::Unsupported(mime) => {
            format!("{} not supported on server", mime.essence())
        }
    }
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingImage
            | UploadError::InvalidUpload(_)
            | UploadError::UnsupportedType(_) => StatusCode::BAD_REQUEST,
            UploadError::StorageUnavailable { .. }
            | UploadError::Pipeline(_)
            | UploadError::Save(_)
            | UploadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Internal detail for logs; never sent to clients.
    pub fn detail(&self) -> Option<String> {
        match self {
            UploadError::InvalidUpload(d)
            | UploadError::StorageUnavailable { detail: d, .. }
            | UploadError::Save(d)
            | UploadError::Internal(d) => Some(d.clone()),
            UploadError::Pipeline(e) => Some(e.to_string()),
            UploadError::UnsupportedType(e) => Some(e.to_string()),
            UploadError::MissingImage => None,
        }
    }

    fn body(&self) -> ErrorBody {
        let mime = match self {
            UploadError::UnsupportedType(u) => Some(u.detected.unwrap_or_default().to_string()),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            mime,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::mime::MimeType;

    #[test]
    fn validation_errors_are_client_errors() {
        assert_eq!(UploadError::MissingImage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            UploadError::InvalidUpload("boundary".into()).status(),
            StatusCode::BAD_REQUEST
        );
        let unsupported: UploadError = Unrecognized {
            detected: Some("image/gif"),
        }
        .into();
        assert_eq!(unsupported.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsupported_body_carries_sniffed_mime() {
        let err = UploadError::from(Unrecognized {
            detected: Some("image/gif"),
        });
        let body = err.body();
        assert_eq!(body.error, "Unsupported image type");
        assert_eq!(body.mime.as_deref(), Some("image/gif"));

        let unknown = UploadError::from(Unrecognized { detected: None });
        assert_eq!(unknown.body().mime.as_deref(), Some(""));
    }

    #[test]
    fn pipeline_errors_map_to_stage_messages() {
        let cases = [
            (PipelineError::Decode("x".into()), "Failed to read image"),
            (PipelineError::Resample("x".into()), "Failed to resize image"),
            (PipelineError::Encode("x".into()), "Failed to save resized image"),
            (
                PipelineError::Unsupported(MimeType::Webp),
                "image/webp not supported on server",
            ),
        ];
        for (err, msg) in cases {
            let err = UploadError::from(err);
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.to_string(), msg);
            assert!(err.body().mime.is_none());
        }
    }

    #[test]
    fn storage_errors_name_the_directory() {
        let err = UploadError::StorageUnavailable {
            dir: "subImage".into(),
            detail: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "Failed to create subImage directory");
        assert_eq!(err.detail().as_deref(), Some("permission denied"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
