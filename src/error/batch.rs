use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::api::ErrorBody;

/// Failures that stop a batch run before any item is processed.
///
/// Per-item problems never surface here; they are collected in the report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("Source folder {dir}/ not found")]
    SourceMissing { dir: String },

    #[error("Failed to create {dir} directory")]
    DestUnavailable { dir: String, detail: String },

    #[error("Internal server error")]
    Internal(String),
}

impl BatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            BatchError::SourceMissing { .. } => StatusCode::BAD_REQUEST,
            BatchError::DestUnavailable { .. } | BatchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for BatchError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_folder() {
        let missing = BatchError::SourceMissing { dir: "Image".into() };
        assert_eq!(missing.to_string(), "Source folder Image/ not found");
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let dest = BatchError::DestUnavailable {
            dir: "subImage".into(),
            detail: "denied".into(),
        };
        assert_eq!(dest.to_string(), "Failed to create subImage directory");
        assert_eq!(dest.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
