//! `POST /batch_resize`: resizes the whole `Image/` tree into `subImage/`.
//!
//! Responds with `{"success":true,"total":n,"resized":n,"skipped":n,"errors":[...]}`
//! once every item has been handled. Per-item failures are part of that
//! body; only a missing source or an unusable destination turns into an
//! error status.

use std::sync::Arc;

use axum::{
    Extension, Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{info, warn};

use super::runner::{BatchReport, BatchService};
use crate::error::batch::BatchError;

#[derive(Debug, Serialize)]
struct BatchResp {
    success: bool,
    #[serde(flatten)]
    report: BatchReport,
}

pub async fn batch_handler(Extension(batch): Extension<Arc<BatchService>>) -> Response {
    info!("batch requested");
    let result = tokio::task::spawn_blocking(move || batch.run())
        .await
        .map_err(|e| BatchError::Internal(e.to_string()))
        .and_then(|r| r);

    match result {
        Ok(report) => Json(BatchResp {
            success: true,
            report,
        })
        .into_response(),
        Err(e) => {
            warn!(status = e.status().as_u16(), error = %e, "batch rejected");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::upload::UploadConfig;
    use crate::image::image_rs_processor::ImageRsProcessor;
    use crate::image::processor::ResizeOpts;
    use crate::web::upload::upload_handler::tests::png_bytes;

    fn build_router(cfg: &UploadConfig) -> Router {
        let svc = BatchService::new(Arc::new(ImageRsProcessor), ResizeOpts::new(8, 8), cfg);
        Router::new()
            .route("/batch_resize", post(batch_handler))
            .layer(Extension(Arc::new(svc)))
    }

    async fn call(app: Router) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/batch_resize")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn reports_counts_for_the_source_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = UploadConfig::new(tmp.path());
        std::fs::create_dir_all(cfg.source_root().join("sub")).unwrap();
        std::fs::write(cfg.source_root().join("a.png"), png_bytes(20, 10)).unwrap();
        std::fs::write(cfg.source_root().join("sub/b.png"), png_bytes(4, 4)).unwrap();
        std::fs::write(cfg.source_root().join("readme.md"), b"# hi").unwrap();

        let (status, json) = call(build_router(&cfg)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 2);
        assert_eq!(json["resized"], 2);
        assert_eq!(json["skipped"], 0);
        assert_eq!(json["errors"], Value::Array(vec![]));
        assert!(cfg.dest_root().join("sub/b.png").is_file());
    }

    #[tokio::test]
    async fn missing_source_is_a_bad_request() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = UploadConfig::new(tmp.path());

        let (status, json) = call(build_router(&cfg)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Source folder Image/ not found");
        assert!(json.get("success").is_none());
    }
}
