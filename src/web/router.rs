//! # HTTP Router
//!
//! Assembles the service:
//!
//! | Route | Methods | Handler |
//! |-------|---------|---------|
//! | `/upload_resize` | `POST`, `OPTIONS` | [`upload_handler`] |
//! | `/batch_resize` | `POST`, `OPTIONS` | [`batch_handler`] |
//! | `/subImage/*` | `GET` | resized files, read-only |
//!
//! Other methods on the resize routes get `405`, unknown paths `404`, both
//! with a JSON `error` body. Every response passes through the CORS layer.

use std::sync::Arc;

use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{MethodRouter, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::app::AppConfig;
use crate::image::image_rs_processor::ImageRsProcessor;
use crate::image::processor::ImageProcessor;
use crate::time::system_clock::SystemClock;
use crate::web::batch::{batch_handler, runner::BatchService};
use crate::web::cors::{build_cors, preflight_no_content};
use crate::web::fallback::{method_not_allowed, no_content, not_found};
use crate::web::upload::{
    local_storage::LocalFileStorage, upload_handler::upload_handler, uploader::UploadService,
};

/// Services shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub upload: Arc<UploadService>,
    pub batch: Arc<BatchService>,
}

impl AppState {
    /// Production wiring: local folders, the `image`-based pipeline and the
    /// system clock.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let image: Arc<dyn ImageProcessor> = Arc::new(ImageRsProcessor);
        let resize = cfg.image.resize_opts();

        let upload = UploadService::new(
            Arc::new(LocalFileStorage::new(cfg.upload.dest_root())),
            image.clone(),
            Arc::new(SystemClock),
            resize,
            cfg.upload.dest_dir.clone(),
        );
        let batch = BatchService::new(image, resize, &cfg.upload);

        Self {
            upload: Arc::new(upload),
            batch: Arc::new(batch),
        }
    }
}

fn resize_route(route: MethodRouter) -> MethodRouter {
    route.options(no_content).fallback(method_not_allowed)
}

/// Builds the application router.
pub fn build_router(cfg: &AppConfig, state: AppState) -> Router {
    let public_dir = format!("/{}", cfg.upload.dest_dir);

    Router::new()
        .route("/upload_resize", resize_route(post(upload_handler)))
        .route("/batch_resize", resize_route(post(batch_handler)))
        .nest_service(&public_dir, ServeDir::new(cfg.upload.dest_root()))
        .fallback(not_found)
        .layer(Extension(state.upload))
        .layer(Extension(state.batch))
        .layer(DefaultBodyLimit::max(cfg.http.max_body_bytes))
        .layer(build_cors(&cfg.cors))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(preflight_no_content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::path::Path;
    use tower::ServiceExt;

    use crate::config::{
        image::ImageConfig,
        upload::UploadConfig,
        web::{CorsConfig, HttpConfig},
    };
    use crate::web::upload::upload_handler::tests::{multipart_request, png_bytes};

    fn config(root: &Path) -> AppConfig {
        AppConfig {
            http: HttpConfig {
                bind_addr: "127.0.0.1:0".into(),
                max_body_bytes: 2 * 1024 * 1024,
            },
            cors: CorsConfig { env: "".into() },
            upload: UploadConfig::new(root),
            image: ImageConfig::default(),
        }
    }

    fn app(root: &Path) -> Router {
        let cfg = config(root);
        build_router(&cfg, AppState::from_config(&cfg))
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_of(res: Response) -> Value {
        let body = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn plain_options_is_no_content() {
        let tmp = tempfile::tempdir().unwrap();
        for uri in ["/upload_resize", "/batch_resize"] {
            let res = app(tmp.path()).oneshot(request("OPTIONS", uri)).await.unwrap();
            assert_eq!(res.status(), StatusCode::NO_CONTENT, "{uri}");
            assert_eq!(
                res.headers()
                    .get("access-control-allow-origin")
                    .and_then(|v| v.to_str().ok()),
                Some("*")
            );
        }
    }

    #[tokio::test]
    async fn preflight_is_no_content() {
        let tmp = tempfile::tempdir().unwrap();
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/upload_resize")
            .header("Origin", "http://client.example")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap();

        let res = app(tmp.path()).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.headers().contains_key("access-control-allow-methods"));
    }

    #[tokio::test]
    async fn other_methods_are_rejected_with_json() {
        let tmp = tempfile::tempdir().unwrap();
        for (method, uri) in [("GET", "/upload_resize"), ("PUT", "/batch_resize")] {
            let res = app(tmp.path()).oneshot(request(method, uri)).await.unwrap();
            assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert!(res.headers().contains_key("access-control-allow-origin"));
            assert_eq!(json_of(res).await["error"], "Method not allowed");
        }
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let res = app(tmp.path()).oneshot(request("GET", "/nope")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_of(res).await["error"], "Not found");
    }

    #[tokio::test]
    async fn uploaded_file_is_served_from_returned_url() {
        let tmp = tempfile::tempdir().unwrap();
        let router = app(tmp.path());

        let png = png_bytes(2000, 500);
        let res = router
            .clone()
            .oneshot(multipart_request("/upload_resize", &[("image", Some("wide.png"), &png)]))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let url = json_of(res).await["url"].as_str().unwrap().to_string();
        assert_eq!(url, "subImage/wide.png");

        let res = router
            .oneshot(request("GET", &format!("/{url}")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let served = image::load_from_memory(&body).unwrap();
        assert_eq!((served.width(), served.height()), (1600, 400));
    }

    #[tokio::test]
    async fn batch_without_source_folder_is_bad_request() {
        let tmp = tempfile::tempdir().unwrap();
        let res = app(tmp.path())
            .oneshot(request("POST", "/batch_resize"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(res).await["error"], "Source folder Image/ not found");
    }
}
