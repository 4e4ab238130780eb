//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Provides a configurable [`CorsLayer`] builder for the resize endpoints.
//!
//! By default any origin may call the service (`Access-Control-Allow-Origin: *`).
//! Setting `CORS_ORIGINS` to a comma-separated list restricts it.
//!
//! Preflight answers from [`CorsLayer`] are `200`; wrap the router in
//! [`preflight_no_content`] to report them as `204 No Content`.
//!
//! # Example
//! ```rust,no_run
//! use axum::{middleware, routing::post, Router};
//! use image_resize_service::config::web::CorsConfig;
//! use image_resize_service::web::cors::{build_cors, preflight_no_content};
//!
//! let cfg = CorsConfig { env: "*".into() };
//!
//! let app: Router = Router::new()
//!     .route("/upload_resize", post(|| async { "ok" }))
//!     .layer(build_cors(&cfg))
//!     .layer(middleware::from_fn(preflight_no_content));
//! ```

use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

/// Parses a comma-separated list of origins.
///
/// Invalid or empty entries are ignored.
fn parse_origins(cors_env: &str) -> Vec<HeaderValue> {
    cors_env
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `POST` and `OPTIONS`.
/// - Allows the `Content-Type` request header.
/// - Any origin when [`CorsConfig::allows_any_origin`], otherwise the listed ones.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(&cors.env))
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Rewrites successful `OPTIONS` answers to `204 No Content`.
pub async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut res = next.run(req).await;
    if is_options && res.status() == StatusCode::OK {
        *res.status_mut() = StatusCode::NO_CONTENT;
    }
    res
}
