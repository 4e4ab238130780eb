//! # image_resize_service
//!
//! Shrinks JPEG, PNG and WEBP images to fit a 1600x1600 box and stores them
//! in their original format.
//!
//! Two HTTP entry points share one pipeline:
//! - `POST /upload_resize` resizes a single multipart upload (`web::upload`)
//! - `POST /batch_resize` walks the `Image/` tree into `subImage/` (`web::batch`)
//!
//! The pipeline itself lives in [`image`](crate::image): sniff the type, decode, plan the
//! target size, resample with a box filter and encode again.
//!
//! ## Example usage
//!
//! ```rust,no_run
//! use image_resize_service::config::app::AppConfig;
//! use image_resize_service::web::router::{AppState, build_router};
//!
//! # async fn serve() -> image_resize_service::anyhow::Result<()> {
//! let cfg = AppConfig::from_env();
//! let app = build_router(&cfg, AppState::from_config(&cfg));
//! let listener = tokio::net::TcpListener::bind(&cfg.http.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use axum_extra;
pub use chrono;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod image;
pub mod time;
pub mod web;
