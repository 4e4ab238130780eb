//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for the service: HTTP listener,
//! CORS, folder layout and the image bounding box.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `BIND_ADDR` | Listener address | `"0.0.0.0:8080"` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `20` |
//! | `CORS_ORIGINS` | Allowed origins, comma-separated; empty or `*` = any | `""` |
//! | `SERVICE_ROOT` | Directory containing `Image/` and `subImage/` | `"."` |
//!
//! The bounding box and encoder settings are compile-time constants.
//!
//! # Example
//! ```rust,no_run
//! use image_resize_service::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("serving {:?} on {}", cfg.upload.dest_root(), cfg.http.bind_addr);
//! ```

use std::env;

use crate::config::{
    env::{read_string, read_u32},
    image::ImageConfig,
    upload::UploadConfig,
    web::{CorsConfig, HttpConfig},
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_BODY_MB: u32 = 20;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listener configuration.
    pub http: HttpConfig,
    /// Cross-Origin Resource Sharing configuration.
    pub cors: CorsConfig,
    /// Source and destination folders.
    pub upload: UploadConfig,
    /// Bounding box shared by both endpoints.
    pub image: ImageConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let max_body_bytes = env::var("HTTP_MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| {
                (read_u32("HTTP_MAX_BODY_MB", DEFAULT_MAX_BODY_MB) as usize) * 1024 * 1024
            });

        AppConfig {
            http: HttpConfig {
                bind_addr: read_string("BIND_ADDR", DEFAULT_BIND_ADDR),
                max_body_bytes,
            },
            cors: CorsConfig {
                env: env::var("CORS_ORIGINS").unwrap_or_default(),
            },
            upload: UploadConfig::new(read_string("SERVICE_ROOT", ".")),
            image: ImageConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_unset() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("BIND_ADDR", None::<&str>),
                ("HTTP_MAX_BODY_BYTES", None),
                ("HTTP_MAX_BODY_MB", None),
                ("CORS_ORIGINS", None),
                ("SERVICE_ROOT", None),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.http.bind_addr, DEFAULT_BIND_ADDR);
                assert_eq!(cfg.http.max_body_bytes, 20 * 1024 * 1024);
                assert!(cfg.cors.allows_any_origin());
                assert_eq!(cfg.upload.root, PathBuf::from("."));
                assert_eq!(cfg.image, ImageConfig::default());
            },
        );
    }

    #[test]
    fn env_overrides_are_read() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("BIND_ADDR", Some("127.0.0.1:9999")),
                ("HTTP_MAX_BODY_MB", Some("3")),
                ("HTTP_MAX_BODY_BYTES", None),
                ("CORS_ORIGINS", Some("https://a.example")),
                ("SERVICE_ROOT", Some("/srv/resizer")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.http.bind_addr, "127.0.0.1:9999");
                assert_eq!(cfg.http.max_body_bytes, 3 * 1024 * 1024);
                assert!(!cfg.cors.allows_any_origin());
                assert_eq!(
                    cfg.upload.dest_root(),
                    PathBuf::from("/srv/resizer/subImage")
                );
            },
        );
    }

    #[test]
    fn body_bytes_take_precedence_over_megabytes() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("HTTP_MAX_BODY_BYTES", Some("1234")),
                ("HTTP_MAX_BODY_MB", Some("9")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.http.max_body_bytes, 1234);
            },
        );
    }
}
