//! # HTTP and CORS Configuration
//!
//! Defines configuration structures for the HTTP listener and
//! CORS (Cross-Origin Resource Sharing) behavior.
//!
//! These are included in [`AppConfig`](crate::config::app::AppConfig).
//!
//! # Examples
//! ```rust
//! use image_resize_service::config::web::{CorsConfig, HttpConfig};
//!
//! let http = HttpConfig {
//!     bind_addr: "127.0.0.1:8080".into(),
//!     max_body_bytes: 20 * 1024 * 1024,
//! };
//! let cors = CorsConfig { env: "*".into() };
//!
//! assert!(http.max_body_bytes > 1_000_000);
//! assert!(cors.allows_any_origin());
//! ```

/// HTTP listener configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    /// Socket address the server binds to, e.g. `"0.0.0.0:8080"`.
    pub bind_addr: String,
    /// Upper limit on request bodies; multipart uploads larger than this are rejected.
    pub max_body_bytes: usize,
}

/// CORS configuration.
///
/// `env` is a comma-separated origin list. Empty or `*` means any origin,
/// which is the service default.
#[derive(Clone, Debug, PartialEq)]
pub struct CorsConfig {
    pub env: String,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        let trimmed = self.env.trim();
        trimmed.is_empty() || trimmed == "*"
    }
}
