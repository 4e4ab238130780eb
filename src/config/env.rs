//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with fallback defaults.
//! Each reader has a `*_from` twin that takes a provider closure so the
//! parsing can be tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use image_resize_service::config::env::{read_string, read_u32};
//!
//! let addr = read_string("BIND_ADDR", "0.0.0.0:8080");
//! let limit = read_u32("HTTP_MAX_BODY_MB", 20);
//! ```

/// Reads a non-empty, trimmed string, falling back to `default`.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Like [`read_string`], with a custom provider.
///
/// # Example
/// ```rust
/// use image_resize_service::config::env::read_string_from;
///
/// assert_eq!(read_string_from(|_| Some("  /srv  ".into()), "ROOT", "."), "/srv");
/// assert_eq!(read_string_from(|_| Some("   ".into()), "ROOT", "."), ".");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads an unsigned integer (`u32`), returning `default` if missing or invalid.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Like [`read_u32`], with a custom provider.
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}
