//! # Destination File Names
//!
//! Turns a client-supplied name into a safe file name inside the output
//! folder.
//!
//! Sanitization runs in this order:
//! 1. strip `\ / : * ? " < > |`
//! 2. whitespace runs become `_`
//! 3. dot runs become a single `.`
//! 4. drop everything from the last `.` (any extension the client typed)
//! 5. strip characters outside `[A-Za-z0-9_-]`
//! 6. fall back to `image` when nothing is left
//! 7. keep at most 40 characters
//!
//! The extension always comes from the sniffed type, never from the client.
//!
//! # Example
//! ```rust
//! use image_resize_service::web::upload::filename::sanitize_stem;
//!
//! assert_eq!(sanitize_stem("My Photo!!.jpg"), "My_Photo");
//! assert_eq!(sanitize_stem("summer/beach 01.PNG"), "summerbeach_01");
//! assert_eq!(sanitize_stem("???"), "image");
//! ```

use chrono::NaiveDateTime;

use crate::time::clock::Clock;

/// Longest stem kept after sanitization.
pub const MAX_STEM_LEN: usize = 40;
/// Stem used when sanitization leaves nothing.
pub const FALLBACK_STEM: &str = "image";

const FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// The resolved output file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationName {
    /// Sanitized stem, without any collision suffix.
    pub stem: String,
    /// Final file name including the extension.
    pub file_name: String,
    /// `true` when a timestamp/random suffix was appended to avoid a collision.
    pub renamed: bool,
}

/// Applies the sanitization steps listed in the module docs.
pub fn sanitize_stem(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    let stripped = if stripped.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stripped
    };

    let underscored = collapse_runs(&stripped, char::is_whitespace, '_');
    let dotted = collapse_runs(&underscored, |c| c == '.', '.');

    let stem = match dotted.rfind('.') {
        Some(pos) => &dotted[..pos],
        None => dotted.as_str(),
    };

    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(MAX_STEM_LEN)
        .collect();

    if cleaned.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        cleaned
    }
}

fn collapse_runs(input: &str, is_run: impl Fn(char) -> bool, replacement: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if is_run(c) {
            if !in_run {
                out.push(replacement);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Builds `stem_<YYYYMMDD_HHMMSS>_<suffix><ext>`.
pub fn collision_name(stem: &str, ext: &str, at: NaiveDateTime, suffix: &str) -> String {
    format!("{stem}_{}_{suffix}{ext}", at.format("%Y%m%d_%H%M%S"))
}

/// Six lowercase hex digits from three random bytes.
fn random_suffix() -> String {
    let bytes: [u8; 3] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Resolves the output name for `raw` with extension `ext` (e.g. `".png"`).
///
/// - `overwrite == true`: always `stem + ext`; the caller replaces any
///   existing file.
/// - `overwrite == false` and `exists(stem + ext)`: a timestamp and random
///   suffix are appended so the earlier file is kept.
pub fn resolve(
    raw: &str,
    ext: &str,
    overwrite: bool,
    exists: impl Fn(&str) -> bool,
    clock: &dyn Clock,
) -> DestinationName {
    let stem = sanitize_stem(raw);
    let plain = format!("{stem}{ext}");

    if overwrite || !exists(&plain) {
        return DestinationName {
            stem,
            file_name: plain,
            renamed: false,
        };
    }

    let file_name = collision_name(&stem, ext, clock.now(), &random_suffix());
    DestinationName {
        stem,
        file_name,
        renamed: true,
    }
}
