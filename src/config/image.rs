//! # Image Configuration
//!
//! The bounding box every resized image must fit into. Both the upload
//! endpoint and the batch runner share it; it is not configurable at runtime.
//!
//! # Example
//! ```rust
//! use image_resize_service::config::image::{ImageConfig, MAX_WIDTH};
//!
//! let cfg = ImageConfig::default();
//! assert_eq!(cfg.max_width, MAX_WIDTH);
//! assert_eq!(cfg.max_height, 1600);
//! ```

use crate::image::processor::ResizeOpts;

/// Maximum output width in pixels.
pub const MAX_WIDTH: u32 = 1600;
/// Maximum output height in pixels.
pub const MAX_HEIGHT: u32 = 1600;

/// Upper limits for image dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageConfig {
    pub max_width: u32,
    pub max_height: u32,
}

impl ImageConfig {
    /// The bounding box as pipeline options.
    pub fn resize_opts(&self) -> ResizeOpts {
        ResizeOpts::new(self.max_width, self.max_height)
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        }
    }
}
