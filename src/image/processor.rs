//! # Image Processing Abstractions
//!
//! Defines the seam between the HTTP/batch layers and the resize pipeline.
//!
//! This module provides:
//! - [`ResizeOpts`]: the bounding box an image must fit into.
//! - [`ResizedImage`]: encoded output plus the plan that produced it.
//! - [`ImageProcessor`]: a trait so the upload service and batch runner
//!   can be tested against stub backends.
//!
//! # Example
//! ```rust
//! use image_resize_service::error::pipeline::PipelineError;
//! use image_resize_service::image::geometry::plan;
//! use image_resize_service::image::mime::MimeType;
//! use image_resize_service::image::processor::{ImageProcessor, ResizeOpts, ResizedImage};
//!
//! struct Passthrough;
//!
//! impl ImageProcessor for Passthrough {
//!     fn resize_same_format(
//!         &self,
//!         img_bytes: &[u8],
//!         mime: MimeType,
//!         opts: ResizeOpts,
//!     ) -> Result<ResizedImage, PipelineError> {
//!         Ok(ResizedImage {
//!             bytes: img_bytes.to_vec(),
//!             mime,
//!             plan: plan(1, 1, opts.max_w, opts.max_h),
//!         })
//!     }
//! }
//!
//! let out = Passthrough
//!     .resize_same_format(b"abc", MimeType::Png, ResizeOpts::default())
//!     .unwrap();
//! assert_eq!(out.bytes, b"abc");
//! ```

use crate::config::image::{MAX_HEIGHT, MAX_WIDTH};
use crate::error::pipeline::PipelineError;

use super::geometry::ResizePlan;
use super::mime::MimeType;

/// Bounding box for resizing, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOpts {
    pub max_w: u32,
    pub max_h: u32,
}

impl ResizeOpts {
    pub fn new(max_w: u32, max_h: u32) -> Self {
        Self { max_w, max_h }
    }
}

impl Default for ResizeOpts {
    /// The service-wide 1600x1600 box.
    fn default() -> Self {
        Self::new(MAX_WIDTH, MAX_HEIGHT)
    }
}

/// An encoded image ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizedImage {
    pub bytes: Vec<u8>,
    /// Format of `bytes`; always the format of the input.
    pub mime: MimeType,
    pub plan: ResizePlan,
}

/// A backend that shrinks an image to fit a bounding box and re-encodes it
/// in its own format.
pub trait ImageProcessor: Send + Sync {
    /// Decodes `img_bytes` as `mime`, fits it into `opts` and re-encodes it.
    ///
    /// # Errors
    /// A [`PipelineError`] naming the stage that failed.
    fn resize_same_format(
        &self,
        img_bytes: &[u8],
        mime: MimeType,
        opts: ResizeOpts,
    ) -> Result<ResizedImage, PipelineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::geometry::plan;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockImageProcessor {
        calls: Mutex<Vec<(MimeType, u32, u32)>>,
    }

    impl ImageProcessor for MockImageProcessor {
        fn resize_same_format(
            &self,
            img_bytes: &[u8],
            mime: MimeType,
            opts: ResizeOpts,
        ) -> Result<ResizedImage, PipelineError> {
            self.calls
                .lock()
                .unwrap()
                .push((mime, opts.max_w, opts.max_h));
            Ok(ResizedImage {
                bytes: img_bytes.to_vec(),
                mime,
                plan: plan(10, 10, opts.max_w, opts.max_h),
            })
        }
    }

    #[test]
    fn default_opts_are_the_service_bounding_box() {
        assert_eq!(ResizeOpts::default(), ResizeOpts::new(1600, 1600));
    }

    #[test]
    fn trait_object_forwards_arguments() {
        let mock = Arc::new(MockImageProcessor::default());
        let proc_obj: Arc<dyn ImageProcessor> = mock.clone();

        let out = proc_obj
            .resize_same_format(b"bytes", MimeType::Webp, ResizeOpts::new(123, 456))
            .expect("resize ok");
        assert_eq!(out.bytes, b"bytes");
        assert_eq!(out.mime, MimeType::Webp);

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(MimeType::Webp, 123, 456)]);
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_image_processor_is_send_sync() {
        assert_send_sync::<dyn ImageProcessor>();
    }
}
