//! # Image Processor Implementation (image-rs)
//!
//! Provides the production [`ImageProcessor`], built on the [`image`] crate
//! for decoding/encoding and [`fast_image_resize`] for interpolation.
//!
//! Every call runs the same stages:
//!
//! 1. decode with the format's [`Codec`](super::codec::Codec)
//! 2. [`plan`] the target size
//! 3. [`build`] a destination canvas (transparent for PNG/WEBP)
//! 4. [`resample`] the source onto it
//! 5. encode in the source format
//!
//! Images that already fit still go through all stages, which normalizes
//! their pixel format and strips metadata.
//!
//! # Example
//! ```rust,no_run
//! use image_resize_service::image::image_rs_processor::ImageRsProcessor;
//! use image_resize_service::image::mime::classify;
//! use image_resize_service::image::processor::{ImageProcessor, ResizeOpts};
//!
//! let bytes = std::fs::read("input.png").unwrap();
//! let mime = classify(&bytes).expect("supported type");
//! let out = ImageRsProcessor
//!     .resize_same_format(&bytes, mime, ResizeOpts::default())
//!     .expect("resize ok");
//! std::fs::write(format!("resized{}", mime.extension()), out.bytes).unwrap();
//! ```

use tracing::debug;

use super::canvas::build;
use super::codec::encode;
use super::geometry::plan;
use super::mime::MimeType;
use super::processor::{ImageProcessor, ResizeOpts, ResizedImage};
use super::resample::resample;
use crate::error::pipeline::PipelineError;

/// The default [`ImageProcessor`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageRsProcessor;

impl ImageProcessor for ImageRsProcessor {
    fn resize_same_format(
        &self,
        img_bytes: &[u8],
        mime: MimeType,
        opts: ResizeOpts,
    ) -> Result<ResizedImage, PipelineError> {
        let codec = mime.codec();

        let source = codec.decode(img_bytes)?;
        let (src_w, src_h) = source.dimensions();
        let plan = plan(src_w, src_h, opts.max_w, opts.max_h);

        let mut canvas = build(plan.target_width, plan.target_height, codec.alpha_capable());
        resample(&source, &mut canvas, &plan)?;
        drop(source);

        let bytes = encode(&canvas, mime)?;

        debug!(
            mime = mime.essence(),
            src = %format!("{src_w}x{src_h}"),
            dst = %format!("{}x{}", plan.target_width, plan.target_height),
            bytes = bytes.len(),
            "image resized"
        );

        Ok(ResizedImage { bytes, mime, plan })
    }
}
