//! # Resize Geometry
//!
//! Computes how a source raster maps into a bounding box while keeping its
//! aspect ratio. Images are only ever shrunk.

/// The outcome of fitting a source size into a bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizePlan {
    pub source_width: u32,
    pub source_height: u32,
    pub target_width: u32,
    pub target_height: u32,
    /// `min(max_w / w, max_h / h, 1.0)`.
    pub scale: f64,
}

impl ResizePlan {
    /// `true` when the target equals the source and no interpolation is needed.
    pub fn is_identity(&self) -> bool {
        self.scale >= 1.0
    }
}

/// Fits `src_w` x `src_h` into `max_w` x `max_h`.
///
/// Zero source dimensions are clamped to 1 so the ratio is always defined.
/// Target dimensions are floored, so a very thin image can plan a
/// zero-area target; the resampler rejects that.
///
/// # Example
/// ```
/// use image_resize_service::image::geometry::plan;
///
/// let p = plan(3200, 1600, 1600, 1600);
/// assert_eq!((p.target_width, p.target_height), (1600, 800));
/// assert_eq!(p.scale, 0.5);
///
/// let small = plan(640, 480, 1600, 1600);
/// assert!(small.is_identity());
/// assert_eq!((small.target_width, small.target_height), (640, 480));
/// ```
pub fn plan(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> ResizePlan {
    let w = src_w.max(1);
    let h = src_h.max(1);

    let scale = (max_w as f64 / w as f64)
        .min(max_h as f64 / h as f64)
        .min(1.0);

    ResizePlan {
        source_width: w,
        source_height: h,
        target_width: (w as f64 * scale).floor() as u32,
        target_height: (h as f64 * scale).floor() as u32,
        scale,
    }
}
