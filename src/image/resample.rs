//! # Resampling
//!
//! Projects a source [`ImageAsset`] onto a destination canvas.
//!
//! - Identity plans copy pixels 1:1 from the top-left corner.
//! - Shrinking plans use box-filter convolution from [`fast_image_resize`],
//!   i.e. every destination pixel is the area average of the source pixels
//!   it covers. RGBA is averaged premultiplied, so transparent pixels do not
//!   bleed their (black) colour into visible neighbours.

use fast_image_resize as fr;
use image::imageops;

use super::canvas::{ImageAsset, Raster};
use super::geometry::ResizePlan;
use crate::error::pipeline::PipelineError;

/// Fills `destination` from the full extent of `source`.
///
/// # Errors
/// [`PipelineError::Resample`] when the destination has zero area, when
/// the two assets disagree on pixel layout, or when an identity plan is
/// given assets of different sizes.
pub fn resample(
    source: &ImageAsset,
    destination: &mut ImageAsset,
    plan: &ResizePlan,
) -> Result<(), PipelineError> {
    let (dst_w, dst_h) = destination.dimensions();
    if dst_w == 0 || dst_h == 0 {
        return Err(PipelineError::Resample(format!(
            "zero-area target {dst_w}x{dst_h}"
        )));
    }
    if source.alpha_capable() != destination.alpha_capable() {
        return Err(PipelineError::Resample(
            "source and destination pixel layouts differ".into(),
        ));
    }

    if plan.is_identity() {
        copy_exact(source, destination)
    } else {
        shrink(source, destination)
    }
}

fn copy_exact(source: &ImageAsset, destination: &mut ImageAsset) -> Result<(), PipelineError> {
    if source.dimensions() != destination.dimensions() {
        return Err(PipelineError::Resample(format!(
            "copy needs equal sizes, got {:?} -> {:?}",
            source.dimensions(),
            destination.dimensions()
        )));
    }

    match (source.raster(), destination.raster_mut()) {
        (Raster::Rgb(src), Raster::Rgb(dst)) => imageops::replace(dst, src, 0, 0),
        (Raster::Rgba(src), Raster::Rgba(dst)) => imageops::replace(dst, src, 0, 0),
        _ => {
            return Err(PipelineError::Resample(
                "source and destination pixel layouts differ".into(),
            ));
        }
    }
    Ok(())
}

fn shrink(source: &ImageAsset, destination: &mut ImageAsset) -> Result<(), PipelineError> {
    let pixel_type = if source.alpha_capable() {
        fr::PixelType::U8x4
    } else {
        fr::PixelType::U8x3
    };
    let (src_w, src_h) = source.dimensions();
    let (dst_w, dst_h) = destination.dimensions();

    let src_view = fr::images::ImageRef::new(src_w, src_h, source.as_bytes(), pixel_type)
        .map_err(|e| PipelineError::Resample(format!("source buffer: {e}")))?;
    let mut dst_view =
        fr::images::Image::from_slice_u8(dst_w, dst_h, destination.as_bytes_mut(), pixel_type)
            .map_err(|e| PipelineError::Resample(format!("destination buffer: {e}")))?;

    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Box));

    fr::Resizer::new()
        .resize(&src_view, &mut dst_view, Some(&options))
        .map_err(|e| PipelineError::Resample(e.to_string()))
}
