//! # Raster Assets
//!
//! [`ImageAsset`] is the in-memory raster passed between pipeline stages.
//! Alpha-capable assets are stored as RGBA, everything else as RGB, so the
//! alpha flag always matches the pixel layout.

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Pixel storage of an [`ImageAsset`].
#[derive(Clone, Debug, PartialEq)]
pub enum Raster {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

/// A decoded raster owned by a single pipeline invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageAsset {
    raster: Raster,
}

impl ImageAsset {
    /// Normalizes a decoded image into the layout dictated by `alpha_capable`.
    ///
    /// Formats without alpha drop the channel here; alpha-capable formats
    /// gain an opaque one if the source had none.
    pub fn from_dynamic(img: DynamicImage, alpha_capable: bool) -> Self {
        let raster = if alpha_capable {
            Raster::Rgba(img.into_rgba8())
        } else {
            Raster::Rgb(img.into_rgb8())
        };
        Self { raster }
    }

    pub fn width(&self) -> u32 {
        match &self.raster {
            Raster::Rgb(buf) => buf.width(),
            Raster::Rgba(buf) => buf.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.raster {
            Raster::Rgb(buf) => buf.height(),
            Raster::Rgba(buf) => buf.height(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn alpha_capable(&self) -> bool {
        matches!(self.raster, Raster::Rgba(_))
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }

    /// Raw interleaved samples (3 or 4 bytes per pixel).
    pub fn as_bytes(&self) -> &[u8] {
        match &self.raster {
            Raster::Rgb(buf) => buf.as_raw().as_slice(),
            Raster::Rgba(buf) => buf.as_raw().as_slice(),
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match &mut self.raster {
            Raster::Rgb(buf) => &mut **buf,
            Raster::Rgba(buf) => &mut **buf,
        }
    }
}

/// Allocates a destination canvas.
///
/// Alpha-capable canvases start fully transparent, so any region the
/// resampler does not cover stays transparent. Other canvases are solid black.
///
/// # Example
/// ```
/// use image_resize_service::image::canvas::build;
///
/// let canvas = build(4, 2, true);
/// assert_eq!(canvas.dimensions(), (4, 2));
/// assert!(canvas.alpha_capable());
/// assert!(canvas.as_bytes().iter().all(|&b| b == 0));
/// ```
pub fn build(width: u32, height: u32, alpha_capable: bool) -> ImageAsset {
    let raster = if alpha_capable {
        Raster::Rgba(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
    } else {
        Raster::Rgb(RgbImage::from_pixel(width, height, Rgb([0, 0, 0])))
    };
    ImageAsset { raster }
}
