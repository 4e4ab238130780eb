//! # Format Codecs
//!
//! One [`Codec`] per accepted [`MimeType`]. The pipeline picks a codec with
//! [`MimeType::codec`] and otherwise stays format-agnostic.
//!
//! Encoder settings are fixed:
//!
//! | Format | Setting |
//! |--------|---------|
//! | JPEG   | quality [`JPEG_QUALITY`] |
//! | PNG    | zlib level [`PNG_COMPRESSION_LEVEL`], adaptive filtering |
//! | WEBP   | lossy quality [`WEBP_QUALITY`] (requires the `webp` feature) |

use std::io::Cursor;

#[cfg(feature = "webp")]
use image::RgbaImage;
use image::{
    ExtendedColorType, ImageEncoder, ImageFormat, RgbImage,
    buffer::ConvertBuffer,
    codecs::{
        jpeg::JpegEncoder,
        png::{CompressionType, FilterType, PngEncoder},
    },
};

use super::canvas::{ImageAsset, Raster};
use super::mime::MimeType;
use crate::error::pipeline::PipelineError;

/// JPEG quality on a 0 to 100 scale.
pub const JPEG_QUALITY: u8 = 82;
/// PNG zlib compression level on a 0 to 9 scale.
pub const PNG_COMPRESSION_LEVEL: u8 = 6;
/// WEBP lossy quality on a 0 to 100 scale.
pub const WEBP_QUALITY: f32 = 82.0;

/// Decoding and encoding for a single image format.
pub trait Codec: Send + Sync {
    /// The format this codec handles.
    fn mime(&self) -> MimeType;

    /// Whether decoded assets carry an alpha channel.
    fn alpha_capable(&self) -> bool {
        self.mime().alpha_capable()
    }

    /// Decodes `bytes` into an asset laid out per [`Codec::alpha_capable`].
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, PipelineError>;

    /// Serializes `asset` without modifying it.
    fn encode(&self, asset: &ImageAsset) -> Result<Vec<u8>, PipelineError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JpegCodec;

#[derive(Clone, Copy, Debug, Default)]
pub struct PngCodec;

#[derive(Clone, Copy, Debug, Default)]
pub struct WebpCodec;

static JPEG: JpegCodec = JpegCodec;
static PNG: PngCodec = PngCodec;
static WEBP: WebpCodec = WebpCodec;

impl MimeType {
    /// The codec responsible for this format.
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            MimeType::Jpeg => &JPEG,
            MimeType::Png => &PNG,
            MimeType::Webp => &WEBP,
        }
    }
}

/// Serializes `asset` as `mime` with the fixed encoder settings.
pub fn encode(asset: &ImageAsset, mime: MimeType) -> Result<Vec<u8>, PipelineError> {
    mime.codec().encode(asset)
}

fn decode_as(
    bytes: &[u8],
    format: ImageFormat,
    alpha_capable: bool,
) -> Result<ImageAsset, PipelineError> {
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| PipelineError::Decode(e.to_string()))?;
    Ok(ImageAsset::from_dynamic(img, alpha_capable))
}

#[cfg(feature = "webp")]
fn to_rgba(asset: &ImageAsset) -> RgbaImage {
    match asset.raster() {
        Raster::Rgba(buf) => buf.clone(),
        Raster::Rgb(buf) => buf.convert(),
    }
}

impl Codec for JpegCodec {
    fn mime(&self) -> MimeType {
        MimeType::Jpeg
    }

    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, PipelineError> {
        decode_as(bytes, ImageFormat::Jpeg, self.alpha_capable())
    }

    fn encode(&self, asset: &ImageAsset) -> Result<Vec<u8>, PipelineError> {
        let converted: RgbImage;
        let rgb = match asset.raster() {
            Raster::Rgb(buf) => buf,
            Raster::Rgba(buf) => {
                converted = buf.convert();
                &converted
            }
        };

        let mut out = Vec::new();
        JpegEncoder::new_with_quality(Cursor::new(&mut out), JPEG_QUALITY)
            .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
        Ok(out)
    }
}

impl Codec for PngCodec {
    fn mime(&self) -> MimeType {
        MimeType::Png
    }

    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, PipelineError> {
        decode_as(bytes, ImageFormat::Png, self.alpha_capable())
    }

    fn encode(&self, asset: &ImageAsset) -> Result<Vec<u8>, PipelineError> {
        let (w, h) = asset.dimensions();
        let color = if asset.alpha_capable() {
            ExtendedColorType::Rgba8
        } else {
            ExtendedColorType::Rgb8
        };

        let mut out = Vec::new();
        PngEncoder::new_with_quality(
            Cursor::new(&mut out),
            CompressionType::Level(PNG_COMPRESSION_LEVEL),
            FilterType::Adaptive,
        )
        .write_image(asset.as_bytes(), w, h, color)
        .map_err(|e| PipelineError::Encode(e.to_string()))?;
        Ok(out)
    }
}

impl Codec for WebpCodec {
    fn mime(&self) -> MimeType {
        MimeType::Webp
    }

    #[cfg(feature = "webp")]
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, PipelineError> {
        decode_as(bytes, ImageFormat::WebP, self.alpha_capable())
    }

    #[cfg(not(feature = "webp"))]
    fn decode(&self, _bytes: &[u8]) -> Result<ImageAsset, PipelineError> {
        Err(PipelineError::Unsupported(MimeType::Webp))
    }

    #[cfg(feature = "webp")]
    fn encode(&self, asset: &ImageAsset) -> Result<Vec<u8>, PipelineError> {
        let rgba = to_rgba(asset);
        let encoded = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
            .encode_simple(false, WEBP_QUALITY)
            .map_err(|e| PipelineError::Encode(format!("{e:?}")))?;
        Ok(encoded.to_vec())
    }

    #[cfg(not(feature = "webp"))]
    fn encode(&self, _asset: &ImageAsset) -> Result<Vec<u8>, PipelineError> {
        Err(PipelineError::Unsupported(MimeType::Webp))
    }
}
