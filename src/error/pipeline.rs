use thiserror::Error;

use crate::image::mime::MimeType;

/// A failure raised by one stage of the resize pipeline.
///
/// Each variant names the stage that failed so callers can report it
/// (the batch runner turns these into per-item messages, the upload
/// endpoint into a `500` body).
///
/// # Example
/// ```
/// use image_resize_service::error::pipeline::PipelineError;
///
/// let err = PipelineError::Decode("truncated header".into());
/// assert_eq!(err.to_string(), "decode failed: truncated header");
/// assert_eq!(err.stage(), "read");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The source bytes could not be decoded into a raster.
    #[error("decode failed: {0}")]
    Decode(String),
    /// Interpolation could not produce an output raster.
    #[error("resample failed: {0}")]
    Resample(String),
    /// The raster could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),
    /// This build has no codec for the format.
    #[error("{} not supported by this build", .0.essence())]
    Unsupported(MimeType),
}

impl PipelineError {
    /// Short verb describing the stage, used in report messages
    /// (`"Failed to read: ..."`, `"Failed to resize: ..."`, `"Failed to save: ..."`).
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Decode(_) => "read",
            PipelineError::Resample(_) => "resize",
            PipelineError::Encode(_) | PipelineError::Unsupported(_) => "save",
        }
    }
}
