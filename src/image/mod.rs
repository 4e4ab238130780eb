pub mod canvas;
pub mod codec;
pub mod geometry;
pub mod image_rs_processor;
pub mod mime;
pub mod processor;
pub mod resample;
