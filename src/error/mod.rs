pub mod api;
pub mod batch;
pub mod pipeline;
pub mod upload;
