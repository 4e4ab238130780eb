pub mod batch;
pub mod cors;
pub mod fallback;
pub mod router;
pub mod upload;
