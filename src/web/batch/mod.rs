pub mod batch_handler;
pub mod runner;

pub use batch_handler::batch_handler;
