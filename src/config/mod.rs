pub mod app;
pub mod env;
pub mod image;
pub mod upload;
pub mod web;
