pub mod filename;
pub mod local_storage;
pub mod storage;
pub mod upload_handler;
pub mod uploader;
