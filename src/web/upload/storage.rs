//! # File Storage Abstractions
//!
//! The output folder as seen by the upload service.
//!
//! [`FileStorage`] is implemented by
//! [`LocalFileStorage`](super::local_storage::LocalFileStorage) for the
//! real filesystem and by in-memory stubs in tests.
//!
//! # Example
//! ```rust
//! use image_resize_service::web::upload::storage::FileStorage;
//! use anyhow::Result;
//! use std::collections::HashMap;
//! use std::sync::Mutex;
//!
//! #[derive(Default)]
//! struct MemoryStorage(Mutex<HashMap<String, Vec<u8>>>);
//!
//! impl FileStorage for MemoryStorage {
//!     fn ensure_root(&self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn exists(&self, name: &str) -> bool {
//!         self.0.lock().unwrap().contains_key(name)
//!     }
//!     fn save(&self, name: &str, bytes: &[u8]) -> Result<String> {
//!         self.0.lock().unwrap().insert(name.into(), bytes.to_vec());
//!         Ok(format!("mem://{name}"))
//!     }
//! }
//!
//! let storage = MemoryStorage::default();
//! storage.save("a.png", b"x").unwrap();
//! assert!(storage.exists("a.png"));
//! ```

use anyhow::Result;

/// A flat folder of output files addressed by file name.
pub trait FileStorage: Send + Sync {
    /// Creates the folder if it does not exist yet.
    fn ensure_root(&self) -> Result<()>;

    /// Whether a file named `name` is already stored.
    fn exists(&self, name: &str) -> bool;

    /// Writes `bytes` under `name`, replacing any previous content.
    ///
    /// # Returns
    /// The full path or identifier of the stored file.
    fn save(&self, name: &str, bytes: &[u8]) -> Result<String>;
}
