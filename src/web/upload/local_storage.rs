//! # Local File Storage
//!
//! [`FileStorage`] backed by a directory on the local filesystem.
//!
//! Names are treated as plain file names: leading slashes are trimmed and
//! `..` is neutralized, so every write stays inside the root.
//!
//! # Example
//! ```rust,no_run
//! use image_resize_service::web::upload::local_storage::LocalFileStorage;
//! use image_resize_service::web::upload::storage::FileStorage;
//! use std::path::Path;
//!
//! let storage = LocalFileStorage::new("/tmp/subImage");
//! storage.ensure_root().unwrap();
//!
//! let abs_path = storage.save("avatar.png", b"binary").unwrap();
//! assert!(Path::new(&abs_path).exists());
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::storage::FileStorage;

/// Stores files in a single local directory.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Returns the configured root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        let safe = name.trim_start_matches('/').replace("..", "_");
        self.root.join(safe)
    }
}

impl FileStorage for LocalFileStorage {
    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| format!("create {:?}", &self.root))
    }

    fn exists(&self, name: &str) -> bool {
        self.path_of(name).exists()
    }

    fn save(&self, name: &str, bytes: &[u8]) -> Result<String> {
        let full = self.path_of(name);
        fs::write(&full, bytes).with_context(|| format!("write {:?}", &full))?;
        Ok(full.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_root_creates_nested_directories() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().join("svc/subImage");
        let storage = LocalFileStorage::new(&root);

        storage.ensure_root()?;
        storage.ensure_root()?;
        assert!(root.is_dir());
        Ok(())
    }

    #[test]
    fn save_writes_bytes_and_returns_abs_path() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let storage = LocalFileStorage::new(tmp.path());

        let abs = storage.save("b.png", b"hello world")?;

        assert_eq!(Path::new(&abs), tmp.path().join("b.png"));
        assert_eq!(fs::read(&abs)?, b"hello world");
        assert!(storage.exists("b.png"));
        Ok(())
    }

    #[test]
    fn save_replaces_previous_content() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let storage = LocalFileStorage::new(tmp.path());

        storage.save("c.jpg", b"old-old-old")?;
        storage.save("c.jpg", b"new")?;
        assert_eq!(fs::read(tmp.path().join("c.jpg"))?, b"new");
        Ok(())
    }

    #[test]
    fn exists_is_false_for_unsaved_names() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let storage = LocalFileStorage::new(tmp.path());

        assert!(!storage.exists("d.webp"));
        storage.save("d.webp", b"x")?;
        assert!(storage.exists("d.webp"));
        Ok(())
    }

    #[test]
    fn parent_segments_stay_inside_root() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let storage = LocalFileStorage::new(tmp.path());

        let abs = storage.save("/..secret.png", b"x")?;
        assert_eq!(Path::new(&abs), tmp.path().join("_secret.png"));
        Ok(())
    }

    #[test]
    fn save_into_missing_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(tmp.path().join("missing"));
        let err = storage.save("e.png", b"x").unwrap_err();
        assert!(format!("{err:#}").contains("write"));
    }
}
