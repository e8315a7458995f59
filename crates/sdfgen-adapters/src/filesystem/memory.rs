//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sdfgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SdfgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service under
/// test and keep another to inspect written files afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file before the code under test runs.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

fn lock_poisoned(path: &Path) -> sdfgen_core::error::SdfgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> SdfgenResult<String> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SdfgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> SdfgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.write_file(Path::new("a.sdf"), "<sdf/>").unwrap();
        assert_eq!(view.read_file(Path::new("a.sdf")).unwrap(), "<sdf/>");
    }

    #[test]
    fn seeded_files_are_readable_and_exist() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("worlds/empty.sdf.jinja", "template");
        assert!(fs.exists(Path::new("worlds/empty.sdf.jinja")));
        assert_eq!(
            fs.read_to_string(Path::new("worlds/empty.sdf.jinja")).unwrap(),
            "template"
        );
    }

    #[test]
    fn missing_file_read_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("nope")).is_err());
    }
}
