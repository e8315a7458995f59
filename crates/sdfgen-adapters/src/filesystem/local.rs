//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sdfgen_core::{application::ports::Filesystem, error::SdfgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> SdfgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SdfgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> SdfgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> sdfgen_core::error::SdfgenError {
    use sdfgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("worlds/generated");
        fs.create_dir_all(&nested).unwrap();
        let file = nested.join("empty.sdf");
        fs.write_file(&file, "<sdf/>").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "<sdf/>");
    }

    #[test]
    fn reading_a_missing_file_is_a_filesystem_error() {
        let fs = LocalFilesystem::new();
        let err = fs
            .read_to_string(Path::new("/definitely/not/here.sdf.jinja"))
            .unwrap_err();
        assert!(err.to_string().contains("filesystem error"));
    }
}
