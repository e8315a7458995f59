//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sdfgen-adapters` crate provides implementations.

use crate::domain::ResolvedParams;
use crate::error::SdfgenResult;
use std::path::{Path, PathBuf};

/// Port for template rendering.
///
/// Implemented by:
/// - `sdfgen_adapters::renderer::TeraRenderer` (production)
///
/// The engine is a black box: template text plus a parameter mapping in,
/// rendered text out. It is expected to fail loudly when the template
/// references a parameter that is absent from the mapping — that failure is
/// surfaced to the caller, never masked.
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` (identified by `name` in diagnostics) with `params`.
    fn render(&self, name: &str, template: &str, params: &ResolvedParams)
    -> SdfgenResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sdfgen_adapters::filesystem::LocalFilesystem` (production)
/// - `sdfgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read an entire file into a string.
    fn read_to_string(&self, path: &Path) -> SdfgenResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SdfgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SdfgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the optional package-path lookup service.
///
/// Implemented by:
/// - `sdfgen_adapters::package_index::AmentIndexLocator` (production)
pub trait PackageLocator: Send + Sync {
    /// Filesystem path of `package`'s share directory, if known.
    fn locate(&self, package: &str) -> Option<PathBuf>;
}

/// The package lookup capability, resolved once at startup.
///
/// Either a locator exists and can be queried, or it is explicitly absent.
/// Absence is a normal state, not an error; call sites never probe for the
/// capability via failures.
pub enum PackageIndex {
    Locator(Box<dyn PackageLocator>),
    Absent,
}

impl PackageIndex {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Query the locator if present; `None` when absent or unknown.
    pub fn locate(&self, package: &str) -> Option<PathBuf> {
        match self {
            Self::Locator(locator) => locator.locate(package),
            Self::Absent => None,
        }
    }
}

impl std::fmt::Debug for PackageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locator(_) => f.write_str("PackageIndex::Locator"),
            Self::Absent => f.write_str("PackageIndex::Absent"),
        }
    }
}
