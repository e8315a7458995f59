//! Infrastructure adapters for sdfgen.
//!
//! This crate implements the ports defined in
//! `sdfgen-core::application::ports`. It contains all external dependencies
//! and I/O operations: the tera rendering engine, the local filesystem, and
//! the ament package index.

pub mod filesystem;
pub mod package_index;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use package_index::AmentIndexLocator;
pub use renderer::TeraRenderer;
