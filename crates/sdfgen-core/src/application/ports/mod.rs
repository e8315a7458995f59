//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sdfgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `TemplateRenderer`: template text + parameters → rendered text
//!   - `Filesystem`: file operations
//!   - `PackageLocator`: optional package-name → path lookup

pub mod output;

pub use output::{Filesystem, PackageIndex, PackageLocator, TemplateRenderer};
