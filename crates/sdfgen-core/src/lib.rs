//! sdfgen core - parameter resolution for scene-description generation.
//!
//! This crate provides the domain and application layers for the sdfgen
//! world/model generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sdfgen-cli (CLI)             │
//! │     (argument parsing, dispatch)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           GenerateService               │
//! │   resolve → locate → render → write     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Renderer, Filesystem, PackageLocator)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sdfgen-adapters (Infrastructure)    │
//! │ (TeraRenderer, LocalFilesystem, ament)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (OptionCatalog, Resolver, values)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sdfgen_core::domain::{keys, OptionCatalog, RawOptions, Resolver};
//!
//! let catalog = OptionCatalog::builtin();
//! let resolver = Resolver::new(&catalog);
//!
//! let raw = RawOptions::new().with(keys::WORLD_NAME, "ksql");
//! let params = resolver.resolve(&raw).unwrap();
//! assert_eq!(params.get(keys::SDF_VERSION).unwrap().to_template_value(), "1.5");
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerateService,
        ports::{Filesystem, PackageIndex, PackageLocator, TemplateRenderer},
    };
    pub use crate::domain::{
        ChoiceSet, OptionCatalog, OptionValue, RawOptions, ResolvedParams, Resolver, keys,
    };
    pub use crate::error::{SdfgenError, SdfgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
