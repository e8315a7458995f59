//! Domain layer: option values, the option catalog, and the resolver.
//!
//! Pure logic with no I/O. Everything here is a deterministic function of
//! its inputs; the catalog is an immutable value constructed at startup.

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod value;

pub use catalog::{ChoiceSet, ModelDef, OptionCatalog, WorldDef, MODEL_REGISTRY, WORLD_REGISTRY};
pub use error::{DomainError, ErrorCategory};
pub use resolver::{keys, Resolver, DEFAULT_WORLD, HITL_PREFIX, NOT_SET, NO_CLOUDS};
pub use value::{OptionValue, RawOptions, ResolvedParams};
