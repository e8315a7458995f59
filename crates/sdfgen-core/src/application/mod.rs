//! Application layer: ports and the generation orchestrator.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateRequest, GenerateService};
