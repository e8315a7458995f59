//! Application services - use case orchestration.

pub mod generate_service;

pub use generate_service::{GenerateRequest, GenerateService};
