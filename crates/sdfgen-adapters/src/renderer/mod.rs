//! Template renderer adapters.

pub mod tera;

pub use tera::TeraRenderer;
