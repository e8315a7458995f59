//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed (syntax error, or a referenced parameter
    /// was absent from the resolved mapping).
    #[error("rendering '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template file could not be found.
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// A package directory was requested but no package locator is present.
    #[error("package '{package}' requested but no package index is available")]
    PackageIndexAbsent { package: String },

    /// The package locator is present but does not know the package.
    #[error("package '{package}' not found in the package index")]
    PackageNotFound { package: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { template, reason } => vec![
                format!("Rendering of '{template}' failed: {reason}"),
                "Check that the template references only resolved parameters".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("No template at: {}", path.display()),
                "Check the template path and file extension (.sdf.jinja)".into(),
            ],
            Self::PackageIndexAbsent { package } => vec![
                format!("'{package}' needs a package index to be located"),
                "Source your ROS environment or set AMENT_PREFIX_PATH".into(),
            ],
            Self::PackageNotFound { package } => vec![
                format!("Package '{package}' is not in the index"),
                "Check the package name and that its workspace is sourced".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateNotFound { .. } | Self::PackageNotFound { .. } => ErrorCategory::NotFound,
            Self::PackageIndexAbsent { .. } => ErrorCategory::Configuration,
        }
    }
}
