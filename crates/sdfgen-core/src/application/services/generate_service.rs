//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generation request:
//! 1. Resolve raw options against the catalog
//! 2. Augment the mapping with located package directories
//! 3. Read and render the template
//! 4. Write the artifact
//!
//! All logic lives in the resolver; this layer only sequences the ports.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PackageIndex, TemplateRenderer},
    },
    domain::{OptionCatalog, RawOptions, Resolver},
    error::SdfgenResult,
};

/// Suffix marking a template file; stripped to derive the output path.
const TEMPLATE_SUFFIX: &str = ".jinja";

/// One generation request: which template, which options, where to write.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Path to the template file.
    pub template: PathBuf,

    /// Explicit output path. When `None`, the output path is the template
    /// path with its `.jinja` suffix stripped.
    pub output_file: Option<PathBuf>,

    /// Packages whose share directories the template needs; each located
    /// package `foo` becomes a `foo_dir` parameter.
    pub packages: Vec<String>,

    /// Raw caller options, exactly as supplied.
    pub options: RawOptions,
}

/// Main generation service.
///
/// Owns the driven ports and borrows the immutable catalog. Each call to
/// [`Self::generate`] produces its own independent mapping; nothing is
/// mutated after hand-off to the renderer.
pub struct GenerateService<'c> {
    resolver: Resolver<'c>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    packages: PackageIndex,
}

impl<'c> GenerateService<'c> {
    /// Create a new generate service with the given adapters.
    pub fn new(
        catalog: &'c OptionCatalog,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        packages: PackageIndex,
    ) -> Self {
        Self {
            resolver: Resolver::new(catalog),
            renderer,
            filesystem,
            packages,
        }
    }

    /// Generate one artifact. Returns the path that was written.
    #[instrument(skip_all, fields(template = %request.template.display()))]
    pub fn generate(&self, request: GenerateRequest) -> SdfgenResult<PathBuf> {
        // 1. Resolve options (pure; fails before any I/O happens).
        let mut params = self.resolver.resolve(&request.options)?;

        // 2. Located package directories become template parameters.
        for package in &request.packages {
            if self.packages.is_absent() {
                return Err(ApplicationError::PackageIndexAbsent {
                    package: package.clone(),
                }
                .into());
            }
            let dir = self.packages.locate(package).ok_or_else(|| {
                ApplicationError::PackageNotFound {
                    package: package.clone(),
                }
            })?;
            debug!(package, dir = %dir.display(), "package located");
            params.insert(format!("{package}_dir"), dir.display().to_string());
        }

        // 3. Read and render.
        if !self.filesystem.exists(&request.template) {
            return Err(ApplicationError::TemplateNotFound {
                path: request.template.clone(),
            }
            .into());
        }
        let template_text = self.filesystem.read_to_string(&request.template)?;
        let name = template_name(&request.template);
        let rendered = self.renderer.render(name, &template_text, &params)?;

        // 4. Write the artifact.
        let output = request
            .output_file
            .clone()
            .unwrap_or_else(|| derive_output_path(&request.template));
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(&output, &rendered)?;

        info!(
            template = %request.template.display(),
            output = %output.display(),
            "artifact generated"
        );
        Ok(output)
    }
}

/// Template name used in rendering diagnostics.
fn template_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("template")
}

/// Default output path: the template path with `.jinja` stripped, so
/// `worlds/ksql.sdf.jinja` becomes `worlds/ksql.sdf`. Templates without the
/// suffix fall back to an `.sdf` extension alongside the template.
fn derive_output_path(template: &Path) -> PathBuf {
    if let Some(name) = template.file_name().and_then(|n| n.to_str()) {
        if let Some(stripped) = name.strip_suffix(TEMPLATE_SUFFIX) {
            return template.with_file_name(stripped);
        }
    }
    template.with_extension("sdf")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
