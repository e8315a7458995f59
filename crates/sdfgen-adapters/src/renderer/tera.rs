//! Tera-backed template renderer.

use sdfgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::ResolvedParams,
    error::SdfgenResult,
};
use tera::{Context, Tera};
use tracing::instrument;

/// Production renderer backed by the tera engine.
///
/// Each render call registers the template text under its diagnostic name in
/// a fresh engine instance. Tera fails on any `{{ variable }}` that is absent
/// from the context, which is exactly the behavior the generation pipeline
/// relies on: a template referencing an unresolved parameter must abort the
/// run, not emit a partial artifact.
pub struct TeraRenderer;

impl TeraRenderer {
    /// Create a new tera renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip_all, fields(template = name))]
    fn render(
        &self,
        name: &str,
        template: &str,
        params: &ResolvedParams,
    ) -> SdfgenResult<String> {
        let mut engine = Tera::default();
        engine
            .add_raw_template(name, template)
            .map_err(|e| rendering_failed(name, &e))?;

        let mut context = Context::new();
        for (key, value) in params.template_values() {
            context.insert(key, &value);
        }

        engine
            .render(name, &context)
            .map_err(|e| rendering_failed(name, &e))
    }
}

/// Flatten tera's error chain into one diagnostic line.
///
/// The top-level tera error is usually just "Failed to render 'x'"; the
/// actionable detail (undefined variable, syntax error location) sits in the
/// source chain.
fn rendering_failed(name: &str, error: &tera::Error) -> sdfgen_core::error::SdfgenError {
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    ApplicationError::RenderingFailed {
        template: name.to_string(),
        reason,
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
