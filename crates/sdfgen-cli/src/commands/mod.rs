//! Command implementations.
//!
//! Each module translates parsed CLI arguments into a core request and
//! displays the outcome. No option resolution happens here.

pub mod catalog;
pub mod completions;
pub mod model;
pub mod world;

use sdfgen_adapters::{AmentIndexLocator, LocalFilesystem, TeraRenderer};
use sdfgen_core::{
    application::ports::PackageIndex,
    domain::{OptionCatalog, RawOptions},
    prelude::{GenerateRequest, GenerateService},
};
use tracing::{debug, info};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Wire up the production adapters and run one generation request.
///
/// Shared by the `world` and `model` commands; the only difference between
/// them is the raw option mapping they build.
pub(crate) fn run_generation(
    render: &RenderArgs,
    options: RawOptions,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let catalog = OptionCatalog::builtin();
    let packages = build_package_index(render, config);
    debug!(?packages, "package index resolved");

    let service = GenerateService::new(
        &catalog,
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
        packages,
    );

    let request = GenerateRequest {
        template: render.template.clone(),
        output_file: render.output_file.clone(),
        packages: render.packages.clone(),
        options,
    };

    let written = service.generate(request).map_err(CliError::Core)?;
    info!(output = %written.display(), "generation finished");

    output.success(&format!(
        "{} -> {}",
        render.template.display(),
        written.display()
    ))?;
    Ok(())
}

/// Explicit prefixes (flags first, then config) beat the environment probe.
fn build_package_index(render: &RenderArgs, config: &AppConfig) -> PackageIndex {
    let mut prefixes = render.package_prefixes.clone();
    prefixes.extend(config.packages.prefixes.iter().cloned());

    if prefixes.is_empty() {
        AmentIndexLocator::detect()
    } else {
        PackageIndex::Locator(Box::new(AmentIndexLocator::with_prefixes(prefixes)))
    }
}
