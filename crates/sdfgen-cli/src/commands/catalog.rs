//! Implementation of the `sdfgen catalog` command.

use sdfgen_core::domain::OptionCatalog;
use serde_json::json;

use crate::{
    cli::{CatalogArgs, CatalogFormat, CatalogSet},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sdfgen catalog` command.
pub fn execute(args: CatalogArgs, output: OutputManager) -> CliResult<()> {
    let catalog = OptionCatalog::builtin();
    let show_worlds = args.set != Some(CatalogSet::Models);
    let show_models = args.set != Some(CatalogSet::Worlds);

    match args.format {
        CatalogFormat::Table => {
            if show_worlds {
                output.header("Worlds")?;
                output.print(&format!("  {:<16} {}", "NAME", "SDF VERSION"))?;
                for def in catalog.worlds() {
                    output.print(&format!("  {:<16} {}", def.name, def.sdf_version))?;
                }
            }
            if show_worlds && show_models {
                output.print("")?;
            }
            if show_models {
                output.header("Models")?;
                output.print(&format!("  {:<16} {}", "NAME", "DEFAULT POSE"))?;
                for def in catalog.models() {
                    output.print(&format!("  {:<16} {}", def.name, def.spawn_pose))?;
                }
            }
        }

        CatalogFormat::List => {
            if show_worlds {
                for def in catalog.worlds() {
                    output.print(def.name)?;
                }
            }
            if show_models {
                for def in catalog.models() {
                    output.print(def.name)?;
                }
            }
        }

        CatalogFormat::Json => {
            let value = match args.set {
                Some(CatalogSet::Worlds) => json!({ "worlds": catalog.worlds() }),
                Some(CatalogSet::Models) => json!({ "models": catalog.models() }),
                None => json!({
                    "worlds": catalog.worlds(),
                    "models": catalog.models(),
                }),
            };
            let rendered =
                serde_json::to_string_pretty(&value).map_err(|e| CliError::InvalidInput {
                    message: format!("failed to serialize catalog: {e}"),
                })?;
            // Bypass the output manager so JSON stays machine-readable even
            // in quiet mode.
            println!("{rendered}");
        }
    }

    Ok(())
}
