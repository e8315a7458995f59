//! Implementation of the `sdfgen world` command.
//!
//! Responsibility: translate CLI arguments into a raw option mapping, call
//! the generation service, and display results. Defaulting and validation
//! live in the core resolver, not here.

use sdfgen_core::domain::{RawOptions, keys};
use tracing::instrument;

use crate::{
    cli::WorldArgs, commands::run_generation, config::AppConfig, error::CliResult,
    output::OutputManager,
};

/// Execute the `sdfgen world` command.
#[instrument(skip_all, fields(template = %args.render.template.display()))]
pub fn execute(args: WorldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = build_options(&args, &config);
    run_generation(&args.render, options, &config, &output)
}

/// Only options the user (or the config file) actually supplied enter the
/// mapping; absence is what triggers defaulting in the resolver.
fn build_options(args: &WorldArgs, config: &AppConfig) -> RawOptions {
    let mut raw = RawOptions::new();

    if let Some(world) = args.world.clone().or_else(|| config.defaults.world.clone()) {
        raw.set(keys::WORLD_NAME, world);
    }
    if let Some(sun) = args
        .sun_model
        .clone()
        .or_else(|| config.defaults.sun_model.clone())
    {
        raw.set(keys::SUN_MODEL, sun);
    }
    if let Some(v) = args.sdf_version {
        raw.set(keys::SDF_VERSION, v);
    }
    if let Some(v) = args.cloud_speed {
        raw.set(keys::CLOUD_SPEED, v);
    }
    if let Some(v) = args.shadows {
        raw.set(keys::SHADOWS, v);
    }
    if let Some(v) = args.update_rate {
        raw.set(keys::UPDATE_RATE, v);
    }
    if let Some(v) = args.wind_speed {
        raw.set(keys::WIND_SPEED, v);
    }
    if let Some(v) = args.realtime_factor {
        raw.set(keys::REALTIME_FACTOR, v);
    }
    if let Some(v) = args.ambient_light {
        raw.set(keys::AMBIENT_LIGHT, v);
    }
    if let Some(v) = args.background_light {
        raw.set(keys::BACKGROUND_LIGHT, v);
    }
    if let Some(v) = args.spherical_coords {
        raw.set(keys::SPHERICAL_COORDS, v);
    }
    if let Some(v) = args.latitude {
        raw.set(keys::LATITUDE, v);
    }
    if let Some(v) = args.longitude {
        raw.set(keys::LONGITUDE, v);
    }
    if let Some(v) = args.altitude {
        raw.set(keys::ALTITUDE, v);
    }
    if let Some(v) = args.ode_threads {
        raw.set(keys::ODE_THREADS, v);
    }
    if let Some(v) = args.video_widget {
        raw.set(keys::VIDEO_WIDGET, v);
    }
    if let Some(model) = &args.model {
        raw.set(keys::MODEL_NAME, model.clone());
    }
    if let Some(pose) = &args.model_pose {
        raw.set(keys::MODEL_POSE, pose.clone());
    }

    raw
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use sdfgen_core::domain::OptionValue;

    fn world_args(argv: &[&str]) -> WorldArgs {
        let mut full = vec!["sdfgen", "world"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::World(args) => args,
            other => panic!("expected world command, got {other:?}"),
        }
    }

    #[test]
    fn unsupplied_flags_stay_out_of_the_mapping() {
        let args = world_args(&["t.sdf.jinja", "--world", "ksql"]);
        let raw = build_options(&args, &AppConfig::default());
        assert_eq!(raw.get(keys::WORLD_NAME), Some(&OptionValue::from("ksql")));
        assert!(!raw.contains(keys::SDF_VERSION));
        assert!(!raw.contains(keys::SHADOWS));
        assert!(!raw.contains(keys::MODEL_NAME));
    }

    #[test]
    fn supplied_flags_enter_with_their_types() {
        let args = world_args(&[
            "t.sdf.jinja",
            "--shadows",
            "false",
            "--update-rate",
            "500",
            "--wind-speed",
            "9.5",
        ]);
        let raw = build_options(&args, &AppConfig::default());
        assert_eq!(raw.get(keys::SHADOWS), Some(&OptionValue::Bool(false)));
        assert_eq!(raw.get(keys::UPDATE_RATE), Some(&OptionValue::Int(500)));
        assert_eq!(raw.get(keys::WIND_SPEED), Some(&OptionValue::Float(9.5)));
    }

    #[test]
    fn config_world_fills_in_when_flag_absent() {
        let mut config = AppConfig::default();
        config.defaults.world = Some("warehouse".into());

        let args = world_args(&["t.sdf.jinja"]);
        let raw = build_options(&args, &config);
        assert_eq!(
            raw.get(keys::WORLD_NAME),
            Some(&OptionValue::from("warehouse"))
        );
    }

    #[test]
    fn world_flag_beats_config_default() {
        let mut config = AppConfig::default();
        config.defaults.world = Some("warehouse".into());

        let args = world_args(&["t.sdf.jinja", "--world", "boat"]);
        let raw = build_options(&args, &config);
        assert_eq!(raw.get(keys::WORLD_NAME), Some(&OptionValue::from("boat")));
    }

    #[test]
    fn embedded_model_flags_map_to_model_options() {
        let args = world_args(&[
            "t.sdf.jinja",
            "--model",
            "iris",
            "--model-pose",
            "1 2 3 0 0 0",
        ]);
        let raw = build_options(&args, &AppConfig::default());
        assert_eq!(raw.get(keys::MODEL_NAME), Some(&OptionValue::from("iris")));
        assert_eq!(
            raw.get(keys::MODEL_POSE),
            Some(&OptionValue::from("1 2 3 0 0 0"))
        );
    }
}
