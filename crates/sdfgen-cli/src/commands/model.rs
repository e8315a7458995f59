//! Implementation of the `sdfgen model` command.

use sdfgen_core::domain::{RawOptions, keys};
use tracing::instrument;

use crate::{
    cli::ModelArgs, commands::run_generation, config::AppConfig, error::CliResult,
    output::OutputManager,
};

/// Execute the `sdfgen model` command.
#[instrument(skip_all, fields(model = %args.name))]
pub fn execute(args: ModelArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = build_options(&args);
    run_generation(&args.render, options, &config, &output)
}

fn build_options(args: &ModelArgs) -> RawOptions {
    let mut raw = RawOptions::new().with(keys::MODEL_NAME, args.name.clone());

    if let Some(pose) = &args.pose {
        raw.set(keys::MODEL_POSE, pose.clone());
    }
    if let Some(v) = args.mavlink_tcp_port {
        raw.set(keys::MAVLINK_TCP_PORT, v);
    }
    if let Some(v) = args.mavlink_udp_port {
        raw.set(keys::MAVLINK_UDP_PORT, v);
    }
    if let Some(v) = args.serial_enabled {
        raw.set(keys::SERIAL_ENABLED, v);
    }
    if let Some(dev) = &args.serial_device {
        raw.set(keys::SERIAL_DEVICE, dev.clone());
    }
    if let Some(v) = args.serial_baudrate {
        raw.set(keys::SERIAL_BAUDRATE, v);
    }
    if let Some(v) = args.enable_lockstep {
        raw.set(keys::ENABLE_LOCKSTEP, v);
    }
    if let Some(v) = args.hil_gps_port {
        raw.set(keys::HIL_GPS_PORT, v);
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

    fn model_args(argv: &[&str]) -> ModelArgs {
        let mut full = vec!["sdfgen", "model"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Model(args) => args,
            other => panic!("expected model command, got {other:?}"),
        }
    }

    #[test]
    fn name_is_always_in_the_mapping() {
        let args = model_args(&["t.sdf.jinja", "--name", "iris"]);
        let raw = build_options(&args);
        assert_eq!(raw.get(keys::MODEL_NAME), Some(&OptionValue::from("iris")));
        assert!(!raw.contains(keys::MODEL_POSE));
        assert!(!raw.contains(keys::SERIAL_ENABLED));
    }

    #[test]
    fn transport_flags_map_with_their_types() {
        let args = model_args(&[
            "t.sdf.jinja",
            "--name",
            "plane",
            "--mavlink-tcp-port",
            "4561",
            "--serial-enabled",
            "true",
            "--serial-device",
            "/dev/ttyUSB0",
            "--enable-lockstep",
            "false",
            "--hil-gps-port",
            "13550",
        ]);
        let raw = build_options(&args);
        assert_eq!(
            raw.get(keys::MAVLINK_TCP_PORT),
            Some(&OptionValue::Int(4561))
        );
        assert_eq!(raw.get(keys::SERIAL_ENABLED), Some(&OptionValue::Bool(true)));
        assert_eq!(
            raw.get(keys::SERIAL_DEVICE),
            Some(&OptionValue::from("/dev/ttyUSB0"))
        );
        assert_eq!(
            raw.get(keys::ENABLE_LOCKSTEP),
            Some(&OptionValue::Bool(false))
        );
        assert_eq!(raw.get(keys::HIL_GPS_PORT), Some(&OptionValue::Int(13550)));
    }

    #[test]
    fn explicit_pose_enters_the_mapping() {
        let args = model_args(&["t.sdf.jinja", "--name", "rover", "--pose", "5 5 0 0 0 1.57"]);
        let raw = build_options(&args);
        assert_eq!(
            raw.get(keys::MODEL_POSE),
            Some(&OptionValue::from("5 5 0 0 0 1.57"))
        );
    }
}
