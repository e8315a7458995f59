//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No option resolution happens here; every
//! generation flag is `Option<T>` so the core resolver can tell "user said
//! nothing" apart from "user said the default".

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, builder::BoolishValueParser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sdfgen",
    bin_name = "sdfgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Parameterized SDF world and model generation",
    long_about = "sdfgen renders scene-description (SDF) templates for \
                  simulation worlds and vehicle models, resolving omitted \
                  options to catalog defaults.",
    after_help = "EXAMPLES:\n\
        \x20 sdfgen world worlds/ksql.sdf.jinja --world ksql\n\
        \x20 sdfgen world worlds/empty.sdf.jinja --shadows false --update-rate 500\n\
        \x20 sdfgen model models/iris.sdf.jinja --name iris --mavlink-tcp-port 4561\n\
        \x20 sdfgen catalog worlds\n\
        \x20 sdfgen completions bash > /usr/share/bash-completion/completions/sdfgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a world template.
    #[command(
        visible_alias = "w",
        about = "Generate a world file from a template",
        after_help = "EXAMPLES:\n\
            \x20 sdfgen world worlds/ksql.sdf.jinja --world ksql\n\
            \x20 sdfgen world worlds/windy.sdf.jinja --world windy --wind-speed 9\n\
            \x20 sdfgen world worlds/empty.sdf.jinja --model iris"
    )]
    World(WorldArgs),

    /// Render a vehicle model template.
    #[command(
        visible_alias = "m",
        about = "Generate a model file from a template",
        after_help = "EXAMPLES:\n\
            \x20 sdfgen model models/iris.sdf.jinja --name iris\n\
            \x20 sdfgen model models/plane.sdf.jinja --name plane --serial-enabled true"
    )]
    Model(ModelArgs),

    /// List the registered worlds and models.
    #[command(
        visible_alias = "ls",
        about = "List registered worlds and models",
        after_help = "EXAMPLES:\n\
            \x20 sdfgen catalog\n\
            \x20 sdfgen catalog worlds\n\
            \x20 sdfgen catalog models --format json"
    )]
    Catalog(CatalogArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sdfgen completions bash > ~/.local/share/bash-completion/completions/sdfgen\n\
            \x20 sdfgen completions zsh  > ~/.zfunc/_sdfgen\n\
            \x20 sdfgen completions fish > ~/.config/fish/completions/sdfgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── Shared rendering arguments ────────────────────────────────────────────────

/// Arguments common to every rendering subcommand.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template file to render.
    #[arg(value_name = "TEMPLATE", help = "Template file (.sdf.jinja)")]
    pub template: PathBuf,

    /// Where to write the rendered artifact.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output path (default: template path with .jinja stripped)"
    )]
    pub output_file: Option<PathBuf>,

    /// Packages whose share directories the template references.
    #[arg(
        long = "package",
        value_name = "NAME",
        help = "Package whose directory becomes a <name>_dir parameter (repeatable)"
    )]
    pub packages: Vec<String>,

    /// Explicit install prefixes for package lookup.
    #[arg(
        long = "package-prefix",
        value_name = "DIR",
        help = "Install prefix searched for packages (repeatable, overrides the environment)"
    )]
    pub package_prefixes: Vec<PathBuf>,
}

// ── world ─────────────────────────────────────────────────────────────────────

/// Arguments for `sdfgen world`.
#[derive(Debug, Args)]
pub struct WorldArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// World to generate.
    #[arg(short = 'w', long = "world", value_name = "NAME", help = "World name")]
    pub world: Option<String>,

    /// SDF format version override.
    #[arg(
        long = "sdf-version",
        value_name = "VERSION",
        help = "SDF version (default: derived from the world)"
    )]
    pub sdf_version: Option<f64>,

    /// Sun model to place in the scene.
    #[arg(long = "sun-model", value_name = "MODEL", help = "Sun model name")]
    pub sun_model: Option<String>,

    /// Cloud drift speed; omit for a cloudless sky.
    #[arg(long = "cloud-speed", value_name = "SPEED", help = "Cloud speed")]
    pub cloud_speed: Option<f64>,

    /// Whether shadows are rendered.
    #[arg(
        long = "shadows",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Render shadows (true/false)"
    )]
    pub shadows: Option<bool>,

    /// Physics update rate in Hz.
    #[arg(long = "update-rate", value_name = "HZ", help = "Physics update rate")]
    pub update_rate: Option<i64>,

    /// Constant wind speed; omit for calm air.
    #[arg(long = "wind-speed", value_name = "M_S", help = "Wind speed")]
    pub wind_speed: Option<f64>,

    /// Real-time factor target.
    #[arg(
        long = "realtime-factor",
        value_name = "FACTOR",
        help = "Real-time factor"
    )]
    pub realtime_factor: Option<f64>,

    /// Ambient light intensity.
    #[arg(
        long = "ambient-light",
        value_name = "LEVEL",
        help = "Ambient light intensity"
    )]
    pub ambient_light: Option<f64>,

    /// Background light intensity.
    #[arg(
        long = "background-light",
        value_name = "LEVEL",
        help = "Background light intensity"
    )]
    pub background_light: Option<f64>,

    /// Emit a spherical-coordinates block.
    #[arg(
        long = "spherical-coords",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Emit spherical coordinates (true/false)"
    )]
    pub spherical_coords: Option<bool>,

    /// Origin latitude in degrees.
    #[arg(long = "latitude", value_name = "DEG", help = "Origin latitude")]
    pub latitude: Option<f64>,

    /// Origin longitude in degrees.
    #[arg(long = "longitude", value_name = "DEG", help = "Origin longitude")]
    pub longitude: Option<f64>,

    /// Origin altitude in meters.
    #[arg(long = "altitude", value_name = "M", help = "Origin altitude")]
    pub altitude: Option<f64>,

    /// ODE solver island thread count.
    #[arg(long = "ode-threads", value_name = "N", help = "ODE island threads")]
    pub ode_threads: Option<i64>,

    /// Embed a video widget in the scene.
    #[arg(
        long = "video-widget",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Embed a video widget (true/false)"
    )]
    pub video_widget: Option<bool>,

    /// Vehicle model to embed; switches the world into hardware-in-the-loop
    /// mode and prefixes the model identifier.
    #[arg(short = 'm', long = "model", value_name = "NAME", help = "Vehicle model to embed")]
    pub model: Option<String>,

    /// Spawn pose for the embedded model.
    #[arg(
        long = "model-pose",
        value_name = "POSE",
        requires = "model",
        help = "Model spawn pose 'x y z roll pitch yaw' (requires --model)"
    )]
    pub model_pose: Option<String>,
}

// ── model ─────────────────────────────────────────────────────────────────────

/// Arguments for `sdfgen model`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Base model to generate.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Base model name")]
    pub name: String,

    /// Spawn pose override.
    #[arg(
        long = "pose",
        value_name = "POSE",
        help = "Spawn pose 'x y z roll pitch yaw' (default: derived from the model)"
    )]
    pub pose: Option<String>,

    /// MAVLink TCP port.
    #[arg(long = "mavlink-tcp-port", value_name = "PORT", help = "MAVLink TCP port")]
    pub mavlink_tcp_port: Option<i64>,

    /// MAVLink UDP port.
    #[arg(long = "mavlink-udp-port", value_name = "PORT", help = "MAVLink UDP port")]
    pub mavlink_udp_port: Option<i64>,

    /// Use a serial device instead of network transport.
    #[arg(
        long = "serial-enabled",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Enable serial transport (true/false)"
    )]
    pub serial_enabled: Option<bool>,

    /// Serial device path.
    #[arg(long = "serial-device", value_name = "DEV", help = "Serial device path")]
    pub serial_device: Option<String>,

    /// Serial baudrate.
    #[arg(long = "serial-baudrate", value_name = "BAUD", help = "Serial baudrate")]
    pub serial_baudrate: Option<i64>,

    /// Run the simulation in lockstep with the flight controller.
    #[arg(
        long = "enable-lockstep",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Enable lockstep simulation (true/false)"
    )]
    pub enable_lockstep: Option<bool>,

    /// UDP port the HIL GPS plugin listens on.
    #[arg(long = "hil-gps-port", value_name = "PORT", help = "HIL GPS UDP port")]
    pub hil_gps_port: Option<i64>,
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Arguments for `sdfgen catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Which registry to list; both when omitted.
    #[arg(value_enum, value_name = "SET", help = "Registry to list (worlds or models)")]
    pub set: Option<CatalogSet>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: CatalogFormat,
}

/// Which registry `catalog` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CatalogSet {
    Worlds,
    Models,
}

/// Output format for the `catalog` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CatalogFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sdfgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
