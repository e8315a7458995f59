//! Option resolution: defaulting, derivation, and validation.
//!
//! The [`Resolver`] is the only component with actual logic in this
//! repository. It transforms raw caller options into a fully resolved
//! parameter mapping:
//!
//! 1. Discrete options (`world_name`, `model_name`) are validated against
//!    the catalog's choice sets before anything else happens.
//! 2. Unspecified simple scalars receive their literal built-in defaults.
//! 3. Derived defaults (`sdf_version` from the world, `model_pose` from the
//!    model) are substituted only when the caller did not supply a value.
//!    Explicit values always win.
//! 4. Supplying a recognized model activates HITL generation: the resolved
//!    model identifier is prefixed so it cannot collide with a non-HITL
//!    instance of the same base model. The rename happens strictly after
//!    spawn-pose derivation consulted the original name.
//!
//! Resolution is a single-pass pure function of (raw options, catalog).
//! Validation completes before any derived substitution, so a failed resolve
//! never exposes a partially resolved mapping.

use tracing::debug;

use crate::domain::catalog::{ChoiceSet, OptionCatalog};
use crate::domain::error::DomainError;
use crate::domain::value::{OptionValue, RawOptions, ResolvedParams};

// ── Option names ──────────────────────────────────────────────────────────────

/// Canonical option names shared between the CLI layer and the resolver.
pub mod keys {
    pub const WORLD_NAME: &str = "world_name";
    pub const SDF_VERSION: &str = "sdf_version";
    pub const MODEL_NAME: &str = "model_name";
    pub const MODEL_POSE: &str = "model_pose";
    pub const HIL_MODE: &str = "hil_mode";
    pub const SUN_MODEL: &str = "sun_model";
    pub const CLOUD_SPEED: &str = "cloud_speed";
    pub const SHADOWS: &str = "shadows";
    pub const VIDEO_WIDGET: &str = "video_widget";
    pub const UPDATE_RATE: &str = "update_rate";
    pub const WIND_SPEED: &str = "wind_speed";
    pub const REALTIME_FACTOR: &str = "realtime_factor";
    pub const AMBIENT_LIGHT: &str = "ambient_light";
    pub const BACKGROUND_LIGHT: &str = "background_light";
    pub const SPHERICAL_COORDS: &str = "spherical_coords";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const ALTITUDE: &str = "altitude";
    pub const ODE_THREADS: &str = "ode_threads";
    pub const MAVLINK_TCP_PORT: &str = "mavlink_tcp_port";
    pub const MAVLINK_UDP_PORT: &str = "mavlink_udp_port";
    pub const SERIAL_ENABLED: &str = "serial_enabled";
    pub const SERIAL_DEVICE: &str = "serial_device";
    pub const SERIAL_BAUDRATE: &str = "serial_baudrate";
    pub const ENABLE_LOCKSTEP: &str = "enable_lockstep";
    pub const HIL_GPS_PORT: &str = "hil_gps_port";
    pub const BEACON_POSE: &str = "beacon_pose";
}

/// Sentinel meaning "option not set"; templates branch on it.
pub const NOT_SET: &str = "NotSet";

/// Sentinel for the cloud-speed option; distinct because templates treat
/// "no clouds" as its own rendering branch.
pub const NO_CLOUDS: &str = "NoClouds";

/// World used when the caller does not name one.
pub const DEFAULT_WORLD: &str = "empty";

/// Namespace prefix applied to the model identifier in HITL mode.
pub const HITL_PREFIX: &str = "hitl_";

// ── Scalar defaults ───────────────────────────────────────────────────────────

/// Const-friendly default value for the scalar defaults table.
#[derive(Debug, Clone, Copy)]
enum DefaultValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(&'static str),
}

impl From<DefaultValue> for OptionValue {
    fn from(v: DefaultValue) -> Self {
        match v {
            DefaultValue::Int(i) => OptionValue::Int(i),
            DefaultValue::Float(f) => OptionValue::Float(f),
            DefaultValue::Bool(b) => OptionValue::Bool(b),
            DefaultValue::Str(s) => OptionValue::from(s),
        }
    }
}

/// Literal built-in defaults for options with no derivation.
///
/// One entry per independent passthrough option. Keep this the single place
/// such defaults live; no match arms elsewhere.
static SCALAR_DEFAULTS: &[(&str, DefaultValue)] = &[
    (keys::SUN_MODEL, DefaultValue::Str("sun_2")),
    (keys::CLOUD_SPEED, DefaultValue::Str(NO_CLOUDS)),
    (keys::SHADOWS, DefaultValue::Bool(true)),
    (keys::VIDEO_WIDGET, DefaultValue::Str(NOT_SET)),
    (keys::UPDATE_RATE, DefaultValue::Int(250)),
    (keys::WIND_SPEED, DefaultValue::Str(NOT_SET)),
    (keys::REALTIME_FACTOR, DefaultValue::Float(1.0)),
    (keys::AMBIENT_LIGHT, DefaultValue::Float(0.95)),
    (keys::BACKGROUND_LIGHT, DefaultValue::Float(0.3)),
    (keys::SPHERICAL_COORDS, DefaultValue::Str(NOT_SET)),
    (keys::LATITUDE, DefaultValue::Float(39.8039)),
    (keys::LONGITUDE, DefaultValue::Float(-84.0606)),
    (keys::ALTITUDE, DefaultValue::Float(244.0)),
    (keys::ODE_THREADS, DefaultValue::Int(2)),
    (keys::MAVLINK_TCP_PORT, DefaultValue::Int(4560)),
    (keys::MAVLINK_UDP_PORT, DefaultValue::Int(14560)),
    (keys::SERIAL_ENABLED, DefaultValue::Bool(false)),
    (keys::SERIAL_DEVICE, DefaultValue::Str("/dev/ttyACM0")),
    (keys::SERIAL_BAUDRATE, DefaultValue::Int(921600)),
    (keys::ENABLE_LOCKSTEP, DefaultValue::Bool(true)),
];

/// Options that are only meaningful when HITL mode is active, paired with
/// the description used in the conflict diagnostic.
static HITL_ONLY_OPTIONS: &[(&str, &str)] = &[
    (keys::MODEL_POSE, "a model_name"),
    (keys::HIL_GPS_PORT, "a model_name"),
    (keys::BEACON_POSE, "a model_name"),
];

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Transforms raw caller options into a fully resolved parameter mapping.
///
/// Stateless apart from the borrowed catalog; every call is an independent
/// resolution and identical input yields an identical mapping.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c OptionCatalog,
}

impl<'c> Resolver<'c> {
    pub fn new(catalog: &'c OptionCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve `raw` into the final parameter mapping.
    ///
    /// Validation of discrete names happens before any derived-default
    /// substitution that depends on them; on error, no mapping is returned.
    pub fn resolve(&self, raw: &RawOptions) -> Result<ResolvedParams, DomainError> {
        // ── Validation phase: nothing is substituted until this passes ──────
        let world = get_str(raw, keys::WORLD_NAME)?.unwrap_or(DEFAULT_WORLD);
        if !self.catalog.is_member(ChoiceSet::Worlds, world) {
            return Err(DomainError::InvalidChoice {
                option: keys::WORLD_NAME,
                name: world.to_string(),
                valid: self.catalog.members(ChoiceSet::Worlds),
            });
        }

        let raw_model = get_str(raw, keys::MODEL_NAME)?;
        let hitl = raw_model.is_some_and(|m| !m.is_empty() && m != NOT_SET);

        if !hitl {
            for &(option, requires) in HITL_ONLY_OPTIONS {
                if raw.contains(option) {
                    return Err(DomainError::ConflictingOption { option, requires });
                }
            }
        }

        let base_model = if hitl {
            let m = raw_model.unwrap_or_default();
            if !self.catalog.is_member(ChoiceSet::Models, m) {
                return Err(DomainError::InvalidChoice {
                    option: keys::MODEL_NAME,
                    name: m.to_string(),
                    valid: self.catalog.members(ChoiceSet::Models),
                });
            }
            Some(m)
        } else {
            None
        };

        // ── Substitution phase: all discrete names are validated by now ─────
        let mut params = ResolvedParams::new();
        params.insert(keys::WORLD_NAME, world);

        // sdf_version derives from the validated world name unless supplied.
        let sdf_version = match raw.get(keys::SDF_VERSION) {
            Some(v) => v.clone(),
            None => self.catalog.lookup_default(ChoiceSet::Worlds, world)?,
        };
        params.insert(keys::SDF_VERSION, sdf_version);

        if let Some(base) = base_model {
            // Spawn pose derives from the original (non-prefixed) model name.
            let pose = match raw.get(keys::MODEL_POSE) {
                Some(v) => v.clone(),
                None => self.catalog.lookup_default(ChoiceSet::Models, base)?,
            };
            params.insert(keys::MODEL_POSE, pose);

            // The rename comes after pose derivation: templates spawn the
            // HITL instance under a namespaced identifier.
            params.insert(keys::MODEL_NAME, format!("{HITL_PREFIX}{base}"));
            params.insert(keys::HIL_MODE, true);
            debug!(model = base, "HITL mode activated");
        } else {
            params.insert(keys::MODEL_NAME, NOT_SET);
            params.insert(keys::HIL_MODE, false);
        }

        // Literal defaults for everything the caller left unspecified.
        for (name, default) in SCALAR_DEFAULTS {
            let value = raw
                .get(name)
                .cloned()
                .unwrap_or_else(|| OptionValue::from(*default));
            params.insert(*name, value);
        }

        // Remaining caller-supplied options pass through untouched.
        for (name, value) in raw.iter() {
            if !params.contains(name) {
                params.insert(name, value.clone());
            }
        }

        debug!(world, hitl, params = params.len(), "options resolved");
        Ok(params)
    }
}

/// Fetch an option as a string, rejecting other value kinds.
fn get_str<'a>(raw: &'a RawOptions, key: &'static str) -> Result<Option<&'a str>, DomainError> {
    match raw.get(key) {
        None => Ok(None),
        Some(OptionValue::Str(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(DomainError::WrongType {
            option: key.to_string(),
            expected: "string",
            actual: other.type_name(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
