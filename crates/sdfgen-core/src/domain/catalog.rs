//! Option catalog: the closed sets of valid discrete names and the literal
//! defaults derived from them.
//!
//! # Design Rationale
//!
//! The generator this replaces kept world and model defaults in module-level
//! dictionaries consulted as ambient global state. This module replaces that
//! with a single static registry per choice set: each world and each model is
//! described exactly once by its def entry, and an [`OptionCatalog`] is an
//! explicitly constructed, immutable value passed into the resolver. Tests
//! can build substitute catalogs from their own tables.
//!
//! # Adding a New World or Model
//!
//! 1. Add one def entry to [`WORLD_REGISTRY`] or [`MODEL_REGISTRY`]
//! 2. That's it — membership checks, default derivation, and diagnostic
//!    enumeration all derive from the registries

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::value::OptionValue;

// ── World definitions ─────────────────────────────────────────────────────────

/// Describes one world and the literal defaults associated with it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldDef {
    /// World name as it appears in templates and on the command line.
    pub name: &'static str,

    /// SDF format version the world's template targets.
    ///
    /// Used to derive `sdf_version` when the caller does not supply one.
    pub sdf_version: f64,
}

/// Single source of truth for world defaults.
///
/// Worlds modeled on legacy terrain meshes (`ksql`, `mcmillan`, `yosemite`)
/// still target SDF 1.5; everything else targets 1.7.
pub static WORLD_REGISTRY: &[WorldDef] = &[
    WorldDef { name: "empty", sdf_version: 1.7 },
    WorldDef { name: "baylands", sdf_version: 1.7 },
    WorldDef { name: "boat", sdf_version: 1.7 },
    WorldDef { name: "irlock", sdf_version: 1.7 },
    WorldDef { name: "ksql", sdf_version: 1.5 },
    WorldDef { name: "mcmillan", sdf_version: 1.5 },
    WorldDef { name: "raceway", sdf_version: 1.7 },
    WorldDef { name: "typhoon", sdf_version: 1.7 },
    WorldDef { name: "warehouse", sdf_version: 1.7 },
    WorldDef { name: "windy", sdf_version: 1.7 },
    WorldDef { name: "yosemite", sdf_version: 1.5 },
];

// ── Model definitions ─────────────────────────────────────────────────────────

/// Describes one vehicle model and the literal defaults associated with it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelDef {
    /// Base model name, before any auxiliary-mode prefixing.
    pub name: &'static str,

    /// Default spawn pose as a `"x y z roll pitch yaw"` tuple.
    ///
    /// Used to derive `model_pose` when the caller does not supply one.
    /// Vehicles whose collision geometry sits below the origin spawn with a
    /// positive z offset so they don't start embedded in the ground plane.
    pub spawn_pose: &'static str,
}

/// Single source of truth for auxiliary-mode-capable vehicle models.
pub static MODEL_REGISTRY: &[ModelDef] = &[
    ModelDef { name: "iris", spawn_pose: "0 0 0.25 0 0 0" },
    ModelDef { name: "plane", spawn_pose: "0 0 0.25 0 0 0" },
    ModelDef { name: "standard_vtol", spawn_pose: "0 0 0.3 0 0 0" },
    ModelDef { name: "rover", spawn_pose: "0 0 0.15 0 0 0" },
    ModelDef { name: "boat", spawn_pose: "0 0 0 0 0 0" },
    ModelDef { name: "typhoon_h480", spawn_pose: "0 0 0.4 0 0 0" },
    ModelDef { name: "solo", spawn_pose: "0 0 0.25 0 0 0" },
    ModelDef { name: "tailsitter", spawn_pose: "0 0 0.2 0 0 0" },
];

// ── Choice sets ───────────────────────────────────────────────────────────────

/// Identifies which closed choice set an option's name must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSet {
    Worlds,
    Models,
}

impl ChoiceSet {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worlds => "world",
            Self::Models => "model",
        }
    }
}

impl fmt::Display for ChoiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── OptionCatalog ─────────────────────────────────────────────────────────────

/// Immutable registry of valid discrete choices and their literal defaults.
///
/// Constructed once at startup and shared by reference; it exposes no
/// mutation API. [`OptionCatalog::builtin`] wires up the production
/// registries; tests may construct catalogs over their own static tables.
#[derive(Debug, Clone, Copy)]
pub struct OptionCatalog {
    worlds: &'static [WorldDef],
    models: &'static [ModelDef],
}

impl OptionCatalog {
    /// Catalog backed by the built-in registries.
    pub fn builtin() -> Self {
        Self::new(WORLD_REGISTRY, MODEL_REGISTRY)
    }

    /// Catalog backed by caller-supplied tables (substitute catalogs in tests).
    pub fn new(worlds: &'static [WorldDef], models: &'static [ModelDef]) -> Self {
        Self { worlds, models }
    }

    /// Pure membership test, no side effects.
    pub fn is_member(&self, set: ChoiceSet, name: &str) -> bool {
        match set {
            ChoiceSet::Worlds => self.worlds.iter().any(|def| def.name == name),
            ChoiceSet::Models => self.models.iter().any(|def| def.name == name),
        }
    }

    /// The literal default/derived value associated with `name` in `set`.
    ///
    /// Fails with [`DomainError::UnknownChoice`] if `name` is not a member;
    /// this is the only error this component can produce.
    pub fn lookup_default(&self, set: ChoiceSet, name: &str) -> Result<OptionValue, DomainError> {
        let found = match set {
            ChoiceSet::Worlds => self
                .worlds
                .iter()
                .find(|def| def.name == name)
                .map(|def| OptionValue::Float(def.sdf_version)),
            ChoiceSet::Models => self
                .models
                .iter()
                .find(|def| def.name == name)
                .map(|def| OptionValue::from(def.spawn_pose)),
        };
        found.ok_or_else(|| DomainError::UnknownChoice {
            set: set.as_str(),
            name: name.to_string(),
        })
    }

    /// All registered names in a set, for diagnostic output.
    pub fn members(&self, set: ChoiceSet) -> Vec<String> {
        match set {
            ChoiceSet::Worlds => self.worlds.iter().map(|def| def.name.to_string()).collect(),
            ChoiceSet::Models => self.models.iter().map(|def| def.name.to_string()).collect(),
        }
    }

    /// Registered world defs, for catalog listing.
    pub fn worlds(&self) -> &'static [WorldDef] {
        self.worlds
    }

    /// Registered model defs, for catalog listing.
    pub fn models(&self) -> &'static [ModelDef] {
        self.models
    }
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registries are internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    let mut seen = std::collections::HashSet::new();
    for def in WORLD_REGISTRY {
        assert!(
            seen.insert(def.name),
            "World '{}' is registered more than once",
            def.name
        );
        assert!(
            def.sdf_version > 0.0,
            "World '{}' has a non-positive sdf_version {}",
            def.name,
            def.sdf_version
        );
    }

    let mut seen = std::collections::HashSet::new();
    for def in MODEL_REGISTRY {
        assert!(
            seen.insert(def.name),
            "Model '{}' is registered more than once",
            def.name
        );
        let components: Vec<&str> = def.spawn_pose.split_whitespace().collect();
        assert_eq!(
            components.len(),
            6,
            "Model '{}' spawn pose '{}' is not a 6-tuple",
            def.name,
            def.spawn_pose
        );
        for c in components {
            assert!(
                c.parse::<f64>().is_ok(),
                "Model '{}' spawn pose component '{}' is not numeric",
                def.name,
                c
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
