//! Option values and the raw/resolved parameter mappings.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Booleans live as real `bool`s everywhere inside the core; the external
//! `"1"`/`"0"` convention expected by scene-description templates is applied
//! only at the rendering boundary via [`OptionValue::to_template_value`].
//! No resolution logic lives here — that is [`super::resolver`]'s job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ── OptionValue ───────────────────────────────────────────────────────────────

/// A single configuration value, raw or resolved.
///
/// The variants cover everything the generator's option surface needs:
/// counts and ports (`Int`), rates and light levels (`Float`), flags
/// (`Bool`), names and pose tuples (`Str`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Borrow the inner string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convert to the textual form handed to the template engine.
    ///
    /// This is the single place where the internal `bool` representation
    /// becomes the external `"1"`/`"0"` convention.
    pub fn to_template_value(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Str(s) => s.clone(),
        }
    }

    /// Human-readable type name, used in wrong-type diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_template_value())
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

// ── RawOptions ────────────────────────────────────────────────────────────────

/// Flat mapping of option name → raw value, as supplied by the caller.
///
/// The CLI layer builds one of these from parsed arguments; only options the
/// user actually specified are present. Missing entries are what triggers
/// defaulting and derivation in the resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOptions {
    entries: BTreeMap<String, OptionValue>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing any previous value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Self::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ── ResolvedParams ────────────────────────────────────────────────────────────

/// The final, complete name → value mapping handed to the rendering
/// collaborator.
///
/// Backed by a `BTreeMap` so iteration order is deterministic: identical raw
/// input always produces a byte-identical rendered artifact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedParams {
    entries: BTreeMap<String, OptionValue>,
}

impl ResolvedParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate entries in their boundary form (booleans as `"1"`/`"0"`).
    ///
    /// Renderer adapters consume this; nothing inside the core should.
    pub fn template_values(&self) -> impl Iterator<Item = (&str, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_template_value()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
