//! Simulation metadata and host-facing parameters.
//!
//! Every simulation publishes a [`SimConfig`]: its slug, display title,
//! category and the parameters the host may expose as sliders. Each frame the
//! host hands the engine a [`ParameterSet`] with the current slider values;
//! the engine resolves it against the config so that missing keys fall back
//! to their documented defaults and out-of-range values are clamped instead
//! of propagating into the physics.
//!
//! # Example
//!
//! ```
//! use edusim::params::{Category, ParamSpec, ParameterSet, SimConfig};
//!
//! let config = SimConfig::new("spring-mass", "Spring & Mass", Category::Mechanics)
//!     .with_param(ParamSpec::new("stiffness", "Spring stiffness (N/m)", 1.0, 100.0, 25.0))
//!     .with_param(ParamSpec::new("damping", "Damping (N·s/m)", 0.0, 5.0, 0.0));
//!
//! let raw = ParameterSet::new().set("stiffness", 250.0); // slider gone wild
//! let resolved = config.resolve(&raw);
//! assert_eq!(resolved.get_or("stiffness", 0.0), 100.0);  // clamped to max
//! assert_eq!(resolved.get_or("damping", -1.0), 0.0);     // missing -> default
//! ```

use crate::error::ConfigError;
use std::collections::HashMap;
use std::fmt;

/// Subject area a simulation belongs to, used by the host for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Springs, pendulums, projectiles, collisions.
    Mechanics,
    /// Gas laws, heat, convection.
    Thermodynamics,
    /// Orbits, accretion, N-body gravity.
    Astronomy,
    /// Charges, fields, Coulomb forces.
    Electromagnetism,
    /// Titrations, equilibria, reaction kinetics.
    Chemistry,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Mechanics => "Mechanics",
            Category::Thermodynamics => "Thermodynamics",
            Category::Astronomy => "Astronomy",
            Category::Electromagnetism => "Electromagnetism",
            Category::Chemistry => "Chemistry",
        };
        write!(f, "{}", name)
    }
}

/// Definition of one host-adjustable parameter.
///
/// The range is authoritative: whatever the host sends, the engine only ever
/// sees values inside `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Stable key the host uses in each frame's [`ParameterSet`].
    pub key: &'static str,
    /// Human-readable label for the slider, including units.
    pub label: &'static str,
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
    /// Value used when the host omits the key.
    pub default: f32,
}

impl ParamSpec {
    /// Create a parameter definition.
    pub fn new(key: &'static str, label: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self { key, label, min, max, default }
    }

    /// Clamp a raw host value into this parameter's range.
    ///
    /// Non-finite input (NaN, ±inf from a broken slider binding) resolves to
    /// the default rather than poisoning the physics.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() || !self.default.is_finite() {
            return Err("bounds and default must be finite".into());
        }
        if self.min > self.max {
            return Err("min > max".into());
        }
        if self.default < self.min || self.default > self.max {
            return Err("default outside [min, max]".into());
        }
        Ok(())
    }
}

/// Static metadata for one simulation.
///
/// Immutable after registration; the registry shares it by `Arc` with the
/// host while the factory builds fresh engines from it.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Stable string identifier used by the registry.
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Subject grouping.
    pub category: Category,
    /// Host-adjustable parameters, in display order.
    pub params: Vec<ParamSpec>,
}

impl SimConfig {
    /// Create a config with no parameters yet.
    pub fn new(slug: &'static str, title: &'static str, category: Category) -> Self {
        Self { slug, title, category, params: Vec::new() }
    }

    /// Add a parameter definition.
    pub fn with_param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    /// Look up a parameter definition by key.
    pub fn param(&self, key: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.key == key)
    }

    /// Check every parameter definition, reporting the first malformed one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for spec in &self.params {
            spec.validate().map_err(|reason| ConfigError::MalformedParameter {
                slug: self.slug.to_string(),
                key: spec.key.to_string(),
                reason,
            })?;
        }
        Ok(())
    }

    /// Resolve a raw host parameter set against this config.
    ///
    /// The result contains exactly the keys this config defines: missing keys
    /// take their defaults, present keys are clamped into range, and keys the
    /// config does not know are dropped.
    pub fn resolve(&self, raw: &ParameterSet) -> ParameterSet {
        let mut resolved = ParameterSet::new();
        for spec in &self.params {
            let value = match raw.get(spec.key) {
                Some(v) => spec.clamp(v),
                None => spec.default,
            };
            resolved.insert(spec.key, value);
        }
        resolved
    }
}

/// Current slider values, supplied by the host each frame.
///
/// Plain key → value mapping with no behavior of its own; range enforcement
/// lives in [`SimConfig::resolve`].
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    values: HashMap<String, f32>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for tests and demos.
    pub fn set(mut self, key: &str, value: f32) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Insert or overwrite a value.
    pub fn insert(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
    }

    /// Get a value if present.
    pub fn get(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }

    /// Get a value, falling back to `default` when absent.
    pub fn get_or(&self, key: &str, default: f32) -> f32 {
        self.get(key).unwrap_or(default)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> SimConfig {
        SimConfig::new("demo", "Demo", Category::Mechanics)
            .with_param(ParamSpec::new("gravity", "Gravity (m/s²)", 0.0, 20.0, 9.8))
            .with_param(ParamSpec::new("count", "Particles", 1.0, 100.0, 10.0))
    }

    #[test]
    fn test_resolve_defaults_missing_keys() {
        let config = demo_config();
        let resolved = config.resolve(&ParameterSet::new());
        assert_eq!(resolved.get_or("gravity", -1.0), 9.8);
        assert_eq!(resolved.get_or("count", -1.0), 10.0);
    }

    #[test]
    fn test_resolve_clamps_out_of_range() {
        let config = demo_config();
        let raw = ParameterSet::new().set("gravity", 500.0).set("count", -3.0);
        let resolved = config.resolve(&raw);
        assert_eq!(resolved.get_or("gravity", -1.0), 20.0);
        assert_eq!(resolved.get_or("count", -1.0), 1.0);
    }

    #[test]
    fn test_resolve_drops_unknown_keys() {
        let config = demo_config();
        let raw = ParameterSet::new().set("wormholes", 3.0);
        let resolved = config.resolve(&raw);
        assert_eq!(resolved.get("wormholes"), None);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_resolve_replaces_nan_with_default() {
        let config = demo_config();
        let raw = ParameterSet::new().set("gravity", f32::NAN);
        let resolved = config.resolve(&raw);
        assert_eq!(resolved.get_or("gravity", -1.0), 9.8);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = SimConfig::new("bad", "Bad", Category::Chemistry)
            .with_param(ParamSpec::new("ph", "pH", 14.0, 0.0, 7.0));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min > max"));
    }

    #[test]
    fn test_validate_rejects_default_outside_range() {
        let config = SimConfig::new("bad", "Bad", Category::Chemistry)
            .with_param(ParamSpec::new("ph", "pH", 0.0, 14.0, 20.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(demo_config().validate().is_ok());
    }
}
