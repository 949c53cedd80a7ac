//! Simulation registry.
//!
//! Maps string slugs to static [`SimConfig`] metadata and factories that
//! produce fresh, uninitialized [`SimulationEngine`] instances. The host
//! looks configs up to build its catalogue and sliders, then calls
//! [`Registry::create`] when the user opens a simulation.
//!
//! # Example
//!
//! ```
//! use edusim::registry::Registry;
//!
//! let registry = Registry::with_builtins();
//! let config = registry.sim_config("spring-mass").unwrap();
//! assert_eq!(config.title, "Spring & Mass");
//!
//! let mut engine = registry.create("spring-mass").unwrap();
//! engine.init(800.0, 600.0);
//! ```

use crate::engine::SimulationEngine;
use crate::error::ConfigError;
use crate::params::SimConfig;
use std::collections::HashMap;
use std::sync::Arc;

type Factory = Box<dyn Fn() -> SimulationEngine>;

struct Entry {
    config: Arc<SimConfig>,
    factory: Factory,
}

/// Registry of available simulations.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<&'static str, Entry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with every built-in simulation.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::sims::register_builtins(&mut registry)
            .expect("built-in simulation configs are valid");
        registry
    }

    /// Register a simulation.
    ///
    /// Validates the config's parameter definitions up front so malformed
    /// metadata surfaces at load time, not mid-frame.
    pub fn register<F>(&mut self, config: SimConfig, factory: F) -> Result<(), ConfigError>
    where
        F: Fn() -> SimulationEngine + 'static,
    {
        config.validate()?;
        let slug = config.slug;
        if self.entries.contains_key(slug) {
            return Err(ConfigError::DuplicateSlug(slug.to_string()));
        }
        self.entries.insert(
            slug,
            Entry { config: Arc::new(config), factory: Box::new(factory) },
        );
        Ok(())
    }

    /// Static metadata for a slug.
    pub fn sim_config(&self, slug: &str) -> Result<Arc<SimConfig>, ConfigError> {
        self.entries
            .get(slug)
            .map(|e| Arc::clone(&e.config))
            .ok_or_else(|| ConfigError::UnknownSlug(slug.to_string()))
    }

    /// Build a fresh engine instance for a slug.
    pub fn create(&self, slug: &str) -> Result<SimulationEngine, ConfigError> {
        self.entries
            .get(slug)
            .map(|e| (e.factory)())
            .ok_or_else(|| ConfigError::UnknownSlug(slug.to_string()))
    }

    /// All registered slugs, sorted.
    pub fn slugs(&self) -> Vec<&'static str> {
        let mut slugs: Vec<_> = self.entries.keys().copied().collect();
        slugs.sort_unstable();
        slugs
    }

    /// Number of registered simulations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Category, ParamSpec};

    fn dummy_config(slug: &'static str) -> SimConfig {
        SimConfig::new(slug, "Dummy", Category::Mechanics)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry
            .register(dummy_config("a"), || SimulationEngine::new(dummy_config("a")))
            .unwrap();
        assert_eq!(registry.sim_config("a").unwrap().slug, "a");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_slug_errors() {
        let registry = Registry::new();
        let err = registry.sim_config("nope").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSlug(_)));
        assert!(registry.create("nope").is_err());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut registry = Registry::new();
        registry
            .register(dummy_config("a"), || SimulationEngine::new(dummy_config("a")))
            .unwrap();
        let err = registry
            .register(dummy_config("a"), || SimulationEngine::new(dummy_config("a")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSlug(_)));
    }

    #[test]
    fn test_malformed_config_rejected_at_registration() {
        let mut registry = Registry::new();
        let config = dummy_config("bad")
            .with_param(ParamSpec::new("x", "X", 10.0, 0.0, 5.0));
        let err = registry
            .register(config, || SimulationEngine::new(dummy_config("bad")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedParameter { .. }));
    }

    #[test]
    fn test_factories_produce_independent_engines() {
        let mut registry = Registry::new();
        registry
            .register(dummy_config("a"), || SimulationEngine::new(dummy_config("a")))
            .unwrap();
        let mut first = registry.create("a").unwrap();
        let second = registry.create("a").unwrap();
        first.init(100.0, 100.0);
        // The second instance is untouched by the first one's lifecycle.
        assert_ne!(first.phase(), second.phase());
    }

    #[test]
    fn test_slugs_sorted() {
        let mut registry = Registry::new();
        for slug in ["zeta", "alpha", "mid"] {
            let config = SimConfig::new(slug, "S", Category::Mechanics);
            let factory_config = config.clone();
            registry.register(config, move || SimulationEngine::new(factory_config.clone())).unwrap();
        }
        assert_eq!(registry.slugs(), vec!["alpha", "mid", "zeta"]);
    }
}
