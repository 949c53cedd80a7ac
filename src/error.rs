//! Error types for edusim.
//!
//! Only configuration can fail here: unknown simulation slugs, duplicate
//! registrations, malformed parameter definitions. Everything on the frame
//! path (update/render) is infallible by design; numeric trouble is clamped
//! to valid ranges rather than surfaced as an error.

use std::fmt;

/// Errors that can occur while loading or looking up simulation configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No simulation registered under the requested slug.
    UnknownSlug(String),
    /// A simulation with this slug is already registered.
    DuplicateSlug(String),
    /// A parameter definition is unusable (min > max, non-finite bounds,
    /// default outside [min, max]).
    MalformedParameter {
        /// Slug of the simulation the parameter belongs to.
        slug: String,
        /// Key of the offending parameter.
        key: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownSlug(slug) => {
                write!(f, "No simulation registered under slug '{}'", slug)
            }
            ConfigError::DuplicateSlug(slug) => {
                write!(f, "A simulation is already registered under slug '{}'", slug)
            }
            ConfigError::MalformedParameter { slug, key, reason } => {
                write!(f, "Parameter '{}' of simulation '{}' is malformed: {}", key, slug, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_slug() {
        let err = ConfigError::UnknownSlug("warp-drive".into());
        assert!(err.to_string().contains("warp-drive"));
    }

    #[test]
    fn test_display_malformed_parameter() {
        let err = ConfigError::MalformedParameter {
            slug: "gas".into(),
            key: "temperature".into(),
            reason: "min > max".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gas"));
        assert!(msg.contains("temperature"));
        assert!(msg.contains("min > max"));
    }
}
