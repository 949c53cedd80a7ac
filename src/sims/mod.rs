//! Built-in simulations.
//!
//! Each module wires the harness (force laws, an integrator, a collision
//! policy, a renderer and a describer) into one educational visualization,
//! exposing `config()` (static metadata) and `engine()` (a registry
//! factory). None of them carry their own integration loops; everything
//! physical goes through [`crate::engine::SimulationEngine`].
//!
//! | Slug | Category | Shows |
//! |------|----------|-------|
//! | `pendulum-wave` | Mechanics | index-tuned oscillators drifting in and out of phase |
//! | `spring-mass` | Mechanics | damped harmonic motion (RK4) |
//! | `projectile` | Mechanics | launch arc with drag and floor restitution |
//! | `orbits` | Astronomy | N-body gravity with accretion merging |
//! | `charges` | Electromagnetism | signed charges under Coulomb forces |
//! | `gas` | Thermodynamics | ideal-gas box with a thermostat slider |
//! | `convection` | Thermodynamics | buoyant circulation over a heated floor |
//! | `equilibrium` | Chemistry | A ⇌ B populations relaxing to K = kf/kb |

pub mod charges;
pub mod convection;
pub mod equilibrium;
pub mod gas;
pub mod orbits;
pub mod pendulum_wave;
pub mod projectile;
pub mod spring;

use crate::error::ConfigError;
use crate::registry::Registry;

/// Register every built-in simulation.
pub fn register_builtins(registry: &mut Registry) -> Result<(), ConfigError> {
    registry.register(pendulum_wave::config(), pendulum_wave::engine)?;
    registry.register(spring::config(), spring::engine)?;
    registry.register(projectile::config(), projectile::engine)?;
    registry.register(orbits::config(), orbits::engine)?;
    registry.register(charges::config(), charges::engine)?;
    registry.register(gas::config(), gas::engine)?;
    registry.register(convection::config(), convection::engine)?;
    registry.register(equilibrium::config(), equilibrium::engine)?;
    Ok(())
}
