//! # edusim - Interactive Science Simulations
//!
//! Deterministic 2D particle simulations for teaching physics, chemistry
//! and astronomy, built from composable force laws and a uniform host
//! lifecycle.
//!
//! Every simulation is a [`SimulationEngine`]: force laws plus an explicit
//! integrator plus a collision policy, driven through the same
//! `init / update / render / reset / resize / destroy` contract so a host
//! shell (a canvas, a test, a script) can run any of them identically.
//!
//! ## Quick Start
//!
//! ```
//! use edusim::prelude::*;
//!
//! let mut engine = SimulationEngine::new(
//!     SimConfig::new("drop", "Falling ball", Category::Mechanics),
//! )
//! .with_particle_count(1)
//! .with_spawner(|ctx| Particle::at(ctx.bounds.center()))
//! .with_force(ForceLaw::Gravity(400.0))
//! .with_collisions(|c| {
//!     c.bounce(0.8);
//! });
//!
//! engine.init(800.0, 600.0);
//! engine.update(1.0 / 60.0, &ParameterSet::new());
//!
//! let mut frame = DrawList::new();
//! engine.render(&mut frame);
//! ```
//!
//! ## Core Concepts
//!
//! ### Force laws
//!
//! [`ForceLaw`] variants compute per-particle accelerations. They compose:
//! the engine sums every law each sub-step.
//!
//! ```ignore
//! .with_force(ForceLaw::NBodyGravity { g: 400.0, softening: 100.0 })
//! .with_force(ForceLaw::Drag(0.5))
//! ```
//!
//! ### Integrators
//!
//! [`Integrator::SymplecticEuler`] is the default: velocity first, then
//! position, which keeps oscillating systems from gaining energy. Use
//! [`Integrator::Rk4`] where trajectory accuracy matters more, and
//! `with_substeps` to tame stiff forces.
//!
//! ### Determinism
//!
//! Spawning draws from a seeded RNG ([`SpawnContext`]), never from the
//! clock, and `update` takes the timestep as an argument. Same seed, same
//! parameter history, same timesteps: identical runs, which is what makes
//! the simulations testable.
//!
//! ### Registry
//!
//! [`Registry::with_builtins`] serves the catalog of shipped simulations
//! by slug:
//!
//! ```
//! use edusim::prelude::*;
//!
//! let registry = Registry::with_builtins();
//! let mut orbits = registry.create("orbits").unwrap();
//! orbits.init(800.0, 600.0);
//! ```
//!
//! ## Built-in Simulations
//!
//! | Slug | Category | Shows |
//! |------|----------|-------|
//! | `pendulum-wave` | Mechanics | oscillators drifting in and out of phase |
//! | `spring-mass` | Mechanics | damped harmonic motion |
//! | `projectile` | Mechanics | launch arc with drag and restitution |
//! | `orbits` | Astronomy | N-body gravity with accretion merging |
//! | `charges` | Electromagnetism | Coulomb attraction and repulsion |
//! | `gas` | Thermodynamics | ideal-gas box with a thermostat |
//! | `convection` | Thermodynamics | buoyant circulation over a heated floor |
//! | `equilibrium` | Chemistry | A ⇌ B relaxing to kf/(kf+kb) |

pub mod canvas;
pub mod clock;
pub mod collision;
pub mod engine;
pub mod error;
pub mod force;
pub mod integrator;
pub mod params;
pub mod particle;
pub mod registry;
pub mod sims;
pub mod spawn;
pub mod visuals;

pub use canvas::{Canvas, DrawCommand, DrawList};
pub use clock::{SimClock, MAX_FRAME_DELTA};
pub use collision::{Collisions, WallMode};
pub use engine::{Phase, Physics, SimView, SimulationEngine};
pub use error::ConfigError;
pub use force::ForceLaw;
pub use glam::{Vec2, Vec3, Vec4};
pub use integrator::Integrator;
pub use params::{Category, ParamSpec, ParameterSet, SimConfig};
pub use particle::{Bounds, Particle};
pub use registry::Registry;
pub use spawn::SpawnContext;
pub use visuals::{ColorMapping, Palette};

/// Convenient re-exports for common usage.
///
/// ```
/// use edusim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, DrawCommand, DrawList};
    pub use crate::clock::SimClock;
    pub use crate::collision::Collisions;
    pub use crate::engine::{Phase, Physics, SimView, SimulationEngine};
    pub use crate::error::ConfigError;
    pub use crate::force::ForceLaw;
    pub use crate::integrator::Integrator;
    pub use crate::params::{Category, ParamSpec, ParameterSet, SimConfig};
    pub use crate::particle::{Bounds, Particle};
    pub use crate::registry::Registry;
    pub use crate::spawn::SpawnContext;
    pub use crate::visuals::{ColorMapping, Palette};
    pub use crate::{Vec2, Vec3, Vec4};
}
