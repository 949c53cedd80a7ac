//! Force laws.
//!
//! A [`ForceLaw`] is a pure function from the particle set to one particle's
//! acceleration. Laws are composed by summation: the engine applies every
//! configured law once per particle per sub-step, in order, with no side
//! effects.
//!
//! # Softening
//!
//! Every inverse-square law carries an explicit `softening` field: a small
//! constant added to the squared distance before division. This bounds the
//! acceleration as two bodies approach (no division by zero, no NaN fling),
//! and is a tunable parameter rather than a magic number buried in each
//! simulation.
//!
//! # Example
//!
//! ```
//! use edusim::force::{net_accel, ForceLaw, DEFAULT_SOFTENING};
//! use edusim::particle::Particle;
//! use glam::Vec2;
//!
//! let forces = vec![
//!     ForceLaw::NBodyGravity { g: 400.0, softening: DEFAULT_SOFTENING },
//!     ForceLaw::Drag(0.1),
//! ];
//! let particles = vec![
//!     Particle::at(Vec2::new(0.0, 0.0)).with_mass(50.0),
//!     Particle::at(Vec2::new(100.0, 0.0)),
//! ];
//! let a = net_accel(&forces, 1, &particles);
//! assert!(a.x < 0.0); // pulled toward the heavy body
//! ```

use crate::particle::Particle;
use glam::Vec2;

/// Default softening constant for inverse-square laws, in squared distance
/// units. Suits pixel-scale simulations where bodies sit tens to hundreds of
/// units apart.
pub const DEFAULT_SOFTENING: f32 = 100.0;

/// A pure force law mapping particle state to acceleration.
///
/// Laws never mutate state and never look at anything outside the particle
/// slice they are given, so they can be evaluated at RK4 trial states as
/// freely as at the real one.
#[derive(Debug, Clone, PartialEq)]
pub enum ForceLaw {
    /// Uniform downward acceleration (canvas y grows downward).
    ///
    /// # Example
    ///
    /// ```ignore
    /// ForceLaw::Gravity(9.8)    // Earth-like
    /// ForceLaw::Gravity(400.0)  // pixel-scale
    /// ```
    Gravity(f32),

    /// Pairwise Newtonian attraction between all particles.
    ///
    /// Acceleration on particle `i` from each other particle `j`:
    /// `g * m_j / (r² + softening)` toward `j`.
    NBodyGravity {
        /// Gravitational constant in the simulation's units.
        g: f32,
        /// Softening constant added to r².
        softening: f32,
    },

    /// Attraction toward a fixed point (a central star, the canvas center).
    ///
    /// Acceleration magnitude is `strength / (r² + softening)` where
    /// `strength` plays the role of `G * M` for the central body.
    PointGravity {
        /// The attracting point.
        center: Vec2,
        /// `G * M` of the central body.
        strength: f32,
        /// Softening constant added to r².
        softening: f32,
    },

    /// Pairwise Coulomb force between charged particles.
    ///
    /// Force magnitude on particle `i` from `j` is
    /// `k * q_i * q_j / (r² + softening)`; like charges repel, unlike
    /// attract. Acceleration divides by the particle's own mass. Neutral
    /// particles (charge 0) are unaffected.
    Coulomb {
        /// Coulomb constant in the simulation's units.
        k: f32,
        /// Softening constant added to r².
        softening: f32,
    },

    /// Hookean spring pulling each particle toward its own rest position
    /// (`Particle::home`), with optional damping:
    /// `a = -(k/m)·x - (c/m)·v`.
    Spring {
        /// Spring stiffness `k`.
        stiffness: f32,
        /// Damping coefficient `c`.
        damping: f32,
    },

    /// Thermal buoyancy: warmer-than-ambient particles rise, cooler sink.
    ///
    /// `a_y = -gravity * expansion * (T - ambient)`; negative y is up in
    /// canvas convention.
    Buoyancy {
        /// Local gravitational acceleration.
        gravity: f32,
        /// Thermal expansion coefficient `β`.
        expansion: f32,
        /// Ambient temperature `T_ambient`.
        ambient: f32,
    },

    /// Linear drag opposing velocity: `a = -c·v`.
    Drag(f32),
}

impl ForceLaw {
    /// Acceleration this law contributes to particle `index`.
    ///
    /// Pure: reads the slice, returns a vector, touches nothing else.
    pub fn accel(&self, index: usize, particles: &[Particle]) -> Vec2 {
        let p = &particles[index];
        match *self {
            ForceLaw::Gravity(g) => Vec2::new(0.0, g),

            ForceLaw::NBodyGravity { g, softening } => {
                let mut total = Vec2::ZERO;
                for (j, other) in particles.iter().enumerate() {
                    if j == index {
                        continue;
                    }
                    let delta = other.position - p.position;
                    let r2 = delta.length_squared() + softening.max(0.0);
                    let magnitude = g * other.mass / r2;
                    total += delta * (magnitude / r2.sqrt());
                }
                total
            }

            ForceLaw::PointGravity { center, strength, softening } => {
                let delta = center - p.position;
                let r2 = delta.length_squared() + softening.max(0.0);
                delta * (strength / r2 / r2.sqrt())
            }

            ForceLaw::Coulomb { k, softening } => {
                if p.charge == 0.0 {
                    return Vec2::ZERO;
                }
                let mut total = Vec2::ZERO;
                for (j, other) in particles.iter().enumerate() {
                    if j == index || other.charge == 0.0 {
                        continue;
                    }
                    // Positive product pushes i away from j.
                    let away = p.position - other.position;
                    let r2 = away.length_squared() + softening.max(0.0);
                    let force = k * p.charge * other.charge / r2;
                    total += away * (force / r2.sqrt());
                }
                total / p.mass
            }

            ForceLaw::Spring { stiffness, damping } => {
                let displacement = p.position - p.home;
                (displacement * -stiffness - p.velocity * damping) / p.mass
            }

            ForceLaw::Buoyancy { gravity, expansion, ambient } => {
                Vec2::new(0.0, -gravity * expansion * (p.temperature - ambient))
            }

            ForceLaw::Drag(c) => p.velocity * -c,
        }
    }
}

/// Sum of all force-law contributions to particle `index`.
pub fn net_accel(forces: &[ForceLaw], index: usize, particles: &[Particle]) -> Vec2 {
    forces
        .iter()
        .fold(Vec2::ZERO, |acc, law| acc + law.accel(index, particles))
}
