//! Particle state and world bounds.
//!
//! One [`Particle`] struct serves every simulation: position/velocity plus
//! the scalar attributes the force laws read (mass, charge, temperature,
//! radius, type tag). Attributes a simulation does not use simply stay at
//! their defaults. Visual randomness (twinkle) lives in the `phase` field,
//! set once at spawn, so rendering stays deterministic frame to frame.

use glam::Vec2;

/// State of a single simulated body.
///
/// Owned exclusively by the engine that spawned it; mutated only during
/// `update`, never during `render`.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in the simulation's own units (usually pixels).
    pub position: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Rest position, the anchor spring forces pull toward. Set at spawn.
    pub home: Vec2,
    /// Mass in the simulation's mass unit. Must stay positive.
    pub mass: f32,
    /// Signed charge, for Coulomb forces. Zero for neutral bodies.
    pub charge: f32,
    /// Visual and collision radius.
    pub radius: f32,
    /// Temperature, for buoyancy. Clamped to >= 0 by the engine.
    pub temperature: f32,
    /// Simulation-specific type tag (species, acid/base, planet class).
    pub kind: u32,
    /// Fixed phase offset for deterministic visual effects.
    pub phase: f32,
}

impl Particle {
    /// Create a particle at rest at `position` with unit mass and defaults
    /// for every other attribute.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            home: position,
            mass: 1.0,
            charge: 0.0,
            radius: 3.0,
            temperature: 0.0,
            kind: 0,
            phase: 0.0,
        }
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the rest position independently of the spawn position.
    pub fn with_home(mut self, home: Vec2) -> Self {
        self.home = home;
        self
    }

    /// Set the mass.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Set the signed charge.
    pub fn with_charge(mut self, charge: f32) -> Self {
        self.charge = charge;
        self
    }

    /// Set the radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the type tag.
    pub fn with_kind(mut self, kind: u32) -> Self {
        self.kind = kind;
        self
    }

    /// Set the visual phase offset.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Kinetic energy `½mv²`.
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Momentum `mv`.
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Current speed.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Total kinetic energy of a particle set.
pub fn total_kinetic_energy(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

/// Total momentum of a particle set.
pub fn total_momentum(particles: &[Particle]) -> Vec2 {
    particles.iter().map(Particle::momentum).fold(Vec2::ZERO, |a, b| a + b)
}

/// Rectangular world bounds, `[0, width] x [0, height]` in canvas
/// convention (y grows downward).
///
/// Updated only via `resize`; existing particle positions are never rescaled,
/// only future containment checks change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width in simulation units.
    pub width: f32,
    /// Height in simulation units.
    pub height: f32,
}

impl Bounds {
    /// Create bounds of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the bounds.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether a point lies inside the bounds.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinetic_energy() {
        let p = Particle::at(Vec2::ZERO)
            .with_mass(2.0)
            .with_velocity(Vec2::new(3.0, 4.0));
        // ½ · 2 · 25
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_total_momentum_cancels() {
        let particles = vec![
            Particle::at(Vec2::ZERO).with_velocity(Vec2::new(5.0, 0.0)),
            Particle::at(Vec2::new(10.0, 0.0)).with_velocity(Vec2::new(-5.0, 0.0)),
        ];
        let p = total_momentum(&particles);
        assert!(p.length() < 1e-6);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(bounds.contains(Vec2::new(400.0, 300.0)));
        assert!(bounds.contains(Vec2::ZERO));
        assert!(!bounds.contains(Vec2::new(801.0, 300.0)));
        assert!(!bounds.contains(Vec2::new(400.0, -0.1)));
    }

    #[test]
    fn test_bounds_center() {
        assert_eq!(Bounds::new(800.0, 600.0).center(), Vec2::new(400.0, 300.0));
    }
}
