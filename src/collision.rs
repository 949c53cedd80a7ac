//! Collision detection and resolution.
//!
//! Runs after each integration sub-step, in a fixed order: merges first
//! (accretion events change the particle count, and only here), then
//! pairwise elastic collisions, then wall response. Pairs are always visited
//! in ascending index order so simultaneous multi-body contacts resolve
//! deterministically; merge removal uses a splice-in-place loop that never
//! skips or double-processes an entity.
//!
//! # Example
//!
//! ```
//! use edusim::collision::Collisions;
//!
//! let mut c = Collisions::new();
//! c.bounce(0.9).elastic();
//! ```

use crate::particle::{Bounds, Particle};

/// How particles respond to the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallMode {
    /// Ignore the bounds entirely (orbits, open fields).
    #[default]
    None,
    /// Reflect the crossing velocity component and clamp position.
    ///
    /// `restitution` scales the reflected component: 1.0 is a perfect
    /// bounce, values below 1 lose energy on each impact.
    Bounce {
        /// Fraction of the normal velocity kept after impact, in [0, 1].
        restitution: f32,
    },
    /// Toroidal topology: leave one edge, reappear at the opposite one.
    Wrap,
}

/// Collision policy for one engine: wall response, pairwise elastic
/// collisions, and accretion merging.
///
/// Configured through a closure on the engine builder:
///
/// ```ignore
/// .with_collisions(|c| { c.bounce(1.0).elastic(); })
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collisions {
    wall: WallMode,
    elastic: bool,
    merge_radius_scale: Option<f32>,
}

impl Collisions {
    /// No walls, no particle collisions, no merging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounce off the world bounds with the given restitution.
    pub fn bounce(&mut self, restitution: f32) -> &mut Self {
        self.wall = WallMode::Bounce { restitution: restitution.clamp(0.0, 1.0) };
        self
    }

    /// Wrap around the world bounds.
    pub fn wrap(&mut self) -> &mut Self {
        self.wall = WallMode::Wrap;
        self
    }

    /// Enable pairwise elastic collisions between particles.
    pub fn elastic(&mut self) -> &mut Self {
        self.elastic = true;
        self
    }

    /// Enable accretion: overlapping particles merge, the survivor taking
    /// the combined mass, the momentum-weighted velocity, and a radius of
    /// `radius_scale * sqrt(mass)`.
    pub fn merge(&mut self, radius_scale: f32) -> &mut Self {
        self.merge_radius_scale = Some(radius_scale.max(0.0));
        self
    }

    /// Current wall mode.
    pub fn wall_mode(&self) -> WallMode {
        self.wall
    }

    /// Resolve all collisions for this step.
    pub fn resolve(&self, particles: &mut Vec<Particle>, bounds: Bounds) {
        if let Some(scale) = self.merge_radius_scale {
            merge_overlapping(particles, scale);
        }
        if self.elastic {
            resolve_elastic(particles);
        }
        match self.wall {
            WallMode::None => {}
            WallMode::Bounce { restitution } => bounce_walls(particles, bounds, restitution),
            WallMode::Wrap => wrap_walls(particles, bounds),
        }
    }
}

/// Merge overlapping particles into the lower-indexed survivor.
///
/// The inner cursor only advances past entities that did not merge, so a
/// splice never skips the element that slid into the removed slot.
fn merge_overlapping(particles: &mut Vec<Particle>, radius_scale: f32) {
    let mut i = 0;
    while i < particles.len() {
        let mut j = i + 1;
        while j < particles.len() {
            let dist = particles[i].position.distance(particles[j].position);
            if dist < particles[i].radius + particles[j].radius {
                let absorbed = particles.remove(j);
                let survivor = &mut particles[i];
                let total_mass = survivor.mass + absorbed.mass;
                survivor.velocity = (survivor.momentum() + absorbed.momentum()) / total_mass;
                survivor.position = (survivor.position * survivor.mass
                    + absorbed.position * absorbed.mass)
                    / total_mass;
                survivor.mass = total_mass;
                survivor.radius = radius_scale * total_mass.sqrt();
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}

/// Pairwise elastic collisions in ascending (i, j) index order.
fn resolve_elastic(particles: &mut [Particle]) {
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let delta = particles[j].position - particles[i].position;
            let dist = delta.length();
            let min_dist = particles[i].radius + particles[j].radius;
            if dist >= min_dist || dist <= f32::EPSILON {
                continue;
            }
            let normal = delta / dist;

            // Velocity components along the line of centers.
            let u1 = particles[i].velocity.dot(normal);
            let u2 = particles[j].velocity.dot(normal);
            if u1 - u2 <= 0.0 {
                // Already separating; only fix the overlap.
                let push = normal * ((min_dist - dist) * 0.5);
                particles[i].position -= push;
                particles[j].position += push;
                continue;
            }

            // 1D elastic exchange by conservation of momentum and energy.
            let m1 = particles[i].mass;
            let m2 = particles[j].mass;
            let v1 = ((m1 - m2) * u1 + 2.0 * m2 * u2) / (m1 + m2);
            let v2 = ((m2 - m1) * u2 + 2.0 * m1 * u1) / (m1 + m2);
            particles[i].velocity += normal * (v1 - u1);
            particles[j].velocity += normal * (v2 - u2);

            // Separate the overlap along the same axis.
            let push = normal * ((min_dist - dist) * 0.5);
            particles[i].position -= push;
            particles[j].position += push;
        }
    }
}

fn bounce_walls(particles: &mut [Particle], bounds: Bounds, restitution: f32) {
    for p in particles.iter_mut() {
        if p.position.x - p.radius < 0.0 {
            p.position.x = p.radius;
            p.velocity.x = p.velocity.x.abs() * restitution;
        } else if p.position.x + p.radius > bounds.width {
            p.position.x = bounds.width - p.radius;
            p.velocity.x = -p.velocity.x.abs() * restitution;
        }
        if p.position.y - p.radius < 0.0 {
            p.position.y = p.radius;
            p.velocity.y = p.velocity.y.abs() * restitution;
        } else if p.position.y + p.radius > bounds.height {
            p.position.y = bounds.height - p.radius;
            p.velocity.y = -p.velocity.y.abs() * restitution;
        }
    }
}

fn wrap_walls(particles: &mut [Particle], bounds: Bounds) {
    for p in particles.iter_mut() {
        p.position.x = p.position.x.rem_euclid(bounds.width.max(f32::EPSILON));
        p.position.y = p.position.y.rem_euclid(bounds.height.max(f32::EPSILON));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::total_momentum;
    use glam::Vec2;

    fn head_on_pair(m1: f32, m2: f32, v1: f32, v2: f32) -> Vec<Particle> {
        vec![
            Particle::at(Vec2::new(0.0, 0.0))
                .with_mass(m1)
                .with_radius(5.0)
                .with_velocity(Vec2::new(v1, 0.0)),
            Particle::at(Vec2::new(8.0, 0.0)) // overlapping: 8 < 5 + 5
                .with_mass(m2)
                .with_radius(5.0)
                .with_velocity(Vec2::new(v2, 0.0)),
        ]
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        let mut particles = head_on_pair(1.0, 1.0, 5.0, -5.0);
        let mut c = Collisions::new();
        c.elastic();
        c.resolve(&mut particles, Bounds::new(1000.0, 1000.0));
        assert!((particles[0].velocity.x + 5.0).abs() < 1e-4);
        assert!((particles[1].velocity.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_unequal_mass_collision_conserves_momentum() {
        let mut particles = head_on_pair(3.0, 1.5, 4.0, -2.0);
        let before = total_momentum(&particles);
        let mut c = Collisions::new();
        c.elastic();
        c.resolve(&mut particles, Bounds::new(1000.0, 1000.0));
        let after = total_momentum(&particles);
        assert!((before - after).length() < 1e-3);
        // And it actually did something.
        assert!((particles[0].velocity.x - 4.0).abs() > 0.1);
    }

    #[test]
    fn test_separating_pair_is_left_alone_kinematically() {
        // Overlapping but moving apart: velocities unchanged, overlap fixed.
        let mut particles = head_on_pair(1.0, 1.0, -3.0, 3.0);
        let mut c = Collisions::new();
        c.elastic();
        c.resolve(&mut particles, Bounds::new(1000.0, 1000.0));
        assert_eq!(particles[0].velocity.x, -3.0);
        assert_eq!(particles[1].velocity.x, 3.0);
        let gap = particles[1].position.x - particles[0].position.x;
        assert!(gap >= 10.0 - 1e-4);
    }

    #[test]
    fn test_distant_pair_untouched() {
        let mut particles = vec![
            Particle::at(Vec2::new(0.0, 0.0)).with_velocity(Vec2::new(5.0, 0.0)),
            Particle::at(Vec2::new(500.0, 0.0)).with_velocity(Vec2::new(-5.0, 0.0)),
        ];
        let before = particles.clone();
        let mut c = Collisions::new();
        c.elastic();
        c.resolve(&mut particles, Bounds::new(1000.0, 1000.0));
        assert_eq!(particles, before);
    }

    #[test]
    fn test_bounce_clamps_and_reflects_with_restitution() {
        let mut particles = vec![Particle::at(Vec2::new(-4.0, 50.0))
            .with_radius(3.0)
            .with_velocity(Vec2::new(-10.0, 0.0))];
        let mut c = Collisions::new();
        c.bounce(0.5);
        c.resolve(&mut particles, Bounds::new(100.0, 100.0));
        assert_eq!(particles[0].position.x, 3.0);
        assert!((particles[0].velocity.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_carries_particle_to_opposite_edge() {
        let mut particles =
            vec![Particle::at(Vec2::new(105.0, 50.0)).with_velocity(Vec2::new(10.0, 0.0))];
        let mut c = Collisions::new();
        c.wrap();
        c.resolve(&mut particles, Bounds::new(100.0, 100.0));
        assert!((particles[0].position.x - 5.0).abs() < 1e-4);
        assert_eq!(particles[0].velocity.x, 10.0); // wrap never alters velocity
    }

    #[test]
    fn test_merge_conserves_mass_and_momentum() {
        let mut particles = vec![
            Particle::at(Vec2::new(0.0, 0.0))
                .with_mass(4.0)
                .with_radius(6.0)
                .with_velocity(Vec2::new(2.0, 0.0)),
            Particle::at(Vec2::new(5.0, 0.0))
                .with_mass(1.0)
                .with_radius(6.0)
                .with_velocity(Vec2::new(-3.0, 0.0)),
        ];
        let before = total_momentum(&particles);
        let mut c = Collisions::new();
        c.merge(2.0);
        c.resolve(&mut particles, Bounds::new(1000.0, 1000.0));
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].mass, 5.0);
        assert!((total_momentum(&particles) - before).length() < 1e-4);
        assert!((particles[0].radius - 2.0 * 5.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_merge_chain_collapses_cluster() {
        // Three mutually overlapping bodies collapse to one without
        // skipping the middle entity during splicing.
        let mut particles = vec![
            Particle::at(Vec2::new(0.0, 0.0)).with_radius(10.0),
            Particle::at(Vec2::new(5.0, 0.0)).with_radius(10.0),
            Particle::at(Vec2::new(10.0, 0.0)).with_radius(10.0),
        ];
        let mut c = Collisions::new();
        c.merge(1.0);
        c.resolve(&mut particles, Bounds::new(1000.0, 1000.0));
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].mass, 3.0);
    }

    #[test]
    fn test_multi_collision_is_deterministic() {
        let setup = || {
            vec![
                Particle::at(Vec2::new(0.0, 0.0)).with_radius(4.0).with_velocity(Vec2::new(3.0, 0.0)),
                Particle::at(Vec2::new(6.0, 0.0)).with_radius(4.0),
                Particle::at(Vec2::new(12.0, 0.0)).with_radius(4.0).with_velocity(Vec2::new(-3.0, 0.0)),
            ]
        };
        let mut a = setup();
        let mut b = setup();
        let mut c = Collisions::new();
        c.elastic();
        c.resolve(&mut a, Bounds::new(1000.0, 1000.0));
        c.resolve(&mut b, Bounds::new(1000.0, 1000.0));
        assert_eq!(a, b);
    }
}
