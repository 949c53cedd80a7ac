//! Spawn context for particle initialization.
//!
//! Provides helper methods to reduce boilerplate when spawning particles,
//! and centralizes the RNG so every spawn is reproducible: the context is
//! seeded from the engine's seed and the particle index, never from the
//! clock. Calling `reset()` on an engine therefore rebuilds the exact
//! initial state `init()` produced.
//!
//! ```ignore
//! sim.with_spawner(|ctx| {
//!     Particle::at(ctx.random_in_bounds(20.0))
//!         .with_velocity(ctx.random_velocity(10.0, 40.0))
//!         .with_phase(ctx.random_range(0.0, TAU))
//! })
//! ```

use crate::particle::Bounds;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Context provided to spawner functions with helpers for common 2D spawn
/// patterns.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Current world bounds.
    pub bounds: Bounds,
    /// Internal RNG - use helper methods instead of accessing directly.
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a spawn context for one particle.
    ///
    /// The RNG seed mixes the engine seed with the particle index so each
    /// particle gets its own stream, identically on every reset.
    pub(crate) fn new(index: u32, count: u32, bounds: Bounds, engine_seed: u64) -> Self {
        let seed = engine_seed ^ (u64::from(index).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            index,
            count,
            bounds,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized progress through the spawn (0.0 to just under 1.0).
    ///
    /// Useful for distributing particles evenly:
    /// ```ignore
    /// let angle = ctx.progress() * TAU;  // Particles around a circle
    /// ```
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Randomly +1.0 or -1.0.
    #[inline]
    pub fn random_sign(&mut self) -> f32 {
        if self.rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    // ========== Position helpers ==========

    /// Random point inside a circle of given radius around `center`.
    ///
    /// Distribution is uniform over the area (square-root radial sampling).
    pub fn random_in_circle(&mut self, center: Vec2, radius: f32) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        let r = radius * self.rng.gen::<f32>().sqrt();
        center + Vec2::new(r * theta.cos(), r * theta.sin())
    }

    /// Random point on the rim of a circle of given radius around `center`.
    pub fn random_on_circle(&mut self, center: Vec2, radius: f32) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        center + Vec2::new(radius * theta.cos(), radius * theta.sin())
    }

    /// Random point inside the world bounds, inset by `margin` on all sides.
    pub fn random_in_bounds(&mut self, margin: f32) -> Vec2 {
        let x = self.random_range(margin, (self.bounds.width - margin).max(margin));
        let y = self.random_range(margin, (self.bounds.height - margin).max(margin));
        Vec2::new(x, y)
    }

    /// Position on a regular grid filling the bounds, derived from the
    /// particle index. `cols` columns; rows grow as needed.
    pub fn grid_position(&self, cols: u32, margin: f32) -> Vec2 {
        let cols = cols.max(1);
        let rows = self.count.div_ceil(cols).max(1);
        let col = self.index % cols;
        let row = self.index / cols;
        let cell_w = (self.bounds.width - 2.0 * margin) / cols as f32;
        let cell_h = (self.bounds.height - 2.0 * margin) / rows as f32;
        Vec2::new(
            margin + (col as f32 + 0.5) * cell_w,
            margin + (row as f32 + 0.5) * cell_h,
        )
    }

    // ========== Velocity helpers ==========

    /// Random velocity with uniformly random direction and a speed in the
    /// given range.
    pub fn random_velocity(&mut self, min_speed: f32, max_speed: f32) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        let speed = self.random_range(min_speed, max_speed);
        Vec2::new(theta.cos(), theta.sin()) * speed
    }
}
