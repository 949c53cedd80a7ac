//! Orbital mechanics with accretion.
//!
//! A heavy star at the canvas center and a disc of planetesimals on
//! near-circular prograde orbits. Bodies that touch merge, conserving mass
//! and momentum, so the disc slowly accretes into fewer, larger bodies.
//! The star is just particle 0 with a large mass; it feels the disc's pull
//! like everything else.

use crate::canvas::twinkle;
use crate::engine::SimulationEngine;
use crate::force::{ForceLaw, DEFAULT_SOFTENING};
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use glam::{Vec2, Vec4};
use std::f32::consts::TAU;

/// Star plus planetesimals.
const COUNT: u32 = 61;
/// Mass of the central star.
const STAR_MASS: f32 = 6000.0;
/// Radius per unit √mass, shared with the merge policy so accreted bodies
/// keep the same mass-to-size relation they spawned with.
const RADIUS_SCALE: f32 = 1.5;
/// Default gravitational constant.
const GRAVITY: f32 = 400.0;
/// Disc inner and outer radii, in pixels.
const DISC_INNER: f32 = 90.0;
const DISC_OUTER: f32 = 260.0;

const BACKGROUND: Vec4 = Vec4::new(0.01, 0.01, 0.03, 1.0);
const STAR: Vec4 = Vec4::new(1.0, 0.85, 0.45, 1.0);
const BODY: Vec4 = Vec4::new(0.75, 0.82, 0.95, 1.0);

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("orbits", "Orbits & Accretion", Category::Astronomy)
        .with_param(ParamSpec::new("gravity", "Gravitational constant", 100.0, 1000.0, GRAVITY))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    SimulationEngine::new(config())
        .with_particle_count(COUNT)
        .with_spawner(|ctx| {
            let center = ctx.bounds.center();
            if ctx.index == 0 {
                return Particle::at(center)
                    .with_mass(STAR_MASS)
                    .with_radius(16.0)
                    .with_kind(1);
            }
            let r = ctx.random_range(DISC_INNER, DISC_OUTER);
            let theta = ctx.random_range(0.0, TAU);
            let radial = Vec2::new(theta.cos(), theta.sin());
            // Circular-orbit speed for the default constant, jittered so
            // orbits come out slightly eccentric.
            let speed = (GRAVITY * STAR_MASS / r).sqrt() * ctx.random_range(0.9, 1.1);
            let tangent = Vec2::new(-radial.y, radial.x);
            let mass = ctx.random_range(1.0, 4.0);
            Particle::at(center + radial * r)
                .with_velocity(tangent * speed)
                .with_mass(mass)
                .with_radius(RADIUS_SCALE * mass.sqrt())
                .with_phase(ctx.random_range(0.0, TAU))
        })
        .with_force(ForceLaw::NBodyGravity { g: GRAVITY, softening: DEFAULT_SOFTENING })
        .with_substeps(4)
        .with_collisions(|c| {
            c.merge(RADIUS_SCALE);
        })
        .with_controls(|params, physics| {
            physics.forces[0] = ForceLaw::NBodyGravity {
                g: params.get_or("gravity", GRAVITY),
                softening: DEFAULT_SOFTENING,
            };
        })
        .with_renderer(|view, canvas| {
            canvas.clear(BACKGROUND);
            for p in view.particles {
                if p.kind == 1 {
                    canvas.fill_circle(p.position, p.radius, STAR);
                    canvas.stroke_circle(p.position, p.radius + 5.0, 2.0, STAR * 0.4);
                } else {
                    let glow = twinkle(view.elapsed, 0.8, p.phase);
                    canvas.fill_circle(p.position, p.radius, BODY * (0.55 + 0.45 * glow));
                }
            }
        })
        .with_describer(|view| {
            let total_mass: f32 = view.particles.iter().map(|p| p.mass).sum();
            format!(
                "Orbits & Accretion: {} bodies, total mass {:.0}, t = {:.1} s",
                view.particles.len(),
                total_mass,
                view.elapsed,
            )
        })
}
