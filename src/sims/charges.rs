//! Electric charges.
//!
//! A dozen signed charges under pairwise Coulomb forces with velocity
//! damping, bouncing off the container walls. Like signs scatter, unlike
//! signs pair up into dipole clusters once the damping has eaten the
//! initial kinetic energy.

use crate::engine::SimulationEngine;
use crate::force::{ForceLaw, DEFAULT_SOFTENING};
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use crate::visuals::ColorMapping;
use glam::{Vec2, Vec4};

const COUNT: u32 = 12;
const COULOMB_K: f32 = 6000.0;
const DAMPING: f32 = 0.5;

const BACKGROUND: Vec4 = Vec4::new(0.04, 0.04, 0.07, 1.0);
const POSITIVE: Vec4 = Vec4::new(0.90, 0.30, 0.25, 1.0);
const NEGATIVE: Vec4 = Vec4::new(0.25, 0.45, 0.95, 1.0);
const LABEL: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.9);

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("charges", "Electric Charges", Category::Electromagnetism)
        .with_param(ParamSpec::new("coulomb", "Coulomb constant", 500.0, 20000.0, COULOMB_K))
        .with_param(ParamSpec::new("damping", "Damping", 0.0, 2.0, DAMPING))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    let mapping = ColorMapping::Charge {
        positive: POSITIVE,
        negative: NEGATIVE,
        neutral: Vec4::new(0.5, 0.5, 0.5, 1.0),
    };
    SimulationEngine::new(config())
        .with_particle_count(COUNT)
        .with_spawner(|ctx| {
            // Alternate signs by index so the net charge is exactly zero.
            let sign = if ctx.index % 2 == 0 { 1.0 } else { -1.0 };
            Particle::at(ctx.random_in_bounds(60.0))
                .with_velocity(ctx.random_velocity(20.0, 60.0))
                .with_charge(sign)
                .with_radius(10.0)
        })
        .with_force(ForceLaw::Coulomb { k: COULOMB_K, softening: DEFAULT_SOFTENING })
        .with_force(ForceLaw::Drag(DAMPING))
        .with_substeps(2)
        .with_collisions(|c| {
            c.bounce(0.85);
        })
        .with_controls(|params, physics| {
            physics.forces[0] = ForceLaw::Coulomb {
                k: params.get_or("coulomb", COULOMB_K),
                softening: DEFAULT_SOFTENING,
            };
            physics.forces[1] = ForceLaw::Drag(params.get_or("damping", DAMPING));
        })
        .with_renderer(move |view, canvas| {
            canvas.clear(BACKGROUND);
            for p in view.particles {
                canvas.fill_circle(p.position, p.radius, mapping.color(p));
                let label = if p.charge > 0.0 { "+" } else { "\u{2212}" };
                canvas.text(p.position - Vec2::new(3.0, -4.0), label, 12.0, LABEL);
            }
        })
        .with_describer(|view| {
            let net: f32 = view.particles.iter().map(|p| p.charge).sum();
            let mean_speed: f32 =
                view.particles.iter().map(Particle::speed).sum::<f32>() / view.particles.len() as f32;
            format!(
                "Electric Charges: {} charges, net charge {:.0}, mean speed {:.0} px/s, t = {:.1} s",
                view.particles.len(),
                net,
                mean_speed,
                view.elapsed,
            )
        })
}
