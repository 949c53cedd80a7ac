//! Chemical equilibrium A ⇌ B.
//!
//! Sixty molecules drifting through a wrapped box, each flipping between
//! species A and B under first-order kinetics. Every molecule carries a
//! reaction progress in its `phase` field: it advances at the forward rate
//! while the molecule is A and at the reverse rate while it is B, flipping
//! species each time it wraps. The ensemble therefore relaxes to a B
//! fraction of `kf / (kf + kb)`, the same equilibrium constant the rate
//! equation predicts, while the motion stays pure decoration.

use crate::engine::SimulationEngine;
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use crate::visuals::ColorMapping;
use glam::Vec4;

const COUNT: u32 = 60;
const FORWARD_RATE: f32 = 1.2;
const REVERSE_RATE: f32 = 0.6;

const BACKGROUND: Vec4 = Vec4::new(0.04, 0.03, 0.06, 1.0);
const SPECIES_A: Vec4 = Vec4::new(0.90, 0.35, 0.30, 1.0);
const SPECIES_B: Vec4 = Vec4::new(0.30, 0.55, 0.95, 1.0);

/// Fraction of molecules currently in species B.
fn fraction_b(particles: &[Particle]) -> f32 {
    if particles.is_empty() {
        return 0.0;
    }
    particles.iter().filter(|p| p.kind == 1).count() as f32 / particles.len() as f32
}

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("equilibrium", "Chemical Equilibrium", Category::Chemistry)
        .with_param(ParamSpec::new("forward", "Forward rate kf (1/s)", 0.0, 4.0, FORWARD_RATE))
        .with_param(ParamSpec::new("reverse", "Reverse rate kb (1/s)", 0.0, 4.0, REVERSE_RATE))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    let mapping = ColorMapping::Kind(vec![SPECIES_A, SPECIES_B]);
    SimulationEngine::new(config())
        .with_particle_count(COUNT)
        .with_spawner(|ctx| {
            // Everyone starts as A with a random reaction progress, so the
            // first flips are staggered instead of arriving in one burst.
            Particle::at(ctx.random_in_bounds(20.0))
                .with_velocity(ctx.random_velocity(30.0, 80.0))
                .with_radius(6.0)
                .with_phase(ctx.random())
        })
        .with_collisions(|c| {
            c.wrap();
        })
        .with_behavior(|particles, dt, params, _| {
            let kf = params.get_or("forward", FORWARD_RATE);
            let kb = params.get_or("reverse", REVERSE_RATE);
            for p in particles {
                let rate = if p.kind == 0 { kf } else { kb };
                p.phase += rate * dt;
                if p.phase >= 1.0 {
                    p.phase -= 1.0;
                    p.kind = 1 - p.kind;
                }
            }
        })
        .with_renderer(move |view, canvas| {
            canvas.clear(BACKGROUND);
            for p in view.particles {
                canvas.fill_circle(p.position, p.radius, mapping.color(p));
            }
        })
        .with_describer(|view| {
            let b = fraction_b(view.particles);
            let n = view.particles.len();
            format!(
                "Chemical Equilibrium: [A] = {}, [B] = {}, B fraction {:.2}, t = {:.1} s",
                ((1.0 - b) * n as f32).round() as u32,
                (b * n as f32).round() as u32,
                b,
                view.elapsed,
            )
        })
}
