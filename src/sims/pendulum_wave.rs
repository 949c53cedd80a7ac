//! Pendulum wave.
//!
//! A row of oscillators whose frequencies step up by one cycle per pattern
//! period from left to right, so they drift out of phase into travelling
//! waves and snap back into line once per period. Implemented as anchored
//! springs sharing one stiffness with index-tuned masses: `ω = √(k/m)`, so
//! `m_i = k / ω_i²` pins each oscillator to its target frequency.

use crate::engine::SimulationEngine;
use crate::force::ForceLaw;
use crate::integrator::Integrator;
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use crate::visuals::Palette;
use glam::{Vec2, Vec4};
use std::f32::consts::TAU;

/// Number of oscillators.
const COUNT: u32 = 15;
/// Cycles the slowest oscillator completes per pattern period.
const BASE_CYCLES: f32 = 20.0;
/// Seconds for the whole row to realign.
const PATTERN_PERIOD: f32 = 40.0;
/// Shared spring stiffness the masses are tuned against.
const STIFFNESS: f32 = 20.0;
/// Initial vertical displacement, in pixels.
const AMPLITUDE: f32 = 90.0;

const BACKGROUND: Vec4 = Vec4::new(0.02, 0.02, 0.06, 1.0);
const ROD: Vec4 = Vec4::new(0.35, 0.35, 0.42, 1.0);

/// Angular frequency assigned to oscillator `i`.
fn omega(i: u32) -> f32 {
    TAU * (BASE_CYCLES + i as f32) / PATTERN_PERIOD
}

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("pendulum-wave", "Pendulum Wave", Category::Mechanics)
        .with_param(ParamSpec::new("stiffness", "Stiffness (N/m)", 5.0, 80.0, STIFFNESS))
        .with_param(ParamSpec::new("damping", "Damping (N·s/m)", 0.0, 0.5, 0.0))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    SimulationEngine::new(config())
        .with_particle_count(COUNT)
        .with_spawner(|ctx| {
            let x = ctx.bounds.width * (ctx.index + 1) as f32 / (ctx.count + 1) as f32;
            let home = Vec2::new(x, ctx.bounds.height * 0.5);
            let w = omega(ctx.index);
            Particle::at(home + Vec2::new(0.0, AMPLITUDE))
                .with_home(home)
                .with_mass(STIFFNESS / (w * w))
                .with_radius(9.0)
        })
        .with_force(ForceLaw::Spring { stiffness: STIFFNESS, damping: 0.0 })
        .with_integrator(Integrator::Rk4)
        .with_substeps(2)
        .with_controls(|params, physics| {
            // Scaling the shared stiffness scales every ω by the same √
            // factor, so the wave pattern is preserved, just faster.
            physics.forces[0] = ForceLaw::Spring {
                stiffness: params.get_or("stiffness", STIFFNESS),
                damping: params.get_or("damping", 0.0),
            };
        })
        .with_renderer(|view, canvas| {
            canvas.clear(BACKGROUND);
            let n = view.particles.len().max(1) as f32;
            for (i, p) in view.particles.iter().enumerate() {
                canvas.line(p.home, p.position, 1.5, ROD);
                canvas.fill_circle(
                    p.position,
                    p.radius,
                    Palette::Viridis.sample(i as f32 / n),
                );
            }
        })
        .with_describer(|view| {
            // Spread of vertical displacements: 0 when the row is aligned.
            let offsets: Vec<f32> =
                view.particles.iter().map(|p| p.position.y - p.home.y).collect();
            let spread = offsets.iter().cloned().fold(f32::MIN, f32::max)
                - offsets.iter().cloned().fold(f32::MAX, f32::min);
            format!(
                "Pendulum Wave: {} oscillators, realigns every {:.0} s, spread {:.0} px, t = {:.1} s",
                view.particles.len(),
                PATTERN_PERIOD,
                spread,
                view.elapsed,
            )
        })
}
