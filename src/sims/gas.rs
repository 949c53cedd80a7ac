//! Ideal gas in a box.
//!
//! Hard-sphere molecules with perfectly elastic collisions in a sealed
//! container. A thermostat nudges the kinetic temperature toward the slider
//! value by rescaling speeds a little each frame, so heating and cooling
//! look gradual rather than instantaneous.

use crate::engine::SimulationEngine;
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use crate::visuals::{ColorMapping, Palette};
use glam::Vec4;

const COUNT: u32 = 80;
/// Boltzmann constant in sim units, chosen so room temperature gives
/// comfortable on-screen speeds (`v_rms = √(2·kB·T/m)` in 2D).
const SIM_KB: f32 = 18.0;
const DEFAULT_TEMPERATURE: f32 = 300.0;
/// Fraction of the distance to the target temperature closed per second.
const THERMOSTAT_RATE: f32 = 2.0;

const BACKGROUND: Vec4 = Vec4::new(0.03, 0.03, 0.05, 1.0);

/// Kinetic temperature of the ensemble: mean kinetic energy over kB.
fn measured_temperature(particles: &[Particle]) -> f32 {
    if particles.is_empty() {
        return 0.0;
    }
    let mean_ke: f32 =
        particles.iter().map(Particle::kinetic_energy).sum::<f32>() / particles.len() as f32;
    mean_ke / SIM_KB
}

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("gas", "Ideal Gas", Category::Thermodynamics)
        .with_param(ParamSpec::new("temperature", "Temperature (K)", 50.0, 600.0, DEFAULT_TEMPERATURE))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    let mapping = ColorMapping::Speed { palette: Palette::Fire, max_speed: 250.0 };
    SimulationEngine::new(config())
        .with_particle_count(COUNT)
        .with_spawner(|ctx| {
            let v_rms = (2.0 * SIM_KB * DEFAULT_TEMPERATURE).sqrt();
            Particle::at(ctx.random_in_bounds(20.0))
                .with_velocity(ctx.random_velocity(v_rms * 0.7, v_rms * 1.3))
                .with_radius(5.0)
        })
        .with_substeps(2)
        .with_collisions(|c| {
            c.elastic().bounce(1.0);
        })
        .with_behavior(|particles, dt, params, _| {
            let target = params.get_or("temperature", DEFAULT_TEMPERATURE);
            let current = measured_temperature(particles);
            if current <= 0.0 {
                return;
            }
            let blend = (THERMOSTAT_RATE * dt).min(1.0);
            let scale = 1.0 + ((target / current).sqrt() - 1.0) * blend;
            for p in particles {
                p.velocity *= scale;
            }
        })
        .with_renderer(move |view, canvas| {
            canvas.clear(BACKGROUND);
            for p in view.particles {
                canvas.fill_circle(p.position, p.radius, mapping.color(p));
            }
        })
        .with_describer(|view| {
            let t = measured_temperature(view.particles);
            // 2D ideal-gas law: P·A = N·kB·T.
            let area = (view.bounds.width * view.bounds.height).max(1.0);
            let pressure = view.particles.len() as f32 * SIM_KB * t / area;
            format!(
                "Ideal Gas: {} molecules, T = {:.0} K, P = {:.2}, t = {:.1} s",
                view.particles.len(),
                t,
                pressure,
                view.elapsed,
            )
        })
}
