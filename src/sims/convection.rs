//! Convection cell.
//!
//! Fluid parcels over a heated floor. Parcels pick up temperature in the
//! floor zone, become buoyant, rise, dump their heat at the cooled ceiling
//! and sink back down, forming the circulation loop. Buoyancy is the only
//! force coupling temperature to motion; the heating itself is a behavior
//! step, not a force law.

use crate::engine::SimulationEngine;
use crate::force::ForceLaw;
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use crate::visuals::{ColorMapping, Palette};
use glam::Vec4;

const COUNT: u32 = 120;
const GRAVITY: f32 = 400.0;
/// Thermal expansion coefficient: buoyant acceleration per degree above
/// ambient.
const EXPANSION: f32 = 0.02;
const AMBIENT: f32 = 30.0;
const DEFAULT_FLOOR_TEMP: f32 = 70.0;
/// Depth of the heated floor zone and the cooled ceiling zone, in pixels.
const ZONE_DEPTH: f32 = 50.0;
/// Exponential approach rate toward zone temperatures, per second.
const EXCHANGE_RATE: f32 = 1.5;
/// Slow relaxation toward ambient in the bulk, per second.
const BULK_RATE: f32 = 0.1;

const BACKGROUND: Vec4 = Vec4::new(0.02, 0.02, 0.04, 1.0);

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("convection", "Convection", Category::Thermodynamics)
        .with_param(ParamSpec::new("heat", "Floor temperature", 0.0, 100.0, DEFAULT_FLOOR_TEMP))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    let mapping = ColorMapping::Temperature { palette: Palette::Fire, min: 0.0, max: 100.0 };
    SimulationEngine::new(config())
        .with_particle_count(COUNT)
        .with_spawner(|ctx| {
            Particle::at(ctx.random_in_bounds(15.0))
                .with_temperature(AMBIENT)
                .with_radius(4.0)
        })
        .with_force(ForceLaw::Buoyancy { gravity: GRAVITY, expansion: EXPANSION, ambient: AMBIENT })
        .with_force(ForceLaw::Drag(1.2))
        .with_substeps(2)
        .with_collisions(|c| {
            c.bounce(0.2);
        })
        .with_behavior(|particles, dt, params, bounds| {
            let floor_temp = params.get_or("heat", DEFAULT_FLOOR_TEMP);
            for p in particles {
                let (target, rate) = if p.position.y > bounds.height - ZONE_DEPTH {
                    (floor_temp, EXCHANGE_RATE)
                } else if p.position.y < ZONE_DEPTH {
                    (0.0, EXCHANGE_RATE)
                } else {
                    (AMBIENT, BULK_RATE)
                };
                p.temperature += (target - p.temperature) * (rate * dt).min(1.0);
            }
        })
        .with_renderer(move |view, canvas| {
            canvas.clear(BACKGROUND);
            for p in view.particles {
                canvas.fill_circle(p.position, p.radius, mapping.color(p));
            }
        })
        .with_describer(|view| {
            let mean: f32 = view.particles.iter().map(|p| p.temperature).sum::<f32>()
                / view.particles.len().max(1) as f32;
            let rising = view.particles.iter().filter(|p| p.velocity.y < -5.0).count();
            format!(
                "Convection: {} parcels, mean temperature {:.0}, {} rising, t = {:.1} s",
                view.particles.len(),
                mean,
                rising,
                view.elapsed,
            )
        })
}
