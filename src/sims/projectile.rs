//! Projectile motion.
//!
//! A ball launched at 45° from the lower-left corner, under gravity and
//! linear air drag, bouncing on the floor with adjustable restitution.

use crate::engine::SimulationEngine;
use crate::force::ForceLaw;
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use glam::{Vec2, Vec4};

/// Launch speed, in px/s.
const LAUNCH_SPEED: f32 = 400.0;
/// Launch angle above the horizon, in radians.
const LAUNCH_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

const BACKGROUND: Vec4 = Vec4::new(0.05, 0.07, 0.10, 1.0);
const GROUND: Vec4 = Vec4::new(0.25, 0.32, 0.22, 1.0);
const BALL: Vec4 = Vec4::new(0.92, 0.35, 0.25, 1.0);
const VELOCITY_ARROW: Vec4 = Vec4::new(0.95, 0.85, 0.30, 1.0);

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("projectile", "Projectile Motion", Category::Mechanics)
        .with_param(ParamSpec::new("gravity", "Gravity (px/s²)", 100.0, 1000.0, 400.0))
        .with_param(ParamSpec::new("drag", "Air drag", 0.0, 2.0, 0.15))
        .with_param(ParamSpec::new("restitution", "Bounciness", 0.0, 1.0, 0.7))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    SimulationEngine::new(config())
        .with_particle_count(1)
        .with_spawner(|ctx| {
            let start = Vec2::new(30.0, ctx.bounds.height - 30.0);
            let velocity =
                Vec2::new(LAUNCH_ANGLE.cos(), -LAUNCH_ANGLE.sin()) * LAUNCH_SPEED;
            Particle::at(start).with_velocity(velocity).with_radius(10.0)
        })
        .with_force(ForceLaw::Gravity(400.0))
        .with_force(ForceLaw::Drag(0.15))
        .with_collisions(|c| {
            c.bounce(0.7);
        })
        .with_controls(|params, physics| {
            physics.forces[0] = ForceLaw::Gravity(params.get_or("gravity", 400.0));
            physics.forces[1] = ForceLaw::Drag(params.get_or("drag", 0.15));
            physics.collisions.bounce(params.get_or("restitution", 0.7));
        })
        .with_renderer(|view, canvas| {
            canvas.clear(BACKGROUND);
            canvas.fill_rect(
                Vec2::new(0.0, view.bounds.height - 6.0),
                Vec2::new(view.bounds.width, 6.0),
                GROUND,
            );
            let p = &view.particles[0];
            // Velocity arrow, scaled down so it stays readable.
            canvas.line(p.position, p.position + p.velocity * 0.25, 2.0, VELOCITY_ARROW);
            canvas.fill_circle(p.position, p.radius, BALL);
        })
        .with_describer(|view| {
            let p = &view.particles[0];
            let height = (view.bounds.height - p.position.y - p.radius).max(0.0);
            format!(
                "Projectile: height {:.0} px, speed {:.0} px/s, t = {:.2} s",
                height,
                p.speed(),
                view.elapsed,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;

    #[test]
    fn test_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_arc_rises_then_falls() {
        let mut engine = engine();
        engine.init(800.0, 600.0);
        let start_y = engine.particles()[0].position.y;
        let params = ParameterSet::new();
        let mut apex_y = start_y;
        for _ in 0..120 {
            engine.update(1.0 / 60.0, &params);
            apex_y = apex_y.min(engine.particles()[0].position.y);
        }
        assert!(apex_y < start_y - 40.0, "never rose: apex {}", apex_y);
        // Gravity wins in the end.
        assert!(engine.particles()[0].velocity.y > 0.0 || engine.particles()[0].position.y > apex_y);
    }

    #[test]
    fn test_bounces_lose_energy_with_restitution_below_one() {
        let mut engine = engine();
        engine.init(800.0, 600.0);
        let params = ParameterSet::new();
        for _ in 0..900 {
            engine.update(1.0 / 60.0, &params);
        }
        // After many bounces under drag and restitution 0.7 the ball has
        // nearly settled on the floor.
        let p = &engine.particles()[0];
        assert!(p.position.y > 600.0 - 60.0, "still airborne at y = {}", p.position.y);
        assert!(p.speed() < LAUNCH_SPEED * 0.5);
    }

    #[test]
    fn test_stays_inside_bounds() {
        let mut engine = engine();
        engine.init(800.0, 600.0);
        let params = ParameterSet::new().set("restitution", 1.0).set("drag", 0.0);
        for _ in 0..600 {
            engine.update(1.0 / 60.0, &params);
            let p = &engine.particles()[0];
            assert!(engine.bounds().contains(p.position), "escaped to {:?}", p.position);
        }
    }
}
