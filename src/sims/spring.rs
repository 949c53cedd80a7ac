//! Damped spring-mass oscillator.
//!
//! One mass on a horizontal spring anchored at the canvas center. Uses RK4
//! so the motion tracks the analytic solution closely enough to plot
//! against it; stiffness and damping are live sliders.

use crate::engine::SimulationEngine;
use crate::force::ForceLaw;
use crate::integrator::Integrator;
use crate::params::{Category, ParamSpec, SimConfig};
use crate::particle::Particle;
use glam::{Vec2, Vec4};

/// Initial displacement from rest, in pixels.
const DISPLACEMENT: f32 = 150.0;

const BACKGROUND: Vec4 = Vec4::new(0.03, 0.04, 0.08, 1.0);
const COIL: Vec4 = Vec4::new(0.55, 0.58, 0.65, 1.0);
const MASS: Vec4 = Vec4::new(0.95, 0.55, 0.15, 1.0);

/// Static metadata.
pub fn config() -> SimConfig {
    SimConfig::new("spring-mass", "Spring & Mass", Category::Mechanics)
        .with_param(ParamSpec::new("stiffness", "Spring stiffness (N/m)", 1.0, 100.0, 25.0))
        .with_param(ParamSpec::new("damping", "Damping (N·s/m)", 0.0, 5.0, 0.0))
}

/// Registry factory.
pub fn engine() -> SimulationEngine {
    SimulationEngine::new(config())
        .with_particle_count(1)
        .with_spawner(|ctx| {
            let rest = ctx.bounds.center();
            Particle::at(rest + Vec2::new(DISPLACEMENT, 0.0))
                .with_home(rest)
                .with_radius(14.0)
        })
        .with_force(ForceLaw::Spring { stiffness: 25.0, damping: 0.0 })
        .with_integrator(Integrator::Rk4)
        .with_substeps(2)
        .with_controls(|params, physics| {
            physics.forces[0] = ForceLaw::Spring {
                stiffness: params.get_or("stiffness", 25.0),
                damping: params.get_or("damping", 0.0),
            };
        })
        .with_renderer(|view, canvas| {
            canvas.clear(BACKGROUND);
            let p = &view.particles[0];
            // Anchor post and spring line.
            canvas.line(
                p.home - Vec2::new(0.0, 24.0),
                p.home + Vec2::new(0.0, 24.0),
                3.0,
                COIL,
            );
            canvas.line(p.home, p.position, 2.0, COIL);
            canvas.fill_circle(p.position, p.radius, MASS);
        })
        .with_describer(|view| {
            let p = &view.particles[0];
            let x = p.position.x - p.home.x;
            format!(
                "Spring & Mass: displacement {:.0} px, speed {:.0} px/s, t = {:.2} s",
                x,
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
    fn test_oscillates_about_rest() {
        let mut engine = engine();
        engine.init(800.0, 600.0);
        let home_x = engine.particles()[0].home.x;
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for _ in 0..240 {
            engine.update(1.0 / 120.0, &ParameterSet::new());
            let x = engine.particles()[0].position.x;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }
        // Two seconds covers over a full period at the default stiffness;
        // the mass must have crossed to the other side of rest.
        assert!(max_x > home_x + DISPLACEMENT * 0.5);
        assert!(min_x < home_x - DISPLACEMENT * 0.5);
    }

    #[test]
    fn test_damping_slider_shrinks_amplitude() {
        let mut engine = engine();
        engine.init(800.0, 600.0);
        let params = ParameterSet::new().set("damping", 3.0);
        for _ in 0..600 {
            engine.update(1.0 / 120.0, &params);
        }
        let p = &engine.particles()[0];
        let x = (p.position.x - p.home.x).abs();
        assert!(x < DISPLACEMENT * 0.5, "amplitude still {}", x);
    }

    #[test]
    fn test_describer_reports_displacement() {
        let mut engine = engine();
        engine.init(800.0, 600.0);
        let desc = engine.state_description();
        assert!(desc.contains("displacement 150 px"), "{}", desc);
    }
}
