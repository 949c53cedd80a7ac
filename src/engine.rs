//! Simulation engine: builder and uniform lifecycle.
//!
//! [`SimulationEngine`] composes force laws, an integrator, a collision
//! policy and a renderer behind the lifecycle contract every simulation
//! exposes to the host shell:
//!
//! | Method | Contract |
//! |--------|----------|
//! | `init(w, h)` | allocate state sized from config; enters Ready |
//! | `update(dt, params)` | advance by `dt` (clamped); missing params default |
//! | `render(canvas)` | paint current state; never mutates physics |
//! | `reset()` | reproduce the exact state `init` produced |
//! | `resize(w, h)` | change bounds for future containment checks only |
//! | `destroy()` | release state; terminal and idempotent |
//! | `state_description()` | human-readable snapshot for narration |
//!
//! The phase machine is `Uninitialized -> Ready -> Running -> Destroyed`.
//! Calls arriving in an illegal phase are tolerated as no-ops; the frame
//! path has no error channel by design.
//!
//! # Example
//!
//! ```
//! use edusim::engine::SimulationEngine;
//! use edusim::force::ForceLaw;
//! use edusim::params::{Category, ParameterSet, SimConfig};
//! use edusim::particle::Particle;
//! use glam::Vec2;
//!
//! let config = SimConfig::new("drop", "Falling ball", Category::Mechanics);
//! let mut engine = SimulationEngine::new(config)
//!     .with_particle_count(1)
//!     .with_spawner(|ctx| Particle::at(ctx.bounds.center()))
//!     .with_force(ForceLaw::Gravity(400.0))
//!     .with_collisions(|c| {
//!         c.bounce(0.8);
//!     });
//!
//! engine.init(800.0, 600.0);
//! engine.update(1.0 / 60.0, &ParameterSet::new());
//! assert!(engine.particles()[0].velocity.y > 0.0);
//! ```

use crate::canvas::Canvas;
use crate::clock::SimClock;
use crate::collision::Collisions;
use crate::force::ForceLaw;
use crate::integrator::Integrator;
use crate::params::{ParameterSet, SimConfig};
use crate::particle::{total_kinetic_energy, Bounds, Particle};
use crate::spawn::SpawnContext;

/// Default engine seed. Reproducible by construction; override with
/// [`SimulationEngine::with_seed`] to get a different but equally
/// reproducible run.
pub const DEFAULT_SEED: u64 = 7;

/// Lifecycle phase of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but not yet given a surface size.
    Uninitialized,
    /// Initialized (or reset); state matches what the spawner produced.
    Ready,
    /// At least one update has run since init/reset.
    Running,
    /// Destroyed; every call is a no-op from here on.
    Destroyed,
}

/// The tunable physics of an engine, handed to the controls closure each
/// frame so slider values can reshape forces, integration and collisions.
#[derive(Debug, Clone, Default)]
pub struct Physics {
    /// Force laws applied each sub-step, in order.
    pub forces: Vec<ForceLaw>,
    /// Integration scheme.
    pub integrator: Integrator,
    /// Sub-steps per frame (0 is treated as 1).
    pub substeps: u32,
    /// Collision policy.
    pub collisions: Collisions,
}

/// Immutable view of engine state handed to render and describer closures.
pub struct SimView<'a> {
    /// Live particles.
    pub particles: &'a [Particle],
    /// Current world bounds.
    pub bounds: Bounds,
    /// Simulated seconds since init/reset.
    pub elapsed: f32,
    /// Frames since init/reset.
    pub frame: u64,
}

type Spawner = Box<dyn Fn(&mut SpawnContext) -> Particle>;
type ControlsFn = Box<dyn Fn(&ParameterSet, &mut Physics)>;
type BehaviorFn = Box<dyn Fn(&mut [Particle], f32, &ParameterSet, Bounds)>;
type RenderFn = Box<dyn Fn(&SimView<'_>, &mut dyn Canvas)>;
type DescribeFn = Box<dyn Fn(&SimView<'_>) -> String>;

/// A configurable explicit-integrator simulation behind the uniform host
/// lifecycle. Built once per instance by a registry factory; owns all of
/// its state exclusively.
pub struct SimulationEngine {
    config: SimConfig,
    phase: Phase,
    bounds: Bounds,
    clock: SimClock,
    seed: u64,
    particle_count: u32,
    particles: Vec<Particle>,
    physics: Physics,
    spawner: Option<Spawner>,
    controls: Option<ControlsFn>,
    behavior: Option<BehaviorFn>,
    renderer: Option<RenderFn>,
    describer: Option<DescribeFn>,
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("phase", &self.phase)
            .field("seed", &self.seed)
            .field("particle_count", &self.particle_count)
            .finish_non_exhaustive()
    }
}

impl SimulationEngine {
    /// Create an engine for the given config with default settings.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
            bounds: Bounds::new(0.0, 0.0),
            clock: SimClock::new(),
            seed: DEFAULT_SEED,
            particle_count: 0,
            particles: Vec::new(),
            physics: Physics { substeps: 1, ..Physics::default() },
            spawner: None,
            controls: None,
            behavior: None,
            renderer: None,
            describer: None,
        }
    }

    // =========================================================================
    // BUILDER
    // =========================================================================

    /// Set the number of particles spawned at init/reset.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the RNG seed used by spawn contexts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the particle spawner, called once per particle at init/reset.
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(&mut SpawnContext) -> Particle + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Add a force law.
    pub fn with_force(mut self, force: ForceLaw) -> Self {
        self.physics.forces.push(force);
        self
    }

    /// Set the integration scheme.
    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.physics.integrator = integrator;
        self
    }

    /// Set the sub-step count per frame.
    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.physics.substeps = substeps.max(1);
        self
    }

    /// Configure the collision policy.
    pub fn with_collisions<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut Collisions),
    {
        configure(&mut self.physics.collisions);
        self
    }

    /// Set the per-frame controls closure mapping resolved slider values
    /// onto the physics (force constants, substeps, collision settings).
    pub fn with_controls<F>(mut self, controls: F) -> Self
    where
        F: Fn(&ParameterSet, &mut Physics) + 'static,
    {
        self.controls = Some(Box::new(controls));
        self
    }

    /// Set a custom behavior run once per frame after integration, for
    /// state evolution no force law expresses (temperature diffusion,
    /// reaction progress). Receives the resolved parameter set.
    pub fn with_behavior<F>(mut self, behavior: F) -> Self
    where
        F: Fn(&mut [Particle], f32, &ParameterSet, Bounds) + 'static,
    {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Set the render closure. It receives an immutable state view; all
    /// mutation happens in `update`.
    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&SimView<'_>, &mut dyn Canvas) + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Set the state-description closure for narration/accessibility.
    pub fn with_describer<F>(mut self, describer: F) -> Self
    where
        F: Fn(&SimView<'_>) -> String + 'static,
    {
        self.describer = Some(Box::new(describer));
        self
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Allocate initial state for a surface of the given size.
    ///
    /// Only legal from Uninitialized; a second `init` is a no-op.
    pub fn init(&mut self, width: f32, height: f32) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        self.bounds = Bounds::new(width.max(0.0), height.max(0.0));
        self.spawn_particles();
        self.clock.reset();
        self.phase = Phase::Ready;
    }

    /// Advance the simulation by `dt` seconds under the given host params.
    ///
    /// `dt` is clamped into `[0, MAX_FRAME_DELTA]`; unknown params are
    /// dropped and missing ones take their configured defaults.
    pub fn update(&mut self, dt: f32, params: &ParameterSet) {
        if !matches!(self.phase, Phase::Ready | Phase::Running) {
            return;
        }
        let resolved = self.config.resolve(params);
        let (_, delta) = self.clock.advance(dt);

        if let Some(controls) = &self.controls {
            controls(&resolved, &mut self.physics);
        }

        let substeps = self.physics.substeps.max(1);
        let h = delta / substeps as f32;
        for _ in 0..substeps {
            self.physics
                .integrator
                .step(&mut self.particles, &self.physics.forces, h);
            self.physics.collisions.resolve(&mut self.particles, self.bounds);
        }

        if let Some(behavior) = &self.behavior {
            behavior(&mut self.particles, delta, &resolved, self.bounds);
        }

        self.clamp_state();
        self.phase = Phase::Running;
    }

    /// Paint the current state. No-op outside Ready/Running.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if !matches!(self.phase, Phase::Ready | Phase::Running) {
            return;
        }
        if let Some(renderer) = &self.renderer {
            let view = self.view();
            renderer(&view, canvas);
        }
    }

    /// Reinitialize state to exactly what `init` produced (same seed, same
    /// spawner, same bounds) and return to Ready.
    pub fn reset(&mut self) {
        if !matches!(self.phase, Phase::Ready | Phase::Running) {
            return;
        }
        self.spawn_particles();
        self.clock.reset();
        self.phase = Phase::Ready;
    }

    /// Update the bounds used by future containment checks. Existing
    /// particle positions are not rescaled. Safe between any two frames.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.bounds = Bounds::new(width.max(0.0), height.max(0.0));
    }

    /// Release state. Terminal and idempotent.
    pub fn destroy(&mut self) {
        self.particles = Vec::new();
        self.spawner = None;
        self.controls = None;
        self.behavior = None;
        self.renderer = None;
        self.describer = None;
        self.phase = Phase::Destroyed;
    }

    /// Human-readable snapshot of current physical quantities.
    pub fn state_description(&self) -> String {
        match self.phase {
            Phase::Uninitialized => format!("{}: not initialized", self.config.title),
            Phase::Destroyed => format!("{}: destroyed", self.config.title),
            _ => {
                if let Some(describer) = &self.describer {
                    describer(&self.view())
                } else {
                    format!(
                        "{}: {} particles, kinetic energy {:.1}, t = {:.2} s",
                        self.config.title,
                        self.particles.len(),
                        total_kinetic_energy(&self.particles),
                        self.clock.elapsed(),
                    )
                }
            }
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Live particles.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current world bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Static config this engine was built from.
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulated seconds since init/reset.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// The engine's clock, for pause / time-scale control by the host.
    pub fn clock_mut(&mut self) -> &mut SimClock {
        &mut self.clock
    }

    /// Current physics configuration.
    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    fn view(&self) -> SimView<'_> {
        SimView {
            particles: &self.particles,
            bounds: self.bounds,
            elapsed: self.clock.elapsed(),
            frame: self.clock.frame(),
        }
    }

    fn spawn_particles(&mut self) {
        self.particles.clear();
        if let Some(spawner) = &self.spawner {
            self.particles.reserve(self.particle_count as usize);
            for i in 0..self.particle_count {
                let mut ctx = SpawnContext::new(i, self.particle_count, self.bounds, self.seed);
                self.particles.push(spawner(&mut ctx));
            }
        }
    }

    /// Clamp state into valid physical ranges instead of letting NaN or
    /// negative temperatures propagate.
    fn clamp_state(&mut self) {
        for p in &mut self.particles {
            p.temperature = p.temperature.max(0.0);
            p.mass = p.mass.max(f32::MIN_POSITIVE);
            if !p.position.is_finite() {
                p.position = p.home;
                p.velocity = glam::Vec2::ZERO;
            }
            if !p.velocity.is_finite() {
                p.velocity = glam::Vec2::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::clock::MAX_FRAME_DELTA;
    use crate::params::Category;
    use glam::{Vec2, Vec4};

    fn bouncing_gas() -> SimulationEngine {
        let config = SimConfig::new("test-gas", "Test Gas", Category::Thermodynamics);
        SimulationEngine::new(config)
            .with_particle_count(20)
            .with_spawner(|ctx| {
                Particle::at(ctx.random_in_bounds(20.0))
                    .with_velocity(ctx.random_velocity(20.0, 60.0))
                    .with_radius(4.0)
            })
            .with_collisions(|c| {
                c.bounce(1.0).elastic();
            })
            .with_renderer(|view, canvas| {
                canvas.clear(Vec4::new(0.0, 0.0, 0.0, 1.0));
                for p in view.particles {
                    canvas.fill_circle(p.position, p.radius, Vec4::ONE);
                }
            })
    }

    #[test]
    fn test_update_before_init_is_a_no_op() {
        let mut engine = bouncing_gas();
        engine.update(0.016, &ParameterSet::new());
        assert_eq!(engine.phase(), Phase::Uninitialized);
        assert!(engine.particles().is_empty());
    }

    #[test]
    fn test_init_spawns_and_enters_ready() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        assert_eq!(engine.phase(), Phase::Ready);
        assert_eq!(engine.particles().len(), 20);
    }

    #[test]
    fn test_second_init_is_a_no_op() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        engine.update(0.016, &ParameterSet::new());
        let snapshot = engine.particles().to_vec();
        engine.init(100.0, 100.0);
        assert_eq!(engine.particles(), &snapshot[..]);
        assert_eq!(engine.bounds(), Bounds::new(800.0, 600.0));
    }

    #[test]
    fn test_reset_reproduces_initial_state() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        let initial = engine.particles().to_vec();
        for _ in 0..30 {
            engine.update(0.016, &ParameterSet::new());
        }
        assert_ne!(engine.particles(), &initial[..]);
        engine.reset();
        assert_eq!(engine.phase(), Phase::Ready);
        assert_eq!(engine.particles(), &initial[..]);
        assert_eq!(engine.elapsed(), 0.0);
    }

    #[test]
    fn test_destroy_is_terminal_and_idempotent() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        engine.destroy();
        assert_eq!(engine.phase(), Phase::Destroyed);
        engine.destroy(); // second call must not panic or change anything
        engine.update(0.016, &ParameterSet::new());
        engine.reset();
        assert_eq!(engine.phase(), Phase::Destroyed);
        assert!(engine.particles().is_empty());

        let mut list = DrawList::new();
        engine.render(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_huge_dt_is_clamped() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        engine.update(10.0, &ParameterSet::new());
        assert!((engine.elapsed() - MAX_FRAME_DELTA).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_is_tolerated() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        engine.update(0.0, &ParameterSet::new());
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.elapsed(), 0.0);
    }

    #[test]
    fn test_resize_preserves_particle_count() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        let count = engine.particles().len();
        engine.resize(200.0, 150.0);
        assert_eq!(engine.particles().len(), count);
        assert_eq!(engine.bounds(), Bounds::new(200.0, 150.0));
        // Positions are not rescaled by resize itself.
        engine.update(0.016, &ParameterSet::new());
        assert_eq!(engine.particles().len(), count);
    }

    #[test]
    fn test_resize_changes_future_containment() {
        let config = SimConfig::new("one", "One ball", Category::Mechanics);
        let mut engine = SimulationEngine::new(config)
            .with_particle_count(1)
            .with_spawner(|_| Particle::at(Vec2::new(500.0, 50.0)).with_radius(5.0))
            .with_collisions(|c| {
                c.bounce(1.0);
            });
        engine.init(800.0, 600.0);
        engine.resize(100.0, 100.0);
        engine.update(0.016, &ParameterSet::new());
        // The ball was outside the shrunken bounds; wall response pulled it in.
        let p = &engine.particles()[0];
        assert!(p.position.x <= 100.0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        engine.update(0.016, &ParameterSet::new());

        let mut first = DrawList::new();
        let mut second = DrawList::new();
        engine.render(&mut first);
        engine.render(&mut second);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let mut engine = bouncing_gas();
        engine.init(800.0, 600.0);
        let before = engine.particles().to_vec();
        let mut list = DrawList::new();
        engine.render(&mut list);
        assert_eq!(engine.particles(), &before[..]);
    }

    #[test]
    fn test_same_seed_same_history() {
        let run = || {
            let mut engine = bouncing_gas();
            engine.init(800.0, 600.0);
            for _ in 0..60 {
                engine.update(1.0 / 60.0, &ParameterSet::new());
            }
            engine.particles().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_controls_receive_resolved_params() {
        use crate::params::ParamSpec;
        let config = SimConfig::new("g", "Gravity box", Category::Mechanics)
            .with_param(ParamSpec::new("gravity", "Gravity", 0.0, 1000.0, 400.0));
        let mut engine = SimulationEngine::new(config)
            .with_particle_count(1)
            .with_spawner(|ctx| Particle::at(ctx.bounds.center()))
            .with_force(ForceLaw::Gravity(0.0))
            .with_controls(|params, physics| {
                physics.forces[0] = ForceLaw::Gravity(params.get_or("gravity", 0.0));
            });
        engine.init(800.0, 600.0);
        // No params supplied: the documented default (400) must apply.
        engine.update(0.02, &ParameterSet::new());
        assert!(engine.particles()[0].velocity.y > 0.0);
        assert_eq!(engine.physics().forces[0], ForceLaw::Gravity(400.0));
    }

    #[test]
    fn test_temperature_clamped_non_negative() {
        let config = SimConfig::new("cold", "Cold", Category::Thermodynamics);
        let mut engine = SimulationEngine::new(config)
            .with_particle_count(1)
            .with_spawner(|ctx| Particle::at(ctx.bounds.center()).with_temperature(1.0))
            .with_behavior(|particles, dt, _, _| {
                for p in particles {
                    p.temperature -= 100.0 * dt; // runaway cooling
                }
            });
        engine.init(100.0, 100.0);
        for _ in 0..10 {
            engine.update(0.05, &ParameterSet::new());
        }
        assert_eq!(engine.particles()[0].temperature, 0.0);
    }

    #[test]
    fn test_default_state_description() {
        let mut engine = bouncing_gas();
        assert!(engine.state_description().contains("not initialized"));
        engine.init(800.0, 600.0);
        let desc = engine.state_description();
        assert!(desc.contains("20 particles"), "{}", desc);
        engine.destroy();
        assert!(engine.state_description().contains("destroyed"));
    }
}
