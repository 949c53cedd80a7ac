//! Explicit integrators.
//!
//! Two schemes cover every simulation in the library:
//!
//! - [`Integrator::SymplecticEuler`] - semi-implicit Euler: velocity is
//!   updated from the current acceleration first, then position from the
//!   *updated* velocity. First order, but conserves energy far better than
//!   explicit Euler over long runs, which is what a particle toy that runs
//!   for minutes actually needs.
//! - [`Integrator::Rk4`] - classic fourth-order Runge-Kutta over the whole
//!   coupled (position, velocity) state. Used where visible accuracy matters
//!   against an analytic curve (damped spring, coupled oscillators).
//!
//! Sub-stepping splits one frame's `dt` into `n` equal sub-steps, each run
//! through the integrator. Required whenever force magnitudes are stiff
//! relative to the frame rate (lattice spring constants in the hundreds);
//! the count is configuration on the engine, never hardcoded per simulation.

use crate::force::{net_accel, ForceLaw};
use crate::particle::Particle;
use glam::Vec2;

/// Integration scheme advancing `(x, v)` under a set of force laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Semi-implicit Euler; the default for real-time particle systems.
    #[default]
    SymplecticEuler,
    /// Fourth-order Runge-Kutta, for plots compared against analytic curves.
    Rk4,
}

/// Evaluate the net acceleration of every particle in the current state.
fn accelerations(particles: &[Particle], forces: &[ForceLaw]) -> Vec<Vec2> {
    (0..particles.len())
        .map(|i| net_accel(forces, i, particles))
        .collect()
}

impl Integrator {
    /// Advance all particles by one step of `dt` seconds.
    ///
    /// Particle count and every non-kinematic attribute are left untouched;
    /// only positions and velocities change.
    pub fn step(&self, particles: &mut Vec<Particle>, forces: &[ForceLaw], dt: f32) {
        if dt == 0.0 || particles.is_empty() {
            return;
        }
        match self {
            Integrator::SymplecticEuler => {
                let accels = accelerations(particles, forces);
                for (p, a) in particles.iter_mut().zip(accels) {
                    p.velocity += a * dt;
                    p.position += p.velocity * dt;
                }
            }
            Integrator::Rk4 => rk4_step(particles, forces, dt),
        }
    }

    /// Advance by `dt` split into `substeps` equal sub-steps.
    ///
    /// A count of 0 is treated as 1.
    pub fn step_substepped(
        &self,
        particles: &mut Vec<Particle>,
        forces: &[ForceLaw],
        dt: f32,
        substeps: u32,
    ) {
        let n = substeps.max(1);
        let h = dt / n as f32;
        for _ in 0..n {
            self.step(particles, forces, h);
        }
    }
}

/// One RK4 step over the coupled (position, velocity) state of all particles.
///
/// Trial states are written into a scratch clone so force laws (which may
/// read every particle) see a consistent intermediate state at each stage.
fn rk4_step(particles: &mut Vec<Particle>, forces: &[ForceLaw], dt: f32) {
    let n = particles.len();
    let x0: Vec<Vec2> = particles.iter().map(|p| p.position).collect();
    let v0: Vec<Vec2> = particles.iter().map(|p| p.velocity).collect();

    let mut scratch = particles.clone();

    // Stage 1 at the initial state.
    let a1 = accelerations(particles, forces);
    let k1x = &v0;
    let k1v = &a1;

    // Stage 2 at t + dt/2.
    for i in 0..n {
        scratch[i].position = x0[i] + k1x[i] * (dt * 0.5);
        scratch[i].velocity = v0[i] + k1v[i] * (dt * 0.5);
    }
    let a2 = accelerations(&scratch, forces);
    let k2x: Vec<Vec2> = (0..n).map(|i| v0[i] + k1v[i] * (dt * 0.5)).collect();
    let k2v = &a2;

    // Stage 3, also at t + dt/2 but from the stage-2 slope.
    for i in 0..n {
        scratch[i].position = x0[i] + k2x[i] * (dt * 0.5);
        scratch[i].velocity = v0[i] + k2v[i] * (dt * 0.5);
    }
    let a3 = accelerations(&scratch, forces);
    let k3x: Vec<Vec2> = (0..n).map(|i| v0[i] + k2v[i] * (dt * 0.5)).collect();
    let k3v = &a3;

    // Stage 4 at t + dt.
    for i in 0..n {
        scratch[i].position = x0[i] + k3x[i] * dt;
        scratch[i].velocity = v0[i] + k3v[i] * dt;
    }
    let a4 = accelerations(&scratch, forces);
    let k4x: Vec<Vec2> = (0..n).map(|i| v0[i] + k3v[i] * dt).collect();
    let k4v = &a4;

    let sixth = dt / 6.0;
    for i in 0..n {
        particles[i].position =
            x0[i] + (k1x[i] + k2x[i] * 2.0 + k3x[i] * 2.0 + k4x[i]) * sixth;
        particles[i].velocity =
            v0[i] + (k1v[i] + k2v[i] * 2.0 + k3v[i] * 2.0 + k4v[i]) * sixth;
    }
}
