//! Benchmarks for the CPU integration and collision paths.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edusim::collision::Collisions;
use edusim::force::{ForceLaw, DEFAULT_SOFTENING};
use edusim::integrator::Integrator;
use edusim::particle::{Bounds, Particle};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn particle_set(count: usize) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            Particle::at(Vec2::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)))
                .with_velocity(Vec2::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0)))
                .with_mass(rng.gen_range(1.0..4.0))
                .with_radius(4.0)
        })
        .collect()
}

fn bench_integrator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_step");
    let forces = vec![
        ForceLaw::NBodyGravity { g: 400.0, softening: DEFAULT_SOFTENING },
        ForceLaw::Drag(0.5),
    ];

    for count in [64, 256, 1024] {
        let base = particle_set(count);

        group.bench_with_input(BenchmarkId::new("symplectic_euler", count), &count, |b, _| {
            b.iter_batched(
                || base.clone(),
                |mut particles| {
                    Integrator::SymplecticEuler.step(&mut particles, &forces, 1.0 / 60.0);
                    black_box(particles)
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rk4", count), &count, |b, _| {
            b.iter_batched(
                || base.clone(),
                |mut particles| {
                    Integrator::Rk4.step(&mut particles, &forces, 1.0 / 60.0);
                    black_box(particles)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_force_accel(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_accel");
    let particles = particle_set(256);

    let cases = [
        ("gravity", ForceLaw::Gravity(400.0)),
        ("spring", ForceLaw::Spring { stiffness: 25.0, damping: 0.5 }),
        ("nbody", ForceLaw::NBodyGravity { g: 400.0, softening: DEFAULT_SOFTENING }),
        ("coulomb", ForceLaw::Coulomb { k: 6000.0, softening: DEFAULT_SOFTENING }),
    ];

    for (name, force) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut total = Vec2::ZERO;
                for i in 0..particles.len() {
                    total += force.accel(i, &particles);
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

fn bench_collision_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_resolve");
    let bounds = Bounds::new(800.0, 600.0);

    let mut elastic = Collisions::default();
    elastic.elastic().bounce(1.0);
    let mut merging = Collisions::default();
    merging.merge(1.5);

    for count in [64, 256] {
        let base = particle_set(count);

        group.bench_with_input(BenchmarkId::new("elastic", count), &count, |b, _| {
            b.iter_batched(
                || base.clone(),
                |mut particles| {
                    elastic.resolve(&mut particles, bounds);
                    black_box(particles)
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("merge", count), &count, |b, _| {
            b.iter_batched(
                || base.clone(),
                |mut particles| {
                    merging.resolve(&mut particles, bounds);
                    black_box(particles)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_integrator_step,
    bench_force_accel,
    bench_collision_resolve,
);
criterion_main!(benches);
