//! # Orbits Demo
//!
//! Runs the accretion disc headless for a simulated minute, printing the
//! body count as planetesimals merge into larger bodies.
//!
//! Run with: `cargo run --example orbits_demo`

use edusim::prelude::*;

fn main() {
    println!("=== Orbits & Accretion ===");
    println!();

    let registry = Registry::with_builtins();
    let mut engine = registry.create("orbits").unwrap();
    engine.init(800.0, 600.0);

    let params = ParameterSet::new();
    println!("  {}", engine.state_description());
    for frame in 0..3600 {
        engine.update(1.0 / 60.0, &params);
        if frame % 600 == 599 {
            println!("  {}", engine.state_description());
        }
    }

    let survivors = engine.particles().len();
    engine.destroy();
    println!();
    println!("{} bodies remain of 61.", survivors);
}
