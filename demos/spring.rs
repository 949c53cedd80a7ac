//! # Spring Demo
//!
//! Runs the damped spring-mass simulation headless for ten simulated
//! seconds and prints the displacement trace, first undamped and then with
//! the damping slider raised.
//!
//! Run with: `cargo run --example spring_demo`

use edusim::prelude::*;

fn run(damping: f32) {
    let registry = Registry::with_builtins();
    let mut engine = registry.create("spring-mass").unwrap();
    engine.init(800.0, 600.0);

    let params = ParameterSet::new().set("damping", damping);
    for frame in 0..600 {
        engine.update(1.0 / 60.0, &params);
        if frame % 60 == 59 {
            println!("  {}", engine.state_description());
        }
    }
    engine.destroy();
}

fn main() {
    println!("=== Spring & Mass ===");
    println!();
    println!("Undamped (amplitude holds):");
    run(0.0);
    println!();
    println!("Damping 3.0 (amplitude decays):");
    run(3.0);
}
