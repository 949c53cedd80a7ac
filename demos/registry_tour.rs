//! # Registry Tour
//!
//! Creates every built-in simulation, runs each for three simulated
//! seconds and prints its sliders and closing state description.
//!
//! Run with: `cargo run --example registry_tour`

use edusim::prelude::*;

fn main() {
    let registry = Registry::with_builtins();
    println!("=== {} simulations registered ===", registry.len());

    for slug in registry.slugs() {
        let config = registry.sim_config(slug).unwrap();
        println!();
        println!("{} [{}] - {}", config.title, config.category, slug);
        for param in &config.params {
            println!(
                "  slider: {} ({}..{}, default {})",
                param.label, param.min, param.max, param.default
            );
        }

        let mut engine = registry.create(slug).unwrap();
        engine.init(800.0, 600.0);
        let params = ParameterSet::new();
        for _ in 0..180 {
            engine.update(1.0 / 60.0, &params);
        }
        println!("  {}", engine.state_description());
        engine.destroy();
    }
}
