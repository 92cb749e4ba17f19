//! CGOL Quickstart: a random soup evolving in the terminal.
//!
//! Demonstrates:
//!   1. Building an `EngineConfig` (toroidal edges, rule from a string)
//!   2. Initialising a grid and seeding it
//!   3. Painting cells by hand
//!   4. Stepping and reading the published buffer
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use cgol_core::Cell;
use cgol_engine::{EngineConfig, LifeEngine};
use cgol_space::EdgeBehavior;

const WIDTH: i32 = 32;
const HEIGHT: i32 = 16;
const SEED: u64 = 42;
const DENSITY: f64 = 0.3;
const GENERATIONS: u32 = 5;

fn render(engine: &LifeEngine) {
    for row in engine.cells().rows() {
        let line: String = row
            .iter()
            .map(|&b| if b != 0 { '#' } else { '.' })
            .collect();
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = EngineConfig::default()
        .with_edge(EdgeBehavior::Wrap)
        .with_rule_str("B3/S23")?;
    let mut engine = LifeEngine::new(config)?;
    engine.init(WIDTH, HEIGHT)?;

    let population = engine.randomize(SEED, DENSITY);
    println!("seed {SEED}, density {DENSITY}: {population} live cells");

    // A glider in the top-left corner, on top of the soup.
    for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        engine.set_cell(x, y, Cell::Alive)?;
    }
    render(&engine);

    for _ in 0..GENERATIONS {
        let m = engine.step();
        println!(
            "\ngeneration {}: +{} -{} = {}",
            engine.generation(),
            m.births,
            m.deaths,
            m.population
        );
        render(&engine);
    }

    engine.clear();
    println!(
        "\ncleared: population {}, fingerprint {:#018x}",
        engine.population(),
        engine.fingerprint()
    );
    Ok(())
}
