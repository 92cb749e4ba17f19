//! Soak run: step soups until they settle, then reseed.
//!
//! Demonstrates: profile → step loop → metrics → stability detection →
//! randomize → repeat. A soup counts as settled once its fingerprint
//! repeats with period 1 or 2 (still lifes and blinkers).
//!
//! Run with:
//!   RUST_LOG=info cargo run --release -p cgol-bench --example soak

use cgol_bench::{reference_profile, SOUP_DENSITY};
use log::info;

const SOUPS: u64 = 5;
const MAX_GENERATIONS: u32 = 20_000;

fn main() {
    env_logger::init();
    println!("=== CGOL soak run ===\n");

    let mut engine = reference_profile(0);
    for seed in 0..SOUPS {
        let start_pop = engine.randomize(seed, SOUP_DENSITY);
        let mut history = [engine.fingerprint(), 0];
        let mut settled_at = None;

        for _ in 0..MAX_GENERATIONS {
            let m = engine.step();
            let fp = engine.fingerprint();
            if fp == history[0] || fp == history[1] {
                settled_at = Some(engine.generation());
                break;
            }
            history = [fp, history[0]];
            if engine.generation().0 % 1000 == 0 {
                info!(
                    "seed {seed} generation {}: population {}",
                    engine.generation(),
                    m.population
                );
            }
        }

        match settled_at {
            Some(g) => println!(
                "  seed {seed}: {start_pop} -> {} cells, settled at generation {g}",
                engine.population()
            ),
            None => println!(
                "  seed {seed}: {start_pop} -> {} cells, still active after {MAX_GENERATIONS}",
                engine.population()
            ),
        }
    }
}
