//! Benchmark profiles for the CGOL Game of Life engine.
//!
//! Provides pre-built engines for benchmarking and soak runs:
//!
//! - [`reference_profile`]: 256x256 soup (64K cells), absorbing edges
//! - [`stress_profile`]: 1024x1024 soup (1M cells), toroidal edges
//! - [`soup`]: any size, edge behaviour and seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cgol_engine::{EngineConfig, LifeEngine};
use cgol_space::EdgeBehavior;

/// Density used by every profile; close to the density at which random
/// soups stay active longest.
pub const SOUP_DENSITY: f64 = 0.35;

/// Build a randomized `width x height` engine.
///
/// Panics if the size is rejected; profiles are fixed and known-good.
pub fn soup(width: i32, height: i32, edge: EdgeBehavior, seed: u64) -> LifeEngine {
    let config = EngineConfig::default().with_edge(edge);
    let mut engine = LifeEngine::new(config).expect("default config is valid");
    engine
        .init(width, height)
        .expect("benchmark grid fits the default cell limit");
    engine.randomize(seed, SOUP_DENSITY);
    engine
}

/// 256x256 soup with absorbing edges.
pub fn reference_profile(seed: u64) -> LifeEngine {
    soup(256, 256, EdgeBehavior::Absorb, seed)
}

/// 1024x1024 soup with toroidal edges.
pub fn stress_profile(seed: u64) -> LifeEngine {
    soup(1024, 1024, EdgeBehavior::Wrap, seed)
}
