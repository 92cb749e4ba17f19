//! CGOL: a Game of Life engine built around a flat, host-readable cell buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the CGOL sub-crates. For Rust users, adding `cgol` as a single
//! dependency is sufficient; C and JavaScript hosts link `cgol-ffi`
//! instead.
//!
//! # Quick start
//!
//! ```rust
//! use cgol::prelude::*;
//!
//! let config = EngineConfig::default().with_edge(EdgeBehavior::Wrap);
//! let mut engine = LifeEngine::new(config).unwrap();
//! engine.init(16, 16).unwrap();
//! engine.randomize(42, 0.3);
//!
//! let metrics = engine.step();
//! assert_eq!(engine.generation(), Generation(1));
//! assert_eq!(metrics.population as usize, engine.population());
//!
//! // Read the current generation row by row.
//! let view = engine.cells();
//! assert_eq!(view.rows().count(), 16);
//! assert_eq!(view.len(), 256);
//!
//! // Steps rewrite the buffer in place; its address only moves on `init`.
//! let base = engine.cells().as_ptr();
//! engine.step_n(10);
//! assert_eq!(engine.cells().as_ptr(), base);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cgol-core` | `Cell`, counters, error types, `CellReader` |
//! | [`space`] | `cgol-space` | Grid shape, edge behaviour, Moore neighbourhoods |
//! | [`arena`] | `cgol-arena` | Fixed-address in-place storage and `CellView` |
//! | [`engine`] | `cgol-engine` | `LifeEngine`, rules, configuration, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, counters and errors (`cgol-core`).
pub use cgol_core as types;

/// Grid geometry (`cgol-space`).
///
/// [`space::GridShape`] resolves coordinates and neighbours under an
/// [`space::EdgeBehavior`].
pub use cgol_space as space;

/// Cell storage (`cgol-arena`).
pub use cgol_arena as arena;

/// The simulation engine (`cgol-engine`).
///
/// [`engine::LifeEngine`] is the main entry point.
pub use cgol_engine as engine;

/// Common imports for typical CGOL usage.
///
/// ```rust
/// use cgol::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use cgol_core::{BufferEpoch, Cell, CellReader, Generation};

    // Errors
    pub use cgol_core::{CellError, InitError, RuleError};

    // Space
    pub use cgol_space::{EdgeBehavior, GridShape};

    // Engine
    pub use cgol_engine::{
        CellView, ConfigError, EngineConfig, LifeEngine, LifeRule, StepMetrics,
    };
}
