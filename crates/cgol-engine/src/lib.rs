//! Game of Life simulation engine.
//!
//! [`LifeEngine`] owns one grid and implements every operation of the
//! engine contract: `init`, buffer access, `get_cell` / `set_cell` /
//! `toggle_cell`, `clear`, `randomize`, and `step`. It is a plain value:
//! create as many as you like, each fully independent.
//!
//! The engine is single-threaded and non-reentrant by construction:
//! mutating methods take `&mut self` and the [`CellView`] returned by
//! [`LifeEngine::cells`] borrows the engine, so the compiler rules out
//! reading a grid while it is being stepped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod hash;
pub mod metrics;
pub mod random;
pub mod rule;
mod step;

pub use cgol_arena::CellView;
pub use config::{ConfigError, EngineConfig};
pub use engine::LifeEngine;
pub use metrics::StepMetrics;
pub use rule::LifeRule;
