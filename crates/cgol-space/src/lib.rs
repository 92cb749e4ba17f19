//! Grid topology for the CGOL engine.
//!
//! This crate defines [`GridShape`], the row-major 2D lattice every grid
//! is laid out on, and [`EdgeBehavior`], which decides how the Moore
//! neighbourhood behaves at the grid's edges. It owns no cell data: the
//! arena stores bytes, the shape maps coordinates to indices.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid::{resolve_axis, GridShape, MOORE_OFFSETS};
