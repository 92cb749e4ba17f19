//! Core types and traits for the CGOL Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the workspace: the
//! [`Cell`] state, strongly-typed counters, error types, and the
//! [`CellReader`] trait through which grids are inspected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::Cell;
pub use error::{CellError, InitError, RuleError};
pub use id::{BufferEpoch, Generation};
pub use traits::CellReader;
