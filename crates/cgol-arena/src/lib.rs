//! In-place cell storage for the CGOL engine.
//!
//! # Architecture
//!
//! ```text
//! CellBuffer
//! ├── cells: Vec<u8>    ←─── current generation (fixed address, read by hosts)
//! └── RowScratch        ←─── three pre-step rows, rotated during a step
//!     ├── first
//!     ├── above
//!     └── here
//! ```
//!
//! A step rewrites `cells` one row at a time. Before a row is
//! overwritten its old contents move into the scratch, and every
//! neighbour lookup goes through [`PrevRows`], so the new generation is
//! computed purely from the old one without a second grid-sized buffer.
//! [`CellView`] is the bounds-checked read view handed to callers.
//!
//! All storage is zero-initialised `Vec<u8>`; this crate contains no
//! `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod read;
mod scratch;

pub use buffer::CellBuffer;
pub use error::ArenaError;
pub use read::CellView;
pub use scratch::PrevRows;
