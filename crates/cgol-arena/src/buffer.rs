//! The published cell buffer.
//!
//! [`CellBuffer`] owns one `width * height` byte allocation per grid.
//! Its base address is fixed from [`zeroed`](CellBuffer::zeroed) until
//! the buffer is dropped, so a host may hold on to the pointer between
//! steps. A step rewrites the buffer row by row through
//! [`advance`](CellBuffer::advance); neighbours are read from a
//! [`PrevRows`] window, which always shows the previous generation.
//!
//! Because `advance` takes `&mut self`, nothing can read the buffer
//! while rows are being rewritten.

use cgol_core::Generation;

use crate::error::ArenaError;
use crate::scratch::{zeroed_vec, PrevRows, RowScratch};

/// A grid's cells plus the row scratch used to step them in place.
#[derive(Debug, Default)]
pub struct CellBuffer {
    cells: Vec<u8>,
    width: usize,
    scratch: RowScratch,
    /// Steps since construction or the last reset.
    generation: Generation,
}

impl CellBuffer {
    /// Storage with no cells, used before the first grid is created.
    pub const fn empty() -> Self {
        Self {
            cells: Vec::new(),
            width: 0,
            scratch: RowScratch::empty(),
            generation: Generation(0),
        }
    }

    /// Allocate a zero-filled `width x height` buffer and its row scratch.
    ///
    /// Uses fallible reservation so an oversized request surfaces as
    /// `Err(ArenaError::AllocationFailed)` instead of aborting.
    pub fn zeroed(width: usize, height: usize) -> Result<Self, ArenaError> {
        let len = width
            .checked_mul(height)
            .ok_or(ArenaError::AllocationFailed { cells: usize::MAX })?;
        let cells = zeroed_vec(len)?;
        Ok(Self {
            cells,
            width,
            scratch: RowScratch::zeroed(width)?,
            generation: Generation(0),
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The current generation.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Mutable access to the current generation.
    ///
    /// Edits made here are what the next [`advance`](Self::advance) reads.
    pub fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Steps since construction or [`reset_generation`](Self::reset_generation).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Restart generation counting from 0 without touching cells.
    pub fn reset_generation(&mut self) {
        self.generation = Generation(0);
    }

    /// Set every cell to `byte`.
    pub fn fill(&mut self, byte: u8) {
        self.cells.fill(byte);
    }

    /// Rewrite every row in place, top to bottom, then count a generation.
    ///
    /// `rewrite_row` receives the previous generation and the row to
    /// overwrite; it must write every byte of the row. Rows are handed
    /// out in order `0..height`. Does nothing on an empty buffer.
    pub fn advance(&mut self, mut rewrite_row: impl FnMut(&PrevRows<'_>, &mut [u8])) {
        let width = self.width;
        if self.cells.is_empty() {
            return;
        }
        let height = self.cells.len() / width;
        for y in 0..height {
            let (head, below) = self.cells.split_at_mut((y + 1) * width);
            let row = &mut head[y * width..];
            let prev = self.scratch.capture(y, row, below);
            rewrite_row(&prev, row);
            self.scratch.retire(y);
        }
        self.generation = self.generation.next();
    }
}
