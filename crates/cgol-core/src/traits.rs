//! Read-only grid access.

use crate::cell::Cell;

/// Read-only access to a row-major grid of cells.
///
/// Implemented by the arena's `CellView` and by test doubles. All
/// coordinate lookups are bounds-checked: out-of-range coordinates
/// return `None` rather than touching memory outside the buffer.
pub trait CellReader {
    /// Grid width in cells.
    fn width(&self) -> u32;

    /// Grid height in cells.
    fn height(&self) -> u32;

    /// The raw row-major cell bytes, `width * height` long.
    fn cells(&self) -> &[u8];

    /// Row-major index of `(x, y)`, or `None` if out of range.
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        Some(y as usize * self.width() as usize + x as usize)
    }

    /// The cell at `(x, y)`, or `None` if out of range.
    fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let idx = self.index_of(x, y)?;
        self.cells().get(idx).copied().map(Cell::from_byte)
    }

    /// Number of live cells.
    fn population(&self) -> usize {
        self.cells().iter().filter(|&&b| b != 0).count()
    }
}
