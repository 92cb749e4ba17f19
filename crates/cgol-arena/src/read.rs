//! Read-only view of the current generation.
//!
//! [`CellView`] borrows the cells of a [`crate::CellBuffer`] together
//! with the grid dimensions and the counters identifying the generation
//! it shows. It is the memory-safe counterpart of the raw
//! pointer + length pair exported over the C ABI: every lookup is
//! bounds-checked, and the borrow ends before the grid can be stepped
//! or re-initialised.

use cgol_core::{BufferEpoch, CellReader, Generation};

/// A read-only, bounds-checked view of one published generation.
///
/// # Lifetime
///
/// `'a` is the borrow of the engine that produced the view. Since every
/// mutating engine operation takes `&mut self`, a view can never observe
/// a step in progress, and cannot outlive the buffers it points into.
#[derive(Clone, Copy, Debug)]
pub struct CellView<'a> {
    cells: &'a [u8],
    width: u32,
    height: u32,
    generation: Generation,
    epoch: BufferEpoch,
}

impl<'a> CellView<'a> {
    /// Create a view over `cells`, which must be `width * height` long.
    pub fn new(
        cells: &'a [u8],
        width: u32,
        height: u32,
        generation: Generation,
        epoch: BufferEpoch,
    ) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            cells,
            width,
            height,
            generation,
            epoch,
        }
    }

    /// The raw row-major bytes.
    pub fn as_slice(&self) -> &'a [u8] {
        self.cells
    }

    /// Base address of the viewed buffer.
    pub fn as_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the view has no cells (grid not initialised).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Generation this view shows.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Buffer epoch this view was taken in.
    pub fn epoch(&self) -> BufferEpoch {
        self.epoch
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl CellReader for CellView<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgol_core::Cell;
    use proptest::prelude::*;

    #[test]
    fn rows_split_by_width() {
        let data = [1, 0, 0, 0, 1, 0];
        let view = CellView::new(&data, 3, 2, Generation(0), BufferEpoch(1));
        let rows: Vec<&[u8]> = view.rows().collect();
        assert_eq!(rows, vec![&[1, 0, 0][..], &[0, 1, 0][..]]);
    }

    #[test]
    fn empty_view_has_no_rows() {
        let view = CellView::new(&[], 0, 0, Generation(0), BufferEpoch(0));
        assert!(view.is_empty());
        assert_eq!(view.rows().count(), 0);
        assert_eq!(view.cell(0, 0), None);
    }

    #[test]
    fn counters_are_carried() {
        let data = [0u8; 4];
        let view = CellView::new(&data, 2, 2, Generation(9), BufferEpoch(3));
        assert_eq!(view.generation(), Generation(9));
        assert_eq!(view.epoch(), BufferEpoch(3));
        assert_eq!(view.as_ptr(), data.as_ptr());
    }

    proptest! {
        #[test]
        fn lookups_never_escape_buffer(x in any::<i32>(), y in any::<i32>()) {
            let data = [1u8; 12];
            let view = CellView::new(&data, 4, 3, Generation(0), BufferEpoch(1));
            let expected = (0..4).contains(&x) && (0..3).contains(&y);
            prop_assert_eq!(view.cell(x, y).is_some(), expected);
            if expected {
                prop_assert_eq!(view.cell(x, y), Some(Cell::Alive));
            }
        }
    }
}
