//! Row scratch for rewriting a grid in place.
//!
//! Rewriting row `y` destroys its previous contents, yet row `y + 1`
//! still needs them, and on a torus so does the last row (whose lower
//! neighbour is row 0). [`RowScratch`] keeps exactly those pre-step
//! copies. Its three rows are allocated once per grid and rotated with
//! `mem::swap` between rows, so a step never allocates.

use std::cmp::Ordering;
use std::mem;

use crate::error::ArenaError;

/// Three `width`-byte rows holding pre-step copies.
#[derive(Debug, Default)]
pub(crate) struct RowScratch {
    /// Row 0 as it was before the step, once row 0 has been rewritten.
    first: Vec<u8>,
    /// The row above the one being rewritten.
    above: Vec<u8>,
    /// The row being rewritten.
    here: Vec<u8>,
}

impl RowScratch {
    pub(crate) const fn empty() -> Self {
        Self {
            first: Vec::new(),
            above: Vec::new(),
            here: Vec::new(),
        }
    }

    pub(crate) fn zeroed(width: usize) -> Result<Self, ArenaError> {
        Ok(Self {
            first: zeroed_vec(width)?,
            above: zeroed_vec(width)?,
            here: zeroed_vec(width)?,
        })
    }

    /// Save `row` (row `y`) and open a window over the previous generation.
    ///
    /// `below` must be the not-yet-rewritten rows `y + 1..`.
    pub(crate) fn capture<'a>(
        &'a mut self,
        y: usize,
        row: &[u8],
        below: &'a [u8],
    ) -> PrevRows<'a> {
        self.here.copy_from_slice(row);
        PrevRows {
            y,
            width: row.len(),
            first: &self.first,
            above: &self.above,
            here: &self.here,
            below,
        }
    }

    /// Row `y` has been rewritten: keep its saved copy for later rows.
    pub(crate) fn retire(&mut self, y: usize) {
        if y == 0 {
            mem::swap(&mut self.first, &mut self.here);
        } else {
            mem::swap(&mut self.above, &mut self.here);
        }
    }
}

/// The previous generation, as visible while row [`y`](PrevRows::y) is
/// being rewritten.
#[derive(Clone, Copy, Debug)]
pub struct PrevRows<'a> {
    y: usize,
    width: usize,
    first: &'a [u8],
    above: &'a [u8],
    here: &'a [u8],
    below: &'a [u8],
}

impl<'a> PrevRows<'a> {
    /// Index of the row being rewritten.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Previous contents of the row being rewritten.
    pub fn here(&self) -> &'a [u8] {
        self.here
    }

    /// Previous contents of row `r`.
    ///
    /// Holds row `y` itself, `y - 1`, every row below `y`, and row 0.
    /// Any other row has already been overwritten and yields `None`, as
    /// do rows past the end of the grid.
    pub fn row(&self, r: usize) -> Option<&'a [u8]> {
        match r.cmp(&self.y) {
            Ordering::Equal => Some(self.here),
            Ordering::Greater => {
                let start = (r - self.y - 1).checked_mul(self.width)?;
                self.below.get(start..start.checked_add(self.width)?)
            }
            Ordering::Less if r == 0 => Some(self.first),
            Ordering::Less if r + 1 == self.y => Some(self.above),
            Ordering::Less => None,
        }
    }
}

/// Zero-filled `Vec` of `len` bytes, reserved fallibly.
pub(crate) fn zeroed_vec(len: usize) -> Result<Vec<u8>, ArenaError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| ArenaError::AllocationFailed { cells: len })?;
    v.resize(len, 0);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_serves_saved_and_pending_rows() {
        let mut scratch = RowScratch::zeroed(2).unwrap();
        // Rows 0 and 1 already rewritten; row 2 in progress; row 3 pending.
        scratch.first.copy_from_slice(&[0, 1]);
        scratch.above.copy_from_slice(&[1, 0]);
        let below = [1, 1];
        let prev = scratch.capture(2, &[0, 0], &below);
        assert_eq!(prev.y(), 2);
        assert_eq!(prev.row(0), Some(&[0, 1][..]));
        assert_eq!(prev.row(1), Some(&[1, 0][..]));
        assert_eq!(prev.row(2), Some(&[0, 0][..]));
        assert_eq!(prev.row(3), Some(&[1, 1][..]));
        assert_eq!(prev.row(4), None);
    }

    #[test]
    fn overwritten_rows_are_not_served() {
        let mut scratch = RowScratch::zeroed(1).unwrap();
        let prev = scratch.capture(5, &[1], &[]);
        assert_eq!(prev.row(0).map(<[u8]>::len), Some(1));
        assert_eq!(prev.row(4).map(<[u8]>::len), Some(1));
        assert_eq!(prev.row(2), None);
        assert_eq!(prev.row(3), None);
    }

    #[test]
    fn retire_rotates_without_reallocating() {
        let mut scratch = RowScratch::zeroed(3).unwrap();
        let ptrs = [
            scratch.first.as_ptr(),
            scratch.above.as_ptr(),
            scratch.here.as_ptr(),
        ];
        scratch.capture(0, &[1, 2, 3], &[]);
        scratch.retire(0);
        assert_eq!(scratch.first, [1, 2, 3]);
        scratch.capture(1, &[4, 5, 6], &[]);
        scratch.retire(1);
        assert_eq!(scratch.above, [4, 5, 6]);
        let mut after = [
            scratch.first.as_ptr(),
            scratch.above.as_ptr(),
            scratch.here.as_ptr(),
        ];
        after.sort();
        let mut before = ptrs;
        before.sort();
        assert_eq!(after, before);
    }
}
