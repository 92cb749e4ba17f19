//! Row-major 2D grid with an 8-connected (Moore) neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;

/// All 8 Moore offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Resolve a single axis value under the given edge behaviour.
///
/// Returns `Some(value)` when it lands on the axis, either directly or
/// by wrapping, and `None` for an absorbed out-of-range position. Takes
/// `i64` so that `-1` and `len` are representable for any `u32` length.
#[inline]
pub fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<u32> {
    let n = len as i64;
    if n == 0 {
        return None;
    }
    if val >= 0 && val < n {
        return Some(val as u32);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n) as u32),
    }
}

/// The dimensions and edge behaviour of a grid.
///
/// Cell `(x, y)` lives at row-major index `y * width + x`. A shape never
/// owns cell data; it only validates coordinates and resolves
/// neighbours so that callers never index outside a buffer of
/// [`cell_count`](GridShape::cell_count) bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
}

impl GridShape {
    /// Largest accepted dimension: coordinates are `i32` at the API edge.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width x height` shape.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            edge,
        })
    }

    /// The 0x0 shape of a grid that has not been initialised yet.
    ///
    /// Every coordinate is out of bounds and there are no cells.
    pub const fn empty(edge: EdgeBehavior) -> Self {
        Self {
            width: 0,
            height: 0,
            edge,
        }
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge behaviour.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether this is the empty 0x0 shape.
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Row-major index of `(x, y)`, or `None` if out of range.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Resolve `(x + dx, y + dy)` under the edge behaviour.
    ///
    /// Returns the row-major index of the resolved cell, or `None` if the
    /// position is absorbed.
    #[inline]
    pub fn offset_index(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<usize> {
        let nx = resolve_axis(x as i64 + dx as i64, self.width, self.edge)?;
        let ny = resolve_axis(y as i64 + dy as i64, self.height, self.edge)?;
        Some(ny as usize * self.width as usize + nx as usize)
    }

    /// Number of live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// `cells` must be a row-major buffer of this shape; any nonzero byte
    /// counts as alive. Under `Absorb` a corner has at most 3 neighbours
    /// and an edge cell 5. Under `Wrap` on axes shorter than 3 the same
    /// cell may be resolved more than once; it is counted each time.
    #[inline]
    pub fn live_neighbours(&self, cells: &[u8], x: u32, y: u32) -> u8 {
        let mut count = 0u8;
        for (dx, dy) in MOORE_OFFSETS {
            if let Some(i) = self.offset_index(x, y, dx, dy) {
                if cells.get(i).is_some_and(|&b| b != 0) {
                    count += 1;
                }
            }
        }
        count
    }
}
