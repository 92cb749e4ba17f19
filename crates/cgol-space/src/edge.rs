//! Edge (boundary) behaviour for the grid.

/// How the grid treats neighbour positions beyond its edges.
///
/// Only affects neighbour resolution during a step. Coordinates passed
/// to cell accessors are never wrapped: out-of-range accessor calls are
/// rejected regardless of the edge behaviour.
///
/// # Examples
///
/// ```
/// use cgol_space::{EdgeBehavior, GridShape};
///
/// let alive = [1u8; 16];
///
/// // Absorb: a corner has 3 neighbours, an interior cell 8.
/// let bounded = GridShape::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(bounded.live_neighbours(&alive, 0, 0), 3);
/// assert_eq!(bounded.live_neighbours(&alive, 1, 1), 8);
///
/// // Wrap: every cell has exactly 8 neighbours (torus).
/// let torus = GridShape::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(torus.live_neighbours(&alive, 0, 0), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Bounded grid: positions beyond the edge are permanently dead.
    #[default]
    Absorb,
    /// Toroidal grid: positions wrap to the opposite edge.
    Wrap,
}

impl EdgeBehavior {
    /// Stable numeric code used across the C ABI.
    pub fn code(self) -> i32 {
        match self {
            EdgeBehavior::Absorb => 0,
            EdgeBehavior::Wrap => 1,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(EdgeBehavior::Absorb),
            1 => Some(EdgeBehavior::Wrap),
            _ => None,
        }
    }
}
