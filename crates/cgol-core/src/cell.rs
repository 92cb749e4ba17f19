//! Binary cell state.

/// The state of a single grid cell.
///
/// Stored in buffers as one byte: `0` for [`Cell::Dead`], `1` for
/// [`Cell::Alive`]. Conversions from raw bytes treat any nonzero value
/// as alive, so bytes written directly by a host normalise on read.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Dead = 0,
    /// Live cell.
    Alive = 1,
}

impl Cell {
    /// Decode a buffer byte. Any nonzero byte is alive.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Cell::Dead
        } else {
            Cell::Alive
        }
    }

    /// Encode as a buffer byte (`0` or `1`).
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.as_byte()
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
