//! Strongly-typed counters for grid lifetime tracking.

use std::fmt;

/// Number of steps applied since the grid was last initialised,
/// cleared, or randomised.
///
/// Incremented by one on every published step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Buffer layout epoch.
///
/// Incremented each time a grid is successfully (re)initialised. Any
/// pointer, length, or view obtained under an older epoch is stale:
/// the buffers it referred to have been released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferEpoch(pub u64);

impl BufferEpoch {
    /// The epoch that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for BufferEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BufferEpoch {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
