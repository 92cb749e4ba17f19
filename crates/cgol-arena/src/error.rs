//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use cgol_core::InitError;

/// Errors that can occur while allocating cell storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocator refused the request.
    AllocationFailed {
        /// Cells requested per buffer.
        cells: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { cells } => {
                write!(f, "arena allocation of {cells} cells failed")
            }
        }
    }
}

impl Error for ArenaError {}

impl From<ArenaError> for InitError {
    fn from(e: ArenaError) -> Self {
        match e {
            ArenaError::AllocationFailed { cells } => InitError::AllocationFailed { cells },
        }
    }
}
