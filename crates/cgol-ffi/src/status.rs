//! C-compatible status codes.
//!
//! [`CgolStatus`] is a `repr(i32)` enum covering every failure the C ABI
//! can report. Conversions from the engine's Rust error types are
//! provided.

use cgol_core::{CellError, InitError};
use cgol_engine::ConfigError;

/// C-compatible status code returned by all `cgol_*` functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CgolStatus {
    /// Success.
    Ok = 0,
    /// Handle is invalid or was already destroyed.
    InvalidHandle = -1,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -2,
    /// `init` was given a width or height `<= 0`.
    InvalidDimensions = -3,
    /// `init` asked for more cells than the engine's `max_cells`.
    CellLimitExceeded = -4,
    /// The cell buffers could not be allocated.
    AllocationFailed = -5,
    /// A cell coordinate lies outside the grid.
    OutOfBounds = -6,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -7,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -8,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&InitError> for CgolStatus {
    fn from(e: &InitError) -> Self {
        match e {
            InitError::InvalidDimensions { .. } => CgolStatus::InvalidDimensions,
            InitError::TooManyCells { .. } => CgolStatus::CellLimitExceeded,
            InitError::AllocationFailed { .. } => CgolStatus::AllocationFailed,
        }
    }
}

impl From<&CellError> for CgolStatus {
    fn from(e: &CellError) -> Self {
        match e {
            CellError::OutOfBounds { .. } => CgolStatus::OutOfBounds,
        }
    }
}

impl From<&ConfigError> for CgolStatus {
    fn from(_e: &ConfigError) -> Self {
        CgolStatus::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_is_zero_and_errors_negative() {
        assert_eq!(CgolStatus::Ok as i32, 0);
        for s in [
            CgolStatus::InvalidHandle,
            CgolStatus::InvalidArgument,
            CgolStatus::InvalidDimensions,
            CgolStatus::CellLimitExceeded,
            CgolStatus::AllocationFailed,
            CgolStatus::OutOfBounds,
            CgolStatus::BufferTooSmall,
            CgolStatus::InternalError,
            CgolStatus::Panicked,
        ] {
            assert!((s as i32) < 0, "{s:?} should be negative");
        }
    }

    #[test]
    fn init_errors_map_to_distinct_codes() {
        let dims = InitError::InvalidDimensions {
            width: 0,
            height: 1,
        };
        let limit = InitError::TooManyCells {
            requested: 10,
            max: 5,
        };
        let alloc = InitError::AllocationFailed { cells: 10 };
        assert_eq!(CgolStatus::from(&dims), CgolStatus::InvalidDimensions);
        assert_eq!(CgolStatus::from(&limit), CgolStatus::CellLimitExceeded);
        assert_eq!(CgolStatus::from(&alloc), CgolStatus::AllocationFailed);
    }

    #[test]
    fn cell_error_maps_to_out_of_bounds() {
        let e = CellError::OutOfBounds {
            x: -1,
            y: 0,
            width: 2,
            height: 2,
        };
        assert_eq!(CgolStatus::from(&e), CgolStatus::OutOfBounds);
    }
}
