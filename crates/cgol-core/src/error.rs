//! Error types for the CGOL engine.
//!
//! Organised by operation: grid initialisation, per-cell access, and
//! rule parsing. None of these are fatal: every failure leaves the grid
//! in its last valid state.

use std::error::Error;
use std::fmt;

/// Errors from `init`: the requested grid could not be created.
///
/// The previous grid, if any, is untouched when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    /// Width or height is zero or negative.
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// `width * height` overflows or exceeds the configured cell ceiling.
    TooManyCells {
        /// Requested cell count (saturated on overflow).
        requested: u64,
        /// Configured maximum.
        max: u64,
    },
    /// The allocator could not provide the cell buffers.
    AllocationFailed {
        /// Number of cells per buffer that was requested.
        cells: usize,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::TooManyCells { requested, max } => {
                write!(f, "grid of {requested} cells exceeds limit of {max}")
            }
            Self::AllocationFailed { cells } => {
                write!(f, "failed to allocate buffers for {cells} cells")
            }
        }
    }
}

impl Error for InitError {}

/// Errors from single-cell mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellError {
    /// The coordinate lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Grid width at the time of the call.
        width: u32,
        /// Grid height at the time of the call.
        height: u32,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "cell ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
            ),
        }
    }
}

impl Error for CellError {}

/// Errors from parsing a rule string such as `"B3/S23"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The string is not in `B<digits>/S<digits>` form.
    Malformed {
        /// The offending input.
        rule: String,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { rule, reason } => {
                write!(f, "malformed rule '{rule}': {reason}")
            }
        }
    }
}

impl Error for RuleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_messages() {
        assert_eq!(
            InitError::InvalidDimensions {
                width: 0,
                height: 5
            }
            .to_string(),
            "invalid grid dimensions 0x5"
        );
        assert_eq!(
            InitError::TooManyCells {
                requested: 200,
                max: 100
            }
            .to_string(),
            "grid of 200 cells exceeds limit of 100"
        );
    }

    #[test]
    fn cell_error_message_names_bounds() {
        let e = CellError::OutOfBounds {
            x: -1,
            y: 3,
            width: 10,
            height: 4,
        };
        assert_eq!(e.to_string(), "cell (-1, 3) out of bounds: [0, 10) x [0, 4)");
    }

    #[test]
    fn errors_are_std_errors() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&InitError::AllocationFailed { cells: 1 });
        takes_error(&RuleError::Malformed {
            rule: "x".into(),
            reason: "y".into(),
        });
    }
}
