//! Well-known Life patterns.
//!
//! Every pattern is padded with a dead margin wide enough that it
//! evolves on an absorbing grid exactly as it would on an infinite
//! plane, for at least one full period.

/// 2x2 still life.
pub const BLOCK: &[&str] = &["....", ".##.", ".##.", "...."];

/// Six-cell still life.
pub const BEEHIVE: &[&str] = &["......", "..##..", ".#..#.", "..##..", "......"];

/// Period-2 oscillator, horizontal phase.
pub const BLINKER_H: &[&str] = &[".....", ".....", ".###.", ".....", "....."];

/// Period-2 oscillator, vertical phase.
pub const BLINKER_V: &[&str] = &[".....", "..#..", "..#..", "..#..", "....."];

/// Period-2 oscillator, first phase.
pub const TOAD_A: &[&str] = &["......", "......", "..###.", ".###..", "......", "......"];

/// Period-2 oscillator, second phase.
pub const TOAD_B: &[&str] = &["......", "...#..", ".#..#.", ".#..#.", "..#...", "......"];

/// South-east moving glider in the top-left corner of an 8x8 grid.
///
/// Every 4 generations it reappears shifted by (+1, +1).
pub const GLIDER: &[&str] = &[
    ".#......",
    "..#.....",
    "###.....",
    "........",
    "........",
    "........",
    "........",
    "........",
];

/// Live cells of [`GLIDER`] as `(x, y)` pairs.
pub const GLIDER_CELLS: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
