//! Test utilities and mock types for CGOL development.
//!
//! Provides a [`MockGrid`] implementation of [`CellReader`], ASCII
//! conversion helpers, and the well-known [`fixtures`] patterns used
//! across the workspace's integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cgol_core::{Cell, CellReader};
use cgol_engine::{EngineConfig, LifeEngine};

/// Owned grid implementing [`CellReader`].
///
/// Backed by a plain `Vec<u8>` so tests can hand-craft grids without an
/// engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl MockGrid {
    /// All-dead grid of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    /// Parse rows of `#`/`O` (alive) and `.`/space (dead).
    ///
    /// Panics on ragged rows or unknown characters.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.chars().count(),
                width as usize,
                "row {y} has a different width"
            );
            for (x, ch) in row.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' => true,
                    '.' | ' ' => false,
                    other => panic!("unexpected character {other:?} at ({x}, {y})"),
                };
                grid.cells[y * width as usize + x] = u8::from(alive);
            }
        }
        grid
    }

    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = cell.as_byte();
    }
}

impl CellReader for MockGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Render any grid as rows of `#` and `.`.
pub fn to_ascii(grid: &dyn CellReader) -> Vec<String> {
    let w = grid.width().max(1) as usize;
    grid.cells()
        .chunks(w)
        .take(grid.height() as usize)
        .map(|row| {
            row.iter()
                .map(|&b| if b != 0 { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Build an engine holding the ASCII pattern, using `config`.
pub fn engine_from_ascii_with(config: EngineConfig, rows: &[&str]) -> LifeEngine {
    let grid = MockGrid::from_ascii(rows);
    let mut engine = LifeEngine::new(config).expect("valid config");
    engine
        .init(grid.width as i32, grid.height as i32)
        .expect("pattern fits");
    engine.cells_mut().copy_from_slice(&grid.cells);
    engine
}

/// Build a default-configured (absorbing, Conway) engine from ASCII.
pub fn engine_from_ascii(rows: &[&str]) -> LifeEngine {
    engine_from_ascii_with(EngineConfig::default(), rows)
}

/// Current engine grid rendered as ASCII rows.
pub fn engine_ascii(engine: &LifeEngine) -> Vec<String> {
    to_ascii(&engine.cells())
}
