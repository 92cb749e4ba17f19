//! The step kernel: one row of the next generation at a time.

use cgol_arena::PrevRows;
use cgol_core::Cell;
use cgol_space::{resolve_axis, GridShape};

use crate::metrics::StepMetrics;
use crate::rule::LifeRule;

/// Per-grid step state.
///
/// Holds the resolved column triples `(x - 1, x, x + 1)` for every
/// column. They depend only on width and edge behaviour, so `init`
/// builds them once and every step reuses them.
#[derive(Clone, Debug, Default)]
pub(crate) struct StepKernel {
    cols: Vec<[Option<usize>; 3]>,
}

impl StepKernel {
    pub(crate) fn new(shape: &GridShape) -> Self {
        let w = shape.width();
        let cols = (0..w as i64)
            .map(|x| [-1, 0, 1].map(|d| resolve_axis(x + d, w, shape.edge()).map(|c| c as usize)))
            .collect();
        Self { cols }
    }

    /// Overwrite `out`, row `prev.y()`, with its next generation.
    ///
    /// Neighbours come only from `prev`, so no cell can observe another
    /// cell's updated value. Absorbed rows and columns contribute
    /// nothing. Births, deaths and the row's population are added to
    /// `metrics`.
    pub(crate) fn rewrite_row(
        &self,
        shape: &GridShape,
        rule: &LifeRule,
        prev: &PrevRows<'_>,
        out: &mut [u8],
        metrics: &mut StepMetrics,
    ) {
        debug_assert_eq!(out.len(), self.cols.len());
        let y = prev.y() as i64;
        let rows = [-1, 0, 1].map(|d| {
            resolve_axis(y + d, shape.height(), shape.edge()).and_then(|r| prev.row(r as usize))
        });
        let here = prev.here();

        for (x, col) in self.cols.iter().enumerate() {
            let mut live = 0u8;
            for (dy, row) in rows.iter().enumerate() {
                let Some(row) = row else { continue };
                for (dx, c) in col.iter().enumerate() {
                    if dy == 1 && dx == 1 {
                        continue;
                    }
                    if let Some(c) = c {
                        live += u8::from(row[*c] != 0);
                    }
                }
            }

            let current = Cell::from_byte(here[x]);
            let updated = rule.next(current, live);
            out[x] = updated.as_byte();

            match (current, updated) {
                (Cell::Dead, Cell::Alive) => metrics.births += 1,
                (Cell::Alive, Cell::Dead) => metrics.deaths += 1,
                _ => {}
            }
            metrics.population += u64::from(updated.is_alive());
        }
    }
}
