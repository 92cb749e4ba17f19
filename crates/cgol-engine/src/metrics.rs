//! Per-step population metrics.

/// Population changes recorded by a single step.
///
/// The engine refreshes these after each `step()`; hosts can read them
/// from [`LifeEngine::last_metrics`](crate::LifeEngine::last_metrics)
/// to drive a status line without rescanning the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Cells that were dead and became alive.
    pub births: u64,
    /// Cells that were alive and died.
    pub deaths: u64,
    /// Live cells in the published generation.
    pub population: u64,
}

impl StepMetrics {
    /// Whether the step changed no cell.
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}
