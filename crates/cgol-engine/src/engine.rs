//! The Game of Life engine.
//!
//! [`LifeEngine`] is the user-facing API. It owns a [`GridShape`] and a
//! [`CellBuffer`] and implements every engine operation on top of them.
//!
//! # Buffer address
//!
//! The cell buffer is allocated by `init` and stepped in place, so its
//! base address and length stay fixed until the next successful `init`.
//! A host may cache the pointer from [`cells_mut`](LifeEngine::cells_mut)
//! across any number of steps.
//!
//! # Coordinate policy
//!
//! Accessor coordinates are never wrapped, whatever the edge behaviour:
//!
//! - [`get_cell`](LifeEngine::get_cell) returns [`Cell::Dead`] for any
//!   out-of-range coordinate (the same value absorbed neighbours have)
//! - [`set_cell`](LifeEngine::set_cell) and
//!   [`toggle_cell`](LifeEngine::toggle_cell) leave the grid untouched
//!   and return [`CellError::OutOfBounds`]
//!
//! # Ownership model
//!
//! `LifeEngine` is [`Send`] but every mutating method takes `&mut self`,
//! and [`cells()`](LifeEngine::cells) returns a [`CellView`] that
//! borrows from `self`. The caller cannot step while holding a view.

use cgol_arena::{CellBuffer, CellView};
use cgol_core::{BufferEpoch, Cell, CellError, CellReader, Generation, InitError};
use cgol_space::{EdgeBehavior, GridShape};
use log::{debug, trace, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::hash;
use crate::metrics::StepMetrics;
use crate::random;
use crate::rule::LifeRule;
use crate::step::StepKernel;

// Compile-time assertion: LifeEngine can move to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LifeEngine>();
    }
};

/// A single Game of Life grid and the operations on it.
///
/// Created empty (0x0) by [`new()`](LifeEngine::new); call
/// [`init()`](LifeEngine::init) to allocate a grid. Until then every
/// read returns dead, every write reports out-of-bounds, and `step`,
/// `clear` and `randomize` do nothing.
///
/// # Example
///
/// ```
/// use cgol_core::Cell;
/// use cgol_engine::LifeEngine;
///
/// let mut engine = LifeEngine::default();
/// engine.init(5, 5).unwrap();
/// // Horizontal blinker through the centre.
/// for x in 1..4 {
///     engine.set_cell(x, 2, Cell::Alive).unwrap();
/// }
/// engine.step();
/// assert_eq!(engine.get_cell(2, 1), Cell::Alive);
/// assert_eq!(engine.get_cell(1, 2), Cell::Dead);
/// ```
pub struct LifeEngine {
    config: EngineConfig,
    shape: GridShape,
    cells: CellBuffer,
    kernel: StepKernel,
    epoch: BufferEpoch,
    last_metrics: StepMetrics,
}

impl LifeEngine {
    /// Create an engine with no grid yet.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shape: GridShape::empty(config.edge),
            cells: CellBuffer::empty(),
            kernel: StepKernel::default(),
            epoch: BufferEpoch(0),
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    /// Default-configured engine with a `width x height` grid.
    pub fn with_size(width: i32, height: i32) -> Result<Self, InitError> {
        let mut engine = Self::default();
        engine.init(width, height)?;
        Ok(engine)
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Allocate a fresh all-dead `width x height` grid.
    ///
    /// Discards the previous grid and starts a new [`BufferEpoch`]: every
    /// pointer, length or view obtained before this call is stale.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] if either dimension is `<= 0`, if
    /// `width * height` exceeds [`EngineConfig::max_cells`], or if the
    /// buffers cannot be allocated. On error the previous grid is left
    /// exactly as it was, including its buffer address.
    pub fn init(&mut self, width: i32, height: i32) -> Result<(), InitError> {
        if width <= 0 || height <= 0 {
            warn!("init rejected: invalid dimensions {width}x{height}");
            return Err(InitError::InvalidDimensions { width, height });
        }
        let requested = width as u64 * height as u64;
        if requested > self.config.max_cells as u64 {
            warn!(
                "init rejected: {requested} cells exceeds limit of {}",
                self.config.max_cells
            );
            return Err(InitError::TooManyCells {
                requested,
                max: self.config.max_cells as u64,
            });
        }
        let shape = GridShape::new(width as u32, height as u32, self.config.edge)
            .map_err(|_| InitError::InvalidDimensions { width, height })?;

        // Allocate before touching self so failure leaves the old grid intact.
        let cells = CellBuffer::zeroed(width as usize, height as usize).map_err(|e| {
            warn!("init rejected: {e}");
            InitError::from(e)
        })?;

        self.shape = shape;
        self.cells = cells;
        self.kernel = StepKernel::new(&shape);
        self.epoch = self.epoch.next();
        self.last_metrics = StepMetrics::default();
        debug!(
            "initialised {width}x{height} grid (epoch {}, {:?} edges)",
            self.epoch, self.config.edge
        );
        Ok(())
    }

    // ── Buffer access ───────────────────────────────────────────

    /// Bounds-checked view of the current generation.
    pub fn cells(&self) -> CellView<'_> {
        CellView::new(
            self.cells.cells(),
            self.shape.width(),
            self.shape.height(),
            self.cells.generation(),
            self.epoch,
        )
    }

    /// Direct mutable access to the current generation's bytes.
    ///
    /// Intended for hosts that paint cells straight into the buffer.
    /// Nonzero bytes count as alive; the next step normalises them.
    /// The slice's address is the same after every `step`, `clear` and
    /// `randomize` until the next successful `init`.
    pub fn cells_mut(&mut self) -> &mut [u8] {
        self.cells.cells_mut()
    }

    /// Number of cells, `width * height`; 0 before the first `init`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no grid has been initialised.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.shape.width()
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.shape.height()
    }

    /// Shape of the current grid.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Current buffer epoch (number of successful `init` calls).
    pub fn epoch(&self) -> BufferEpoch {
        self.epoch
    }

    /// Steps taken since the last `init`, `clear` or `randomize`.
    pub fn generation(&self) -> Generation {
        self.cells.generation()
    }

    // ── Queries & mutation ──────────────────────────────────────

    /// State of `(x, y)`; [`Cell::Dead`] when out of range.
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        self.cells().cell(x, y).unwrap_or(Cell::Dead)
    }

    /// State of `(x, y)`, or an error when out of range.
    pub fn try_get_cell(&self, x: i32, y: i32) -> Result<Cell, CellError> {
        self.cells().cell(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Set `(x, y)` to `cell`.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), CellError> {
        let idx = self.index(x, y)?;
        self.cells.cells_mut()[idx] = cell.as_byte();
        Ok(())
    }

    /// Flip `(x, y)` and return its new state.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<Cell, CellError> {
        let idx = self.index(x, y)?;
        let slot = &mut self.cells.cells_mut()[idx];
        let updated = Cell::from_byte(*slot).toggled();
        *slot = updated.as_byte();
        Ok(updated)
    }

    /// Live Moore neighbours of `(x, y)` under the configured edge
    /// behaviour, or `None` when out of range.
    pub fn live_neighbours(&self, x: i32, y: i32) -> Option<u8> {
        self.shape.index(x, y)?;
        Some(
            self.shape
                .live_neighbours(self.cells.cells(), x as u32, y as u32),
        )
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells().population()
    }

    /// FNV-1a hash of the grid's dimensions and cells.
    pub fn fingerprint(&self) -> u64 {
        hash::fingerprint(self.width(), self.height(), self.cells.cells())
    }

    /// Kill every cell. Dimensions are unchanged; the generation restarts at 0.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead.as_byte());
        self.cells.reset_generation();
        self.last_metrics = StepMetrics::default();
    }

    /// Repopulate every cell from a seeded generator.
    ///
    /// Each cell is alive with probability `density`. Densities outside
    /// `[0, 1]` are clamped (NaN counts as 0). The same
    /// `(seed, density, width, height)` always produces the same grid.
    /// Returns the resulting population.
    pub fn randomize(&mut self, seed: u64, density: f64) -> usize {
        let clamped = random::clamp_density(density);
        if clamped != density {
            warn!("randomize: density {density} clamped to {clamped}");
        }
        let population = random::fill_random(self.cells.cells_mut(), seed, clamped);
        self.cells.reset_generation();
        self.last_metrics = StepMetrics {
            births: 0,
            deaths: 0,
            population: population as u64,
        };
        debug!(
            "randomized {}x{} grid: seed {seed}, density {clamped}, population {population}",
            self.width(),
            self.height()
        );
        population
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Advance exactly one generation.
    ///
    /// Rows are rewritten in place, top to bottom; each one is computed
    /// from the previous generation held by the row scratch, so the step
    /// is simultaneous for every cell and the buffer never moves.
    /// Does nothing before the first `init`.
    pub fn step(&mut self) -> StepMetrics {
        if self.shape.is_empty() {
            return StepMetrics::default();
        }
        let shape = self.shape;
        let rule = self.config.rule;
        let kernel = &self.kernel;
        let mut metrics = StepMetrics::default();
        self.cells.advance(|prev, row| {
            kernel.rewrite_row(&shape, &rule, prev, row, &mut metrics);
        });
        self.last_metrics = metrics;
        trace!(
            "generation {}: +{} -{} = {}",
            self.cells.generation(),
            metrics.births,
            metrics.deaths,
            metrics.population
        );
        metrics
    }

    /// Advance `n` generations; returns the metrics of the last one.
    pub fn step_n(&mut self, n: u32) -> StepMetrics {
        for _ in 0..n {
            self.step();
        }
        self.last_metrics
    }

    /// Metrics from the most recent step (or randomize).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    // ── Configuration ───────────────────────────────────────────

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Edge behaviour used for neighbour counting.
    pub fn edge(&self) -> EdgeBehavior {
        self.config.edge
    }

    /// Current transition rule.
    pub fn rule(&self) -> LifeRule {
        self.config.rule
    }

    /// Replace the transition rule. Takes effect on the next step.
    pub fn set_rule(&mut self, rule: LifeRule) {
        debug!("rule changed {} -> {rule}", self.config.rule);
        self.config.rule = rule;
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, CellError> {
        self.shape.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> CellError {
        CellError::OutOfBounds {
            x,
            y,
            width: self.shape.width(),
            height: self.shape.height(),
        }
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            shape: GridShape::empty(EdgeBehavior::default()),
            cells: CellBuffer::empty(),
            kernel: StepKernel::default(),
            epoch: BufferEpoch(0),
            last_metrics: StepMetrics::default(),
        }
    }
}

impl std::fmt::Debug for LifeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifeEngine")
            .field("width", &self.shape.width())
            .field("height", &self.shape.height())
            .field("edge", &self.config.edge)
            .field("rule", &format_args!("{}", self.config.rule))
            .field("epoch", &self.epoch)
            .field("generation", &self.cells.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(w: i32, h: i32) -> LifeEngine {
        LifeEngine::with_size(w, h).unwrap()
    }

    // ── init ────────────────────────────────────────────────────

    #[test]
    fn init_allocates_dead_grid() {
        let e = engine(7, 3);
        assert_eq!(e.len(), 21);
        assert_eq!((e.width(), e.height()), (7, 3));
        assert_eq!(e.population(), 0);
        assert_eq!(e.epoch(), BufferEpoch(1));
    }

    #[test]
    fn init_rejects_non_positive_dimensions() {
        let mut e = LifeEngine::default();
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3), (i32::MIN, 1)] {
            assert_eq!(
                e.init(w, h),
                Err(InitError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
        assert!(e.is_empty());
        assert_eq!(e.epoch(), BufferEpoch(0));
    }

    #[test]
    fn init_rejects_grid_over_ceiling() {
        let config = EngineConfig {
            max_cells: 100,
            ..EngineConfig::default()
        };
        let mut e = LifeEngine::new(config).unwrap();
        assert!(e.init(10, 10).is_ok());
        assert_eq!(
            e.init(11, 10),
            Err(InitError::TooManyCells {
                requested: 110,
                max: 100
            })
        );
    }

    #[test]
    fn failed_init_preserves_previous_grid() {
        let mut e = engine(4, 4);
        e.set_cell(1, 2, Cell::Alive).unwrap();
        let before = e.fingerprint();
        assert!(e.init(i32::MAX, i32::MAX).is_err());
        assert!(e.init(0, 4).is_err());
        assert_eq!(e.fingerprint(), before);
        assert_eq!(e.get_cell(1, 2), Cell::Alive);
        assert_eq!(e.epoch(), BufferEpoch(1));
    }

    #[test]
    fn reinit_resets_state_and_bumps_epoch() {
        let mut e = engine(4, 4);
        e.randomize(1, 1.0);
        e.step();
        e.init(6, 2).unwrap();
        assert_eq!(e.len(), 12);
        assert_eq!(e.population(), 0);
        assert_eq!(e.generation(), Generation(0));
        assert_eq!(e.epoch(), BufferEpoch(2));
        assert_eq!(e.cells().epoch(), BufferEpoch(2));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = EngineConfig {
            max_cells: 0,
            ..EngineConfig::default()
        };
        assert_eq!(LifeEngine::new(config).unwrap_err(), ConfigError::ZeroCellLimit);
    }

    // ── before init ─────────────────────────────────────────────

    #[test]
    fn uninitialised_engine_is_inert() {
        let mut e = LifeEngine::default();
        assert_eq!(e.len(), 0);
        assert_eq!(e.get_cell(0, 0), Cell::Dead);
        assert!(e.set_cell(0, 0, Cell::Alive).is_err());
        assert!(e.toggle_cell(0, 0).is_err());
        assert_eq!(e.step(), StepMetrics::default());
        assert_eq!(e.generation(), Generation(0));
        e.clear();
        assert_eq!(e.randomize(3, 0.5), 0);
    }

    // ── cell access ─────────────────────────────────────────────

    #[test]
    fn set_and_get_round_trip() {
        let mut e = engine(3, 3);
        e.set_cell(2, 1, Cell::Alive).unwrap();
        assert_eq!(e.get_cell(2, 1), Cell::Alive);
        assert_eq!(e.cells().as_slice()[5], 1);
        e.set_cell(2, 1, Cell::Dead).unwrap();
        assert_eq!(e.get_cell(2, 1), Cell::Dead);
    }

    #[test]
    fn out_of_range_reads_dead_and_writes_fail() {
        let mut e = engine(3, 3);
        e.randomize(5, 1.0);
        assert_eq!(e.get_cell(3, 0), Cell::Dead);
        assert_eq!(e.get_cell(-1, -1), Cell::Dead);
        assert_eq!(
            e.set_cell(0, 3, Cell::Alive),
            Err(CellError::OutOfBounds {
                x: 0,
                y: 3,
                width: 3,
                height: 3
            })
        );
        assert!(e.try_get_cell(9, 9).is_err());
        assert_eq!(e.population(), 9);
    }

    #[test]
    fn toggle_returns_new_state() {
        let mut e = engine(2, 2);
        assert_eq!(e.toggle_cell(1, 1), Ok(Cell::Alive));
        assert_eq!(e.toggle_cell(1, 1), Ok(Cell::Dead));
    }

    #[test]
    fn host_written_bytes_normalise() {
        let mut e = engine(3, 1);
        e.cells_mut()[0] = 0xFF;
        assert_eq!(e.get_cell(0, 0), Cell::Alive);
        assert_eq!(e.toggle_cell(0, 0), Ok(Cell::Dead));
        assert_eq!(e.cells().as_slice()[0], 0);
    }

    #[test]
    fn live_neighbours_query() {
        let mut e = engine(3, 3);
        e.set_cell(0, 0, Cell::Alive).unwrap();
        e.set_cell(2, 2, Cell::Alive).unwrap();
        assert_eq!(e.live_neighbours(1, 1), Some(2));
        assert_eq!(e.live_neighbours(3, 1), None);
    }

    // ── clear / randomize ───────────────────────────────────────

    #[test]
    fn clear_kills_everything_and_resets_generation() {
        let mut e = engine(5, 5);
        e.randomize(9, 0.5);
        e.step();
        e.clear();
        assert_eq!(e.population(), 0);
        assert_eq!(e.generation(), Generation(0));
        assert_eq!((e.width(), e.height()), (5, 5));
    }

    #[test]
    fn randomize_clamps_density() {
        let mut e = engine(6, 6);
        assert_eq!(e.randomize(1, 7.5), 36);
        assert_eq!(e.randomize(1, -2.0), 0);
        assert_eq!(e.randomize(1, f64::NAN), 0);
    }

    #[test]
    fn randomize_records_population_metric() {
        let mut e = engine(6, 6);
        let pop = e.randomize(11, 0.4);
        assert_eq!(e.last_metrics().population, pop as u64);
    }

    // ── step ────────────────────────────────────────────────────

    #[test]
    fn step_increments_generation_in_place() {
        let mut e = engine(4, 4);
        let base = e.cells().as_ptr();
        e.step();
        assert_eq!(e.generation(), Generation(1));
        assert_eq!(e.cells().as_ptr(), base);
        e.randomize(2, 0.5);
        e.step();
        e.clear();
        assert_eq!(e.cells().as_ptr(), base);
    }

    #[test]
    fn failed_init_keeps_buffer_address() {
        let mut e = engine(4, 4);
        let base = e.cells().as_ptr();
        assert!(e.init(-1, 4).is_err());
        assert_eq!(e.cells().as_ptr(), base);
    }

    #[test]
    fn step_n_runs_n_generations() {
        let mut e = engine(4, 4);
        e.step_n(5);
        assert_eq!(e.generation(), Generation(5));
    }

    #[test]
    fn set_rule_takes_effect_on_next_step() {
        // B1/S: a lone cell seeds all 8 of its neighbours.
        let mut e = engine(5, 5);
        e.set_rule(LifeRule::from_masks(1 << 1, 0));
        e.set_cell(2, 2, Cell::Alive).unwrap();
        let m = e.step();
        assert_eq!(m.births, 8);
        assert_eq!(m.deaths, 1);
        assert_eq!(e.population(), 8);
    }

    #[test]
    fn debug_names_rule() {
        let e = engine(2, 2);
        let s = format!("{e:?}");
        assert!(s.contains("B3/S23"));
        assert!(s.contains("epoch"));
    }
}
