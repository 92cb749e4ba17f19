//! `repr(C)` structs and enums passed across the C ABI.

use cgol_core::BufferEpoch;
use cgol_engine::{EngineConfig, LifeRule, StepMetrics};
use cgol_space::EdgeBehavior;

use crate::status::CgolStatus;

/// Edge behaviour codes accepted in [`CgolEngineConfig::edge`].
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CgolEdgeBehavior {
    /// Cells beyond the grid edge are permanently dead.
    Absorb = 0,
    /// Toroidal: coordinates wrap modulo the grid dimensions.
    Wrap = 1,
}

/// Engine configuration for `cgol_engine_create`.
///
/// Fill with `cgol_engine_config_default` and override fields as needed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CgolEngineConfig {
    /// A [`CgolEdgeBehavior`] code.
    pub edge: i32,
    /// Birth mask: bit `n` set means a dead cell with `n` neighbours is born.
    pub birth_mask: u32,
    /// Survival mask: bit `n` set means a live cell with `n` neighbours survives.
    pub survive_mask: u32,
    /// Largest `width * height` that `cgol_init` accepts.
    pub max_cells: u64,
}

impl Default for CgolEngineConfig {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            edge: config.edge.code(),
            birth_mask: u32::from(config.rule.birth_mask()),
            survive_mask: u32::from(config.rule.survive_mask()),
            max_cells: config.max_cells as u64,
        }
    }
}

impl CgolEngineConfig {
    /// Convert to an [`EngineConfig`], rejecting unknown edge codes,
    /// masks with bits above 8, and a cell ceiling that does not fit `usize`.
    pub(crate) fn to_rust(self) -> Result<EngineConfig, CgolStatus> {
        let edge = EdgeBehavior::from_code(self.edge).ok_or(CgolStatus::InvalidArgument)?;
        let rule = rule_from_masks(self.birth_mask, self.survive_mask)?;
        let max_cells = usize::try_from(self.max_cells).map_err(|_| CgolStatus::InvalidArgument)?;
        Ok(EngineConfig {
            edge,
            rule,
            max_cells,
        })
    }
}

/// Parse C-side masks, which must only use bits 0..=8.
pub(crate) fn rule_from_masks(birth: u32, survive: u32) -> Result<LifeRule, CgolStatus> {
    let birth = u16::try_from(birth).map_err(|_| CgolStatus::InvalidArgument)?;
    let survive = u16::try_from(survive).map_err(|_| CgolStatus::InvalidArgument)?;
    if (birth | survive) & !0x01FF != 0 {
        return Err(CgolStatus::InvalidArgument);
    }
    Ok(LifeRule::from_masks(birth, survive))
}

/// Raw descriptor of the cell buffer.
///
/// `ptr` is valid for `len` bytes, for reads and writes, until the next
/// successful `cgol_init` or `cgol_engine_destroy` on the same handle.
/// Steps, clears and randomizes rewrite the bytes in place, so a cached
/// descriptor always shows the current generation. Compare `epoch` to
/// detect a re-initialised grid.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CgolBuffer {
    /// Base of the row-major cell bytes; null when the grid is empty.
    pub ptr: *mut u8,
    /// Number of cells, `width * height`.
    pub len: usize,
    /// Grid width.
    pub width: u32,
    /// Grid height.
    pub height: u32,
    /// Number of successful `cgol_init` calls on this engine.
    pub epoch: u64,
}

impl CgolBuffer {
    pub(crate) fn new(cells: &mut [u8], width: u32, height: u32, epoch: BufferEpoch) -> Self {
        let ptr = if cells.is_empty() {
            std::ptr::null_mut()
        } else {
            cells.as_mut_ptr()
        };
        Self {
            ptr,
            len: cells.len(),
            width,
            height,
            epoch: epoch.0,
        }
    }
}

/// Counters from the most recent step.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CgolStepMetrics {
    /// Dead cells that became alive.
    pub births: u64,
    /// Live cells that died.
    pub deaths: u64,
    /// Live cells after the step.
    pub population: u64,
}

impl From<&StepMetrics> for CgolStepMetrics {
    fn from(m: &StepMetrics) -> Self {
        Self {
            births: m.births,
            deaths: m.deaths,
            population: m.population,
        }
    }
}
