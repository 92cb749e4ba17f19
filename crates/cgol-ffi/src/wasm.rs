//! The camelCase wasm contract.
//!
//! A JavaScript host drives one implicit engine through these exports:
//!
//! | export        | Rust function                       |
//! |---------------|-------------------------------------|
//! | `init`        | [`init`]                            |
//! | `getCellsPtr` | [`get_cells_ptr`]                   |
//! | `getCellsLen` | [`get_cells_len`]                   |
//! | `step`        | [`step`]                            |
//! | `clear`       | [`clear`]                           |
//! | `randomize`   | [`randomize`]                       |
//! | `getCell`     | [`get_cell`]                        |
//! | `setCell`     | [`set_cell`]                        |
//! | `toggleCell`  | [`toggle_cell`]                     |
//!
//! The export names are applied only when targeting `wasm32`; natively
//! the functions are ordinary Rust items, which keeps them testable.
//!
//! The default engine is created on first use and lives in the same
//! handle table as engines made with `cgol_engine_create`. Every export
//! is total: a missing engine, a poisoned lock or a caught panic
//! degrades to a no-op, `false`, null or 0.
//!
//! `getCellsPtr` and `getCellsLen` are fixed from one successful `init`
//! to the next: `step`, `clear` and `randomize` rewrite the same bytes.
//! Hosts re-query both after `init` only.

use std::sync::{Arc, Mutex};

use cgol_core::Cell;
use cgol_engine::LifeEngine;

use crate::engine::{get_engine, insert_engine};

/// Handle of the default engine, once created.
static DEFAULT_HANDLE: Mutex<Option<u64>> = Mutex::new(None);

fn default_engine() -> Option<Arc<Mutex<LifeEngine>>> {
    let mut slot = DEFAULT_HANDLE.lock().ok()?;
    if let Some(arc) = slot.and_then(get_engine) {
        return Some(arc);
    }
    let handle = insert_engine(LifeEngine::default())?;
    *slot = Some(handle);
    get_engine(handle)
}

/// Run `f` on the locked default engine, or return `default`.
fn with_engine<T>(default: T, f: impl FnOnce(&mut LifeEngine) -> T) -> T {
    match default_engine() {
        Some(arc) => match arc.lock() {
            Ok(mut engine) => f(&mut engine),
            Err(_) => default,
        },
        None => default,
    }
}

/// (Re)initialise the grid; `false` leaves the previous grid in place.
#[cfg_attr(target_arch = "wasm32", export_name = "init")]
#[allow(unsafe_code)]
pub extern "C" fn init(width: i32, height: i32) -> bool {
    ffi_guard_or!(false, { with_engine(false, |e| e.init(width, height).is_ok()) })
}

/// Base of the current generation's bytes; null before the first `init`.
#[cfg_attr(target_arch = "wasm32", export_name = "getCellsPtr")]
#[allow(unsafe_code)]
pub extern "C" fn get_cells_ptr() -> *mut u8 {
    ffi_guard_or!(std::ptr::null_mut(), {
        with_engine(std::ptr::null_mut(), |e| {
            let cells = e.cells_mut();
            if cells.is_empty() {
                std::ptr::null_mut()
            } else {
                cells.as_mut_ptr()
            }
        })
    })
}

/// Number of cells, `width * height`.
#[cfg_attr(target_arch = "wasm32", export_name = "getCellsLen")]
#[allow(unsafe_code)]
pub extern "C" fn get_cells_len() -> usize {
    ffi_guard_or!(0, { with_engine(0, |e| e.len()) })
}

/// Advance one generation.
#[cfg_attr(target_arch = "wasm32", export_name = "step")]
#[allow(unsafe_code)]
pub extern "C" fn step() {
    ffi_guard_or!((), {
        with_engine((), |e| {
            e.step();
        })
    })
}

/// Kill every cell.
#[cfg_attr(target_arch = "wasm32", export_name = "clear")]
#[allow(unsafe_code)]
pub extern "C" fn clear() {
    ffi_guard_or!((), { with_engine((), LifeEngine::clear) })
}

/// Repopulate every cell from `seed` at the given `density`.
#[cfg_attr(target_arch = "wasm32", export_name = "randomize")]
#[allow(unsafe_code)]
pub extern "C" fn randomize(seed: u64, density: f64) {
    ffi_guard_or!((), {
        with_engine((), |e| {
            e.randomize(seed, density);
        })
    })
}

/// 1 if `(x, y)` is alive, otherwise 0 (including out of range).
#[cfg_attr(target_arch = "wasm32", export_name = "getCell")]
#[allow(unsafe_code)]
pub extern "C" fn get_cell(x: i32, y: i32) -> i32 {
    ffi_guard_or!(0, { with_engine(0, |e| i32::from(e.get_cell(x, y).as_byte())) })
}

/// Set `(x, y)`; nonzero `alive` means alive. Out of range is ignored.
#[cfg_attr(target_arch = "wasm32", export_name = "setCell")]
#[allow(unsafe_code)]
pub extern "C" fn set_cell(x: i32, y: i32, alive: i32) {
    ffi_guard_or!((), {
        with_engine((), |e| {
            let _ = e.set_cell(x, y, Cell::from(alive != 0));
        })
    })
}

/// Flip `(x, y)`. Out of range is ignored.
#[cfg_attr(target_arch = "wasm32", export_name = "toggleCell")]
#[allow(unsafe_code)]
pub extern "C" fn toggle_cell(x: i32, y: i32) {
    ffi_guard_or!((), {
        with_engine((), |e| {
            let _ = e.toggle_cell(x, y);
        })
    })
}
