//! Engine lifecycle and operations over the C ABI.
//!
//! Engines live in a global [`HandleTable`], each behind its own
//! `Arc<Mutex<LifeEngine>>`. The table lock is held only for handle
//! lookup, so separate engines never contend with each other.

use std::sync::{Arc, Mutex};

use cgol_core::Cell;
use cgol_engine::{EngineConfig, LifeEngine};

use crate::handle::HandleTable;
use crate::status::CgolStatus;
use crate::types::{rule_from_masks, CgolBuffer, CgolEngineConfig, CgolStepMetrics};

type EngineArc = Arc<Mutex<LifeEngine>>;

static ENGINES: Mutex<HandleTable<EngineArc>> = Mutex::new(HandleTable::new());

/// Clone the Arc behind a handle, briefly locking the table.
///
/// `None` if the handle is stale or the table lock is poisoned.
pub(crate) fn get_engine(handle: u64) -> Option<EngineArc> {
    ENGINES.lock().ok()?.get(handle).cloned()
}

/// Register an engine and return its handle.
pub(crate) fn insert_engine(engine: LifeEngine) -> Option<u64> {
    Some(ENGINES.lock().ok()?.insert(Arc::new(Mutex::new(engine))))
}

/// Write the default configuration into `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_engine_config_default(out: *mut CgolEngineConfig) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return CgolStatus::InvalidArgument as i32;
        }
        // SAFETY: out is valid per caller contract.
        unsafe { *out = CgolEngineConfig::default() };
        CgolStatus::Ok as i32
    })
}

/// Create an engine with an empty 0x0 grid.
///
/// `config` may be null for the defaults. On success the new handle is
/// written to `*engine_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_engine_create(
    config: *const CgolEngineConfig,
    engine_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if engine_out.is_null() {
            return CgolStatus::InvalidArgument as i32;
        }
        let config = if config.is_null() {
            EngineConfig::default()
        } else {
            // SAFETY: config points to a valid CgolEngineConfig per caller contract.
            match unsafe { *config }.to_rust() {
                Ok(c) => c,
                Err(status) => return status as i32,
            }
        };
        let engine = match LifeEngine::new(config) {
            Ok(e) => e,
            Err(e) => return CgolStatus::from(&e) as i32,
        };
        let handle = ffi_lock!(ENGINES).insert(Arc::new(Mutex::new(engine)));
        // SAFETY: engine_out is valid per caller contract.
        unsafe { *engine_out = handle };
        CgolStatus::Ok as i32
    })
}

/// Destroy an engine, releasing its buffers.
///
/// Every pointer obtained from `cgol_buffer_get` on this handle becomes
/// dangling. Destroying twice returns `InvalidHandle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_engine_destroy(engine: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(ENGINES).remove(engine) {
            Some(_) => CgolStatus::Ok as i32,
            None => CgolStatus::InvalidHandle as i32,
        }
    })
}

/// Allocate a fresh all-dead `width x height` grid.
///
/// On failure the previous grid is untouched.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_init(engine: u64, width: i32, height: i32) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        let mut e = ffi_lock!(arc);
        match e.init(width, height) {
            Ok(()) => CgolStatus::Ok as i32,
            Err(err) => CgolStatus::from(&err) as i32,
        }
    })
}

/// Describe the cell buffer.
///
/// The host may read and write through `out->ptr` (nonzero bytes count
/// as alive) until the next successful `cgol_init` or destroy on this
/// handle. Steps rewrite the same bytes, so the descriptor can be cached.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_buffer_get(engine: u64, out: *mut CgolBuffer) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return CgolStatus::InvalidArgument as i32;
        }
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        let mut e = ffi_lock!(arc);
        let (width, height, epoch) = (e.width(), e.height(), e.epoch());
        let buffer = CgolBuffer::new(e.cells_mut(), width, height, epoch);
        // SAFETY: out is valid per caller contract.
        unsafe { *out = buffer };
        CgolStatus::Ok as i32
    })
}

/// Copy the current cells into a caller-allocated buffer.
///
/// Returns `BufferTooSmall` if `buf_len` is less than `width * height`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_cells_read(engine: u64, buf: *mut u8, buf_len: usize) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        let e = ffi_lock!(arc);
        let view = e.cells();
        if view.is_empty() {
            return CgolStatus::Ok as i32;
        }
        if buf.is_null() {
            return CgolStatus::InvalidArgument as i32;
        }
        if buf_len < view.len() {
            return CgolStatus::BufferTooSmall as i32;
        }
        // SAFETY: buf points to buf_len writable bytes, and buf_len >= view.len().
        unsafe {
            std::ptr::copy_nonoverlapping(view.as_ptr(), buf, view.len());
        }
        CgolStatus::Ok as i32
    })
}

/// Advance one generation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_step(engine: u64) -> i32 {
    cgol_step_n(engine, 1)
}

/// Advance `n` generations.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_step_n(engine: u64, n: u32) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        ffi_lock!(arc).step_n(n);
        CgolStatus::Ok as i32
    })
}

/// Kill every cell and reset the generation counter.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_clear(engine: u64) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        ffi_lock!(arc).clear();
        CgolStatus::Ok as i32
    })
}

/// Repopulate every cell from `seed`; `density` is clamped to `[0, 1]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_randomize(engine: u64, seed: u64, density: f64) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        ffi_lock!(arc).randomize(seed, density);
        CgolStatus::Ok as i32
    })
}

/// Read one cell into `*out` (0 or 1).
///
/// Unlike the wasm `getCell`, out-of-range coordinates are an error:
/// returns `OutOfBounds` without writing to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_get_cell(engine: u64, x: i32, y: i32, out: *mut u8) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return CgolStatus::InvalidArgument as i32;
        }
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        let e = ffi_lock!(arc);
        match e.try_get_cell(x, y) {
            Ok(cell) => {
                // SAFETY: out is valid per caller contract.
                unsafe { *out = cell.as_byte() };
                CgolStatus::Ok as i32
            }
            Err(err) => CgolStatus::from(&err) as i32,
        }
    })
}

/// Set one cell; any nonzero `alive` means alive.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_set_cell(engine: u64, x: i32, y: i32, alive: i32) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        let mut e = ffi_lock!(arc);
        match e.set_cell(x, y, Cell::from(alive != 0)) {
            Ok(()) => CgolStatus::Ok as i32,
            Err(err) => CgolStatus::from(&err) as i32,
        }
    })
}

/// Flip one cell.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_toggle_cell(engine: u64, x: i32, y: i32) -> i32 {
    ffi_guard!({
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        let mut e = ffi_lock!(arc);
        match e.toggle_cell(x, y) {
            Ok(_) => CgolStatus::Ok as i32,
            Err(err) => CgolStatus::from(&err) as i32,
        }
    })
}

/// Replace the transition rule. Only bits 0..=8 of each mask may be set.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_set_rule(engine: u64, birth_mask: u32, survive_mask: u32) -> i32 {
    ffi_guard!({
        let rule = match rule_from_masks(birth_mask, survive_mask) {
            Ok(r) => r,
            Err(status) => return status as i32,
        };
        let arc = match get_engine(engine) {
            Some(a) => a,
            None => return CgolStatus::InvalidHandle as i32,
        };
        ffi_lock!(arc).set_rule(rule);
        CgolStatus::Ok as i32
    })
}

/// Run `read` against a locked engine and write its result to `*out`.
#[allow(unsafe_code)]
fn query<T>(engine: u64, out: *mut T, read: impl FnOnce(&LifeEngine) -> T) -> i32 {
    if out.is_null() {
        return CgolStatus::InvalidArgument as i32;
    }
    let arc = match get_engine(engine) {
        Some(a) => a,
        None => return CgolStatus::InvalidHandle as i32,
    };
    let e = ffi_lock!(arc);
    let value = read(&e);
    // SAFETY: out is valid per caller contract.
    unsafe { *out = value };
    CgolStatus::Ok as i32
}

/// Steps since the last init, clear or randomize.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_generation_get(engine: u64, out: *mut u64) -> i32 {
    ffi_guard!({ query(engine, out, |e| e.generation().0) })
}

/// Number of live cells.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_population_get(engine: u64, out: *mut u64) -> i32 {
    ffi_guard!({ query(engine, out, |e| e.population() as u64) })
}

/// FNV-1a hash of the grid's dimensions and cells.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_fingerprint_get(engine: u64, out: *mut u64) -> i32 {
    ffi_guard!({ query(engine, out, |e| e.fingerprint()) })
}

/// Births, deaths and population of the most recent step.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn cgol_step_metrics_get(engine: u64, out: *mut CgolStepMetrics) -> i32 {
    ffi_guard!({ query(engine, out, |e| CgolStepMetrics::from(e.last_metrics())) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> u64 {
        let mut h = 0u64;
        assert_eq!(
            cgol_engine_create(std::ptr::null(), &mut h),
            CgolStatus::Ok as i32
        );
        h
    }

    #[test]
    fn create_init_destroy() {
        let h = create();
        assert_eq!(cgol_init(h, 4, 3), CgolStatus::Ok as i32);
        let mut buf = CgolBuffer::new(&mut [], 0, 0, cgol_core::BufferEpoch(0));
        assert_eq!(cgol_buffer_get(h, &mut buf), CgolStatus::Ok as i32);
        assert_eq!((buf.len, buf.width, buf.height, buf.epoch), (12, 4, 3, 1));
        assert!(!buf.ptr.is_null());
        assert_eq!(cgol_engine_destroy(h), CgolStatus::Ok as i32);
        assert_eq!(cgol_engine_destroy(h), CgolStatus::InvalidHandle as i32);
        assert_eq!(cgol_step(h), CgolStatus::InvalidHandle as i32);
    }

    #[test]
    fn null_out_pointers_rejected() {
        assert_eq!(
            cgol_engine_create(std::ptr::null(), std::ptr::null_mut()),
            CgolStatus::InvalidArgument as i32
        );
        let h = create();
        assert_eq!(
            cgol_generation_get(h, std::ptr::null_mut()),
            CgolStatus::InvalidArgument as i32
        );
        assert_eq!(
            cgol_get_cell(h, 0, 0, std::ptr::null_mut()),
            CgolStatus::InvalidArgument as i32
        );
        cgol_engine_destroy(h);
    }

    #[test]
    fn engines_are_independent() {
        let a = create();
        let b = create();
        cgol_init(a, 3, 3);
        cgol_init(b, 3, 3);
        cgol_set_cell(a, 1, 1, 1);
        let mut pop = u64::MAX;
        cgol_population_get(b, &mut pop);
        assert_eq!(pop, 0);
        cgol_population_get(a, &mut pop);
        assert_eq!(pop, 1);
        cgol_engine_destroy(a);
        cgol_engine_destroy(b);
    }

    #[test]
    fn helper_registration_resolves() {
        let h = insert_engine(LifeEngine::default()).unwrap();
        assert!(get_engine(h).is_some());
        cgol_engine_destroy(h);
        assert!(get_engine(h).is_none());
    }
}
