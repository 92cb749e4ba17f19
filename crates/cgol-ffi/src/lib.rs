//! C ABI and wasm bindings for the CGOL Game of Life engine.
//!
//! Two surfaces share one handle table of engines:
//!
//! - the handle-based `cgol_*` C functions in [`engine`], which create
//!   any number of independent engines and report every failure as a
//!   [`CgolStatus`]
//! - the camelCase wasm contract in [`wasm`] (`init`, `getCellsPtr`,
//!   `step`, ...), which drives a single default engine created on
//!   first use
//!
//! This is the only crate in the workspace that may contain `unsafe`
//! code, and only for writing through caller-supplied out-pointers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into `CgolStatus::Panicked`.
///
/// The body is a closure body: `return` exits the FFI call with a status.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(status) => status,
            Err(_) => {
                log::warn!("panic caught at FFI boundary");
                $crate::status::CgolStatus::Panicked as i32
            }
        }
    };
}

/// Like `ffi_guard!` for functions that return a plain value, with
/// `$default` returned after a panic.
macro_rules! ffi_guard_or {
    ($default:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("panic caught at FFI boundary");
                $default
            }
        }
    };
}

/// Lock a mutex inside `ffi_guard!`, returning `InternalError` if it
/// was poisoned by an earlier panic.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::CgolStatus::InternalError as i32,
        }
    };
}

pub mod engine;
mod handle;
pub mod status;
pub mod types;
pub mod wasm;

pub use status::CgolStatus;
pub use types::{CgolBuffer, CgolEdgeBehavior, CgolEngineConfig, CgolStepMetrics};
