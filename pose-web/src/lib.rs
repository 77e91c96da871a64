//! Pose Web - hold-to-confirm pose detection for the "is this u?" booth
//! 
//! MediaPipe Holistic runs in JavaScript; this module turns its face and
//! hand landmarks into confirmed poses. Contains:
//! - `landmarks`: detector topology and per-frame landmark sets
//! - `classifier`: geometric features and the ordered pose rules
//! - `session`: calibration gating, hold-to-confirm, event stream
//! - wasm_bindgen entry points that delegate to the bridge

mod bridge;
pub mod classifier;
pub mod error;
pub mod landmarks;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;
pub use error::LandmarkError;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Start a fresh detection session - call once the camera is running
#[wasm_bindgen]
pub fn init() {
    bridge::reset_session();
    console_log!("✅ Pose detector ready ({} poses)", classifier::POSE_LABELS.len());
}
