//! Bridge module - JS ↔ Rust communication
//! 
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod callbacks;
mod catalog;
mod landmarks;
mod session_integration;

pub use session_integration::{
    // WASM entry points
    process_frame,
    acknowledge_popup_dismissed,
    reset_session,
    // Queries
    calibration_state,
    calibration_progress,
    calibration_message,
    calibration_steps,
    is_calibrated,
    hold_state,
};

pub use callbacks::{
    set_calibration_progress_callback,
    set_calibration_complete_callback,
    set_calibration_hidden_callback,
    set_pose_hint_callback,
    set_status_callback,
    set_pose_confirmed_callback,
};

pub use catalog::{
    pose_keys,
    pose_title,
    pose_caption,
    pose_hint,
    pose_emoji,
    pose_hint_id,
};
