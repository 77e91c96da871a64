//! Session integration - connects the pose session with the page
//!
//! Owns the one `PoseSession` for this page. Called from the Holistic
//! `onResults` handler once per processed video frame; results are never
//! processed concurrently, so a thread-local `RefCell` is all the
//! synchronisation needed.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::session::{CalibrationState, HoldState, PoseSession, SessionEvent};
use super::callbacks::dispatch;
use super::landmarks::parse_frame;

thread_local! {
    static SESSION: RefCell<PoseSession> = RefCell::new(PoseSession::new());
}

/// Run `f` against the session, then deliver the events it produced.
/// The borrow ends before any JS callback runs.
fn with_session(f: impl FnOnce(&mut PoseSession) -> Vec<SessionEvent>) {
    let events = SESSION.with(|cell| f(&mut cell.borrow_mut()));
    dispatch(events);
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Process one Holistic result. Each argument is a flat `x, y, z`
/// Float32Array, or `undefined` when that part was not detected.
///
/// Throws when a landmark set does not match the detector topology; the
/// frame is dropped and session state is untouched.
#[wasm_bindgen]
pub fn process_frame(
    face: Option<Vec<f32>>,
    left_hand: Option<Vec<f32>>,
    right_hand: Option<Vec<f32>>,
) -> Result<(), JsValue> {
    let frame = parse_frame(face.as_deref(), left_hand.as_deref(), right_hand.as_deref())?;
    let now = js_sys::Date::now();
    with_session(|session| session.on_frame(&frame, now));
    Ok(())
}

/// Capture popup was closed; detection resumes after the release delay
#[wasm_bindgen]
pub fn acknowledge_popup_dismissed() {
    let now = js_sys::Date::now();
    with_session(|session| session.acknowledge_popup_dismissed(now));
}

/// Start over: calibration and hold state are discarded
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|cell| cell.borrow_mut().reset());
}

// ============================================================================
// QUERIES
// ============================================================================

#[wasm_bindgen]
pub fn calibration_state() -> String {
    SESSION.with(|cell| cell.borrow().calibration_state().as_str().to_string())
}

#[wasm_bindgen]
pub fn calibration_progress() -> u8 {
    SESSION.with(|cell| cell.borrow().calibration_state().progress())
}

#[wasm_bindgen]
pub fn calibration_message() -> String {
    SESSION.with(|cell| cell.borrow().calibration_state().message().to_string())
}

/// CSS classes for the model / face / hands step indicators
#[wasm_bindgen]
pub fn calibration_steps() -> js_sys::Array {
    SESSION.with(|cell| {
        cell.borrow()
            .calibration_state()
            .steps()
            .iter()
            .map(|s| JsValue::from_str(s.as_str()))
            .collect()
    })
}

#[wasm_bindgen]
pub fn is_calibrated() -> bool {
    SESSION.with(|cell| cell.borrow().calibration_state() == CalibrationState::Ready)
}

/// "idle", "holding:<pose>" or "cooldown"
#[wasm_bindgen]
pub fn hold_state() -> String {
    SESSION.with(|cell| match cell.borrow().hold_state() {
        HoldState::Idle => "idle".to_string(),
        HoldState::Holding { pose, .. } => format!("holding:{}", pose.as_str()),
        HoldState::Cooldown { .. } => "cooldown".to_string(),
    })
}
