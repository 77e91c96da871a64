//! JS callbacks for session events
//!
//! The page registers one function per event kind; unregistered events are
//! dropped. A callback that throws is logged and does not stop the others.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::classifier::PoseLabel;
use crate::session::SessionEvent;

#[derive(Clone, Default)]
struct Callbacks {
    calibration_progress: Option<js_sys::Function>,
    calibration_complete: Option<js_sys::Function>,
    calibration_hidden: Option<js_sys::Function>,
    pose_hint: Option<js_sys::Function>,
    status: Option<js_sys::Function>,
    pose_confirmed: Option<js_sys::Function>,
}

thread_local! {
    static CALLBACKS: RefCell<Callbacks> = RefCell::new(Callbacks::default());
}

// ============================================================================
// REGISTRATION
// ============================================================================

/// `(state, percentage, message)`
#[wasm_bindgen]
pub fn set_calibration_progress_callback(f: js_sys::Function) {
    CALLBACKS.with(|c| c.borrow_mut().calibration_progress = Some(f));
}

/// `()`
#[wasm_bindgen]
pub fn set_calibration_complete_callback(f: js_sys::Function) {
    CALLBACKS.with(|c| c.borrow_mut().calibration_complete = Some(f));
}

/// `()` - time to hide the calibration screen
#[wasm_bindgen]
pub fn set_calibration_hidden_callback(f: js_sys::Function) {
    CALLBACKS.with(|c| c.borrow_mut().calibration_hidden = Some(f));
}

/// `(activePose | null, warnPose | null)`
#[wasm_bindgen]
pub fn set_pose_hint_callback(f: js_sys::Function) {
    CALLBACKS.with(|c| c.borrow_mut().pose_hint = Some(f));
}

/// `(message, kind)`
#[wasm_bindgen]
pub fn set_status_callback(f: js_sys::Function) {
    CALLBACKS.with(|c| c.borrow_mut().status = Some(f));
}

/// `(poseKey)` - take the snapshot
#[wasm_bindgen]
pub fn set_pose_confirmed_callback(f: js_sys::Function) {
    CALLBACKS.with(|c| c.borrow_mut().pose_confirmed = Some(f));
}

// ============================================================================
// DISPATCH
// ============================================================================

fn pose_value(pose: Option<PoseLabel>) -> JsValue {
    pose.map_or(JsValue::NULL, |p| JsValue::from_str(p.as_str()))
}

fn report(name: &str, result: Result<JsValue, JsValue>) {
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("{} callback failed: {:?}", name, err).into());
    }
}

/// Deliver events in order. Must be called with no session borrow held,
/// since callbacks are free to call back into the bridge.
pub(crate) fn dispatch(events: Vec<SessionEvent>) {
    if events.is_empty() {
        return;
    }
    // Clone the handles out so callbacks may re-register
    let callbacks = CALLBACKS.with(|c| c.borrow().clone());
    let this = JsValue::NULL;

    for event in events {
        match event {
            SessionEvent::CalibrationProgress { state, percentage, message } => {
                if let Some(f) = &callbacks.calibration_progress {
                    report("calibration_progress", f.call3(
                        &this,
                        &JsValue::from_str(state.as_str()),
                        &JsValue::from(percentage),
                        &JsValue::from_str(message),
                    ));
                }
            }
            SessionEvent::CalibrationComplete => {
                if let Some(f) = &callbacks.calibration_complete {
                    report("calibration_complete", f.call0(&this));
                }
            }
            SessionEvent::CalibrationHidden => {
                if let Some(f) = &callbacks.calibration_hidden {
                    report("calibration_hidden", f.call0(&this));
                }
            }
            SessionEvent::PoseHint { active, warn } => {
                if let Some(f) = &callbacks.pose_hint {
                    report("pose_hint", f.call2(&this, &pose_value(active), &pose_value(warn)));
                }
            }
            SessionEvent::Status { message, kind } => {
                if let Some(f) = &callbacks.status {
                    report("status", f.call2(
                        &this,
                        &JsValue::from_str(message),
                        &JsValue::from_str(kind.as_str()),
                    ));
                }
            }
            SessionEvent::PoseConfirmed(pose) => {
                if let Some(f) = &callbacks.pose_confirmed {
                    report("pose_confirmed", f.call1(&this, &JsValue::from_str(pose.as_str())));
                }
            }
        }
    }
}
