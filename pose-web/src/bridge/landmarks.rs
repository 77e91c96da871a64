//! Landmark ingestion from JavaScript
//!
//! MediaPipe Holistic hands each result set over as a flat Float32Array of
//! `x, y, z` triples (face: 468 or 478 points, each hand: 21 points), or
//! `undefined` when that part was not detected.

use wasm_bindgen::prelude::*;
use crate::error::LandmarkError;
use crate::landmarks::{FaceLandmarks, Frame, HandLandmarks};

impl From<LandmarkError> for JsValue {
    fn from(err: LandmarkError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Build a frame from the optional flat buffers
pub(crate) fn frame_from_flat(
    face: Option<&[f32]>,
    left_hand: Option<&[f32]>,
    right_hand: Option<&[f32]>,
) -> Result<Frame, LandmarkError> {
    Ok(Frame {
        face: face.map(FaceLandmarks::from_flat).transpose()?,
        left_hand: left_hand.map(HandLandmarks::from_flat).transpose()?,
        right_hand: right_hand.map(HandLandmarks::from_flat).transpose()?,
    })
}

/// Parse a frame, warning on the console when the detector output is malformed
pub(crate) fn parse_frame(
    face: Option<&[f32]>,
    left_hand: Option<&[f32]>,
    right_hand: Option<&[f32]>,
) -> Result<Frame, JsValue> {
    frame_from_flat(face, left_hand, right_hand).map_err(|err| {
        web_sys::console::warn_1(&format!("Invalid landmark data: {}", err).into());
        JsValue::from(err)
    })
}
