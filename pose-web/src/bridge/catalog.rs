//! Pose catalogue lookups for the hint pills and capture popup

use wasm_bindgen::prelude::*;
use crate::classifier::{PoseLabel, POSE_LABELS};

/// Pose keys in hint-pill order
#[wasm_bindgen]
pub fn pose_keys() -> js_sys::Array {
    POSE_LABELS.iter().map(|p| JsValue::from_str(p.as_str())).collect()
}

#[wasm_bindgen]
pub fn pose_title(key: &str) -> Option<String> {
    PoseLabel::from_key(key).map(|p| p.title().to_string())
}

#[wasm_bindgen]
pub fn pose_caption(key: &str) -> Option<String> {
    PoseLabel::from_key(key).map(|p| p.caption().to_string())
}

#[wasm_bindgen]
pub fn pose_hint(key: &str) -> Option<String> {
    PoseLabel::from_key(key).map(|p| p.hint().to_string())
}

#[wasm_bindgen]
pub fn pose_emoji(key: &str) -> Option<String> {
    PoseLabel::from_key(key).map(|p| p.emoji().to_string())
}

/// DOM id of the pose's hint pill
#[wasm_bindgen]
pub fn pose_hint_id(key: &str) -> Option<String> {
    PoseLabel::from_key(key).map(|p| p.hint_id().to_string())
}
