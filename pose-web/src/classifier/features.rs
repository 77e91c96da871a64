//! Feature extraction for pose classification
//!
//! Pure geometry over one frame's landmarks. Mouth and eye measurements are
//! normalized by face height so they hold up as the subject moves closer
//! to or further from the camera.

use crate::landmarks::{face, hand, FaceLandmarks, HandLandmarks, Landmark};
use super::thresholds::Thresholds;

/// Forehead-to-chin distance, the normalization base for face features
pub fn face_height(face: &FaceLandmarks) -> f32 {
    face[face::FOREHEAD_TOP].distance(&face[face::CHIN_TIP])
}

fn mouth_width(face: &FaceLandmarks) -> f32 {
    face[face::MOUTH_LEFT_CORNER].distance(&face[face::MOUTH_RIGHT_CORNER])
}

fn mouth_height(face: &FaceLandmarks) -> f32 {
    face[face::UPPER_LIP_CENTER].distance(&face[face::LOWER_LIP_CENTER])
}

/// Mouth width over inner-lip gap. A closed mouth gives `+inf`.
pub fn mouth_width_height_ratio(face: &FaceLandmarks) -> f32 {
    mouth_width(face) / mouth_height(face)
}

/// Inner-lip gap as a fraction of face height
pub fn mouth_open_ratio(face: &FaceLandmarks) -> f32 {
    mouth_height(face) / face_height(face)
}

/// Wide, nearly closed mouth
pub fn is_smiling(face: &FaceLandmarks, t: &Thresholds) -> bool {
    mouth_width_height_ratio(face) > t.smile_ratio
}

/// Wide and visibly open mouth
pub fn is_open_mouth_smile(face: &FaceLandmarks, t: &Thresholds) -> bool {
    mouth_width_height_ratio(face) > t.open_smile_ratio
        && mouth_open_ratio(face) > t.open_smile_height
}

/// Gaping mouth, smile or not
pub fn is_mouth_open(face: &FaceLandmarks, t: &Thresholds) -> bool {
    mouth_open_ratio(face) > t.mouth_open_height
}

/// One eye markedly more closed than the other.
///
/// Both eyes nearly shut (blink, looking down) is rejected by the minimum
/// mean openness.
pub fn is_winking(face: &FaceLandmarks, t: &Thresholds) -> bool {
    let right_gap = face[face::RIGHT_EYE_TOP].distance(&face[face::RIGHT_EYE_BOTTOM]);
    let left_gap = face[face::LEFT_EYE_TOP].distance(&face[face::LEFT_EYE_BOTTOM]);
    let epsilon = face_height(face) * t.wink_epsilon_scale + t.wink_epsilon_floor;

    let diff = (right_gap - left_gap).abs();
    let avg = (right_gap + left_gap) / 2.0;

    diff / (avg + epsilon) > t.wink_asymmetry && avg > t.wink_min_openness
}

/// Index tip or thumb tip resting on the lips
pub fn is_touching_lip(
    hand: &HandLandmarks,
    lip_center: &Landmark,
    face_height: f32,
    t: &Thresholds,
) -> bool {
    let index = hand[hand::INDEX_TIP].distance(lip_center);
    let thumb = hand[hand::THUMB_TIP].distance(lip_center);
    index.min(thumb) < face_height * t.lip_touch
}

/// Index finger extended upward, middle/ring/pinky curled.
///
/// Image y grows downward, so "above" means smaller y.
pub fn is_pointer_up(hand: &HandLandmarks, face_height: f32, t: &Thresholds) -> bool {
    let tip = hand[hand::INDEX_TIP];
    let index_extended = tip.y < hand[hand::INDEX_PIP].y && tip.y < hand[hand::INDEX_MCP].y;
    let others_curled = hand::CURLED_FINGERS
        .iter()
        .all(|&(tip_idx, pip_idx)| hand[tip_idx].y > hand[pip_idx].y);
    let raised = tip.y < hand[hand::WRIST].y - face_height * t.pointer_lift;

    index_extended && others_curled && raised
}

/// Wrist within reach of the nose
pub fn is_hand_near_face(
    hand: &HandLandmarks,
    nose_tip: &Landmark,
    face_height: f32,
    t: &Thresholds,
) -> bool {
    hand[hand::WRIST].distance(nose_tip) < face_height * t.near_face
}

/// Everything the rules need from the face, computed once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceFeatures {
    pub face_height: f32,
    pub lip_center: Landmark,
    pub nose_tip: Landmark,
    pub mouth_ratio: f32,
    pub mouth_open_ratio: f32,
    pub smiling: bool,
    pub open_mouth_smile: bool,
    pub mouth_open: bool,
    pub winking: bool,
}

impl FaceFeatures {
    pub fn extract(face: &FaceLandmarks, t: &Thresholds) -> Self {
        let lip_center = face[face::UPPER_LIP_CENTER].midpoint(&face[face::LOWER_LIP_CENTER]);
        Self {
            face_height: face_height(face),
            lip_center,
            nose_tip: face[face::NOSE_TIP],
            mouth_ratio: mouth_width_height_ratio(face),
            mouth_open_ratio: mouth_open_ratio(face),
            smiling: is_smiling(face, t),
            open_mouth_smile: is_open_mouth_smile(face, t),
            mouth_open: is_mouth_open(face, t),
            winking: is_winking(face, t),
        }
    }
}
