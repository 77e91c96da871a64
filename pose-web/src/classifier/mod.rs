//! Classifier module - geometric pose classification
//!
//! Feature extraction from face/hand landmarks and the ordered rule set
//! that turns them into a single pose label.

mod features;
mod model;
mod rules;
mod thresholds;

#[cfg(test)]
pub(crate) mod fixtures;

pub use features::{
    FaceFeatures,
    face_height,
    mouth_width_height_ratio,
    mouth_open_ratio,
    is_smiling,
    is_open_mouth_smile,
    is_mouth_open,
    is_winking,
    is_touching_lip,
    is_pointer_up,
    is_hand_near_face,
};
pub use model::{PoseLabel, PoseWarning, ClassificationResult, POSE_LABELS};
pub use rules::PoseClassifier;
pub use thresholds::Thresholds;
