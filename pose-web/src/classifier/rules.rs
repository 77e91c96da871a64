//! Rule-based pose classification
//!
//! Rules run in strict priority order and the first match wins, so two
//! poses can never be reported for the same frame. Configurations that
//! match a rule more than once (two hands on the lip, two pointers) are
//! rejected outright rather than guessed at.

use crate::landmarks::{hand, Frame, HandLandmarks};
use super::features::{is_hand_near_face, is_pointer_up, is_touching_lip, FaceFeatures};
use super::model::{ClassificationResult, PoseLabel};
use super::thresholds::Thresholds;

pub const WARN_OPEN_SMILE: &str = "Open-mouth smile for this one! \u{1F604}";
pub const WARN_OPEN_OR_SMILE: &str = "Open your mouth OR smile! \u{1F60A}";

/// Stateless classifier over a single frame
#[derive(Clone, Debug, Default)]
pub struct PoseClassifier {
    thresholds: Thresholds,
}

impl PoseClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify one frame. Pure: the same frame always gives the same result.
    pub fn classify(&self, frame: &Frame) -> ClassificationResult {
        let face = match &frame.face {
            Some(face) => face,
            None => return ClassificationResult::none(),
        };
        let t = &self.thresholds;
        let features = FaceFeatures::extract(face, t);
        let hands: Vec<&HandLandmarks> = frame.hands().collect();

        // THINKING / WINK: exactly one hand on the lip
        let lip_hands = hands
            .iter()
            .filter(|h| is_touching_lip(h, &features.lip_center, features.face_height, t))
            .count();
        match lip_hands {
            0 => {}
            1 if features.winking => return ClassificationResult::pose(PoseLabel::Wink),
            1 => return ClassificationResult::pose(PoseLabel::Thinking),
            _ => return ClassificationResult::none(),
        }

        // IDEA: exactly one pointer finger up beside the face
        let pointer_hands = hands
            .iter()
            .filter(|h| {
                is_pointer_up(h, features.face_height, t)
                    && is_hand_near_face(h, &features.nose_tip, features.face_height, t)
            })
            .count();
        match pointer_hands {
            0 => {}
            1 if features.open_mouth_smile => return ClassificationResult::pose(PoseLabel::Idea),
            1 => return ClassificationResult::warn(WARN_OPEN_SMILE, PoseLabel::Idea),
            _ => return ClassificationResult::none(),
        }

        // SURPRISED / HEARTTOUCH: both hands together at the chest
        if let (Some(right), Some(left)) = (&frame.right_hand, &frame.left_hand) {
            if self.hands_at_chest(right, left, &features) {
                return match (features.mouth_open, features.smiling) {
                    (true, false) => ClassificationResult::pose(PoseLabel::Surprised),
                    (false, true) => ClassificationResult::pose(PoseLabel::HeartTouch),
                    (false, false) => {
                        ClassificationResult::warn(WARN_OPEN_OR_SMILE, PoseLabel::Surprised)
                    }
                    (true, true) => ClassificationResult::none(),
                };
            }
        }

        ClassificationResult::none()
    }

    fn hands_at_chest(
        &self,
        right: &HandLandmarks,
        left: &HandLandmarks,
        features: &FaceFeatures,
    ) -> bool {
        let right_wrist = right[hand::WRIST];
        let left_wrist = left[hand::WRIST];
        let chest_line = features.nose_tip.y + self.thresholds.chest_drop;

        right_wrist.distance(&left_wrist) < self.thresholds.hands_together
            && right_wrist.y > chest_line
            && left_wrist.y > chest_line
    }
}
