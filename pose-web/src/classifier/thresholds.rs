//! Fixed heuristic thresholds for the pose rules
//!
//! Face-relative values are multiples of face height (forehead to chin),
//! which keeps them roughly independent of distance to the camera.

/// All geometric cut-offs used by feature extraction and classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Mouth width / height above this = closed smile
    pub smile_ratio: f32,
    /// Mouth width / height above this (with an open mouth) = open smile
    pub open_smile_ratio: f32,
    /// Mouth height / face height above this counts as open for a smile
    pub open_smile_height: f32,
    /// Mouth height / face height above this = gaping mouth
    pub mouth_open_height: f32,
    /// Relative lid-gap difference between the eyes above this = wink
    pub wink_asymmetry: f32,
    /// Mean lid gap must exceed this (rejects both eyes closed)
    pub wink_min_openness: f32,
    /// Wink denominator guard: `face_height * scale + floor`
    pub wink_epsilon_scale: f32,
    pub wink_epsilon_floor: f32,
    /// Fingertip to lip centre, in face heights
    pub lip_touch: f32,
    /// Index tip must sit this many face heights above the wrist
    pub pointer_lift: f32,
    /// Wrist to nose tip, in face heights
    pub near_face: f32,
    /// Wrists must be this far below the nose tip (absolute)
    pub chest_drop: f32,
    /// Maximum wrist-to-wrist distance for hands together (absolute)
    pub hands_together: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            smile_ratio: 3.2,
            open_smile_ratio: 2.2,
            open_smile_height: 0.06,
            mouth_open_height: 0.07,
            wink_asymmetry: 0.45,
            wink_min_openness: 0.005,
            wink_epsilon_scale: 0.001,
            wink_epsilon_floor: 0.0001,
            lip_touch: 0.18,
            pointer_lift: 0.12,
            near_face: 1.4,
            chest_drop: 0.08,
            hands_together: 0.30,
        }
    }
}
