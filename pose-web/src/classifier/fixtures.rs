//! Synthetic landmark sets for unit tests
//!
//! Face: forehead (0.5, 0.2), chin (0.5, 0.6), nose tip (0.5, 0.4), mouth
//! centred on (0.5, 0.5). Default expression is neutral: not smiling, mouth
//! closed, eyes equally open.

use crate::landmarks::{face, hand, FaceLandmarks, HandLandmarks, Landmark};

pub const FACE_HEIGHT: f32 = 0.4;
const MOUTH_Y: f32 = 0.5;
const EYE_Y: f32 = 0.33;

pub struct FaceBuilder {
    mouth_width: f32,
    mouth_gap: f32,
    right_eye_gap: f32,
    left_eye_gap: f32,
}

impl FaceBuilder {
    pub fn new() -> Self {
        Self {
            mouth_width: 0.06,
            mouth_gap: 0.02,
            right_eye_gap: 0.02,
            left_eye_gap: 0.02,
        }
    }

    pub fn mouth(mut self, width: f32, gap: f32) -> Self {
        self.mouth_width = width;
        self.mouth_gap = gap;
        self
    }

    pub fn eyes(mut self, right_gap: f32, left_gap: f32) -> Self {
        self.right_eye_gap = right_gap;
        self.left_eye_gap = left_gap;
        self
    }

    pub fn build(self) -> FaceLandmarks {
        let mut points = vec![Landmark::xy(0.5, 0.45); 478];
        points[face::FOREHEAD_TOP] = Landmark::xy(0.5, 0.2);
        points[face::CHIN_TIP] = Landmark::xy(0.5, 0.2 + FACE_HEIGHT);
        points[face::NOSE_TIP] = Landmark::xy(0.5, 0.4);

        let half_w = self.mouth_width / 2.0;
        let half_g = self.mouth_gap / 2.0;
        points[face::MOUTH_LEFT_CORNER] = Landmark::xy(0.5 - half_w, MOUTH_Y);
        points[face::MOUTH_RIGHT_CORNER] = Landmark::xy(0.5 + half_w, MOUTH_Y);
        points[face::UPPER_LIP_CENTER] = Landmark::xy(0.5, MOUTH_Y - half_g);
        points[face::LOWER_LIP_CENTER] = Landmark::xy(0.5, MOUTH_Y + half_g);

        points[face::RIGHT_EYE_TOP] = Landmark::xy(0.42, EYE_Y - self.right_eye_gap / 2.0);
        points[face::RIGHT_EYE_BOTTOM] = Landmark::xy(0.42, EYE_Y + self.right_eye_gap / 2.0);
        points[face::LEFT_EYE_TOP] = Landmark::xy(0.58, EYE_Y - self.left_eye_gap / 2.0);
        points[face::LEFT_EYE_BOTTOM] = Landmark::xy(0.58, EYE_Y + self.left_eye_gap / 2.0);

        FaceLandmarks::new(points).expect("fixture face has full mesh")
    }
}

pub struct HandBuilder {
    points: [Landmark; 21],
}

impl HandBuilder {
    /// Index finger pointing up with its tip at (x, y), other fingers curled
    pub fn pointer_at(x: f32, y: f32) -> Self {
        let mut p = [Landmark::default(); 21];
        p[hand::WRIST] = Landmark::xy(x, y + 0.25);
        p[hand::THUMB_CMC] = Landmark::xy(x - 0.03, y + 0.22);
        p[hand::THUMB_MCP] = Landmark::xy(x - 0.04, y + 0.19);
        p[hand::THUMB_IP] = Landmark::xy(x - 0.045, y + 0.165);
        p[hand::THUMB_TIP] = Landmark::xy(x - 0.04, y + 0.14);

        p[hand::INDEX_MCP] = Landmark::xy(x, y + 0.12);
        p[hand::INDEX_PIP] = Landmark::xy(x, y + 0.06);
        p[hand::INDEX_DIP] = Landmark::xy(x, y + 0.03);
        p[hand::INDEX_TIP] = Landmark::xy(x, y);

        for (i, base) in [hand::MIDDLE_MCP, hand::RING_MCP, hand::PINKY_MCP].into_iter().enumerate() {
            let fx = x + 0.02 * (i as f32 + 1.0);
            p[base] = Landmark::xy(fx, y + 0.12);
            p[base + 1] = Landmark::xy(fx, y + 0.09);
            p[base + 2] = Landmark::xy(fx, y + 0.11);
            p[base + 3] = Landmark::xy(fx, y + 0.13);
        }
        Self { points: p }
    }

    /// Loose fist with the wrist at (x, y), every finger curled
    pub fn resting_at(x: f32, y: f32) -> Self {
        let mut p = [Landmark::default(); 21];
        p[hand::WRIST] = Landmark::xy(x, y);
        p[hand::THUMB_CMC] = Landmark::xy(x - 0.03, y - 0.03);
        p[hand::THUMB_MCP] = Landmark::xy(x - 0.05, y - 0.05);
        p[hand::THUMB_IP] = Landmark::xy(x - 0.05, y - 0.065);
        p[hand::THUMB_TIP] = Landmark::xy(x - 0.04, y - 0.07);

        for (i, base) in [hand::INDEX_MCP, hand::MIDDLE_MCP, hand::RING_MCP, hand::PINKY_MCP]
            .into_iter()
            .enumerate()
        {
            let fx = x - 0.03 + 0.02 * i as f32;
            p[base] = Landmark::xy(fx, y - 0.08);
            p[base + 1] = Landmark::xy(fx, y - 0.10);
            p[base + 2] = Landmark::xy(fx, y - 0.08);
            p[base + 3] = Landmark::xy(fx, y - 0.06);
        }
        Self { points: p }
    }

    /// Straighten the middle finger (breaks the pointer shape)
    pub fn middle_extended(mut self) -> Self {
        let pip = self.points[hand::MIDDLE_PIP];
        self.points[hand::MIDDLE_TIP] = Landmark::xy(pip.x, pip.y - 0.05);
        self
    }

    pub fn build(self) -> HandLandmarks {
        HandLandmarks::new(self.points)
    }
}
