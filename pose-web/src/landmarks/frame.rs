//! Landmark data structures
//!
//! Holistic results arrive from JavaScript as flat Float32Arrays of
//! `x, y, z` triples. They are validated once here so the feature code
//! can index by the named constants without bounds surprises.

use std::ops::Index;
use crate::error::LandmarkError;
use super::face::FACE_LANDMARK_COUNT;
use super::hand::HAND_LANDMARK_COUNT;

// ============================================================================
// LANDMARK
// ============================================================================

/// A single landmark point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 2D point with zero depth
    pub fn xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance in the image plane (depth ignored)
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point halfway between two landmarks
    pub fn midpoint(&self, other: &Landmark) -> Landmark {
        Landmark {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }
}

fn parse_triples(data: &[f32]) -> Result<Vec<Landmark>, LandmarkError> {
    if data.len() % 3 != 0 {
        return Err(LandmarkError::RaggedBuffer(data.len()));
    }
    Ok(data
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect())
}

// ============================================================================
// FACE
// ============================================================================

/// Face mesh for one frame (468 points, or 478 with refined irises)
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLandmarks {
    points: Vec<Landmark>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<Landmark>) -> Result<Self, LandmarkError> {
        if points.len() < FACE_LANDMARK_COUNT {
            return Err(LandmarkError::FaceTooShort {
                expected: FACE_LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Parse a flat `[x0, y0, z0, x1, ...]` buffer
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        Self::new(parse_triples(data)?)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl Index<usize> for FaceLandmarks {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

// ============================================================================
// HAND
// ============================================================================

/// One detected hand (21 points)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse a flat buffer of exactly 63 values
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        let parsed = parse_triples(data)?;
        let points: [Landmark; HAND_LANDMARK_COUNT] = parsed
            .try_into()
            .map_err(|v: Vec<Landmark>| LandmarkError::HandLength {
                expected: HAND_LANDMARK_COUNT,
                actual: v.len(),
            })?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.points
    }
}

impl Index<usize> for HandLandmarks {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

// ============================================================================
// FRAME
// ============================================================================

/// One tick of detector output. Any part may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub face: Option<FaceLandmarks>,
    pub left_hand: Option<HandLandmarks>,
    pub right_hand: Option<HandLandmarks>,
}

impl Frame {
    pub fn new(
        face: Option<FaceLandmarks>,
        left_hand: Option<HandLandmarks>,
        right_hand: Option<HandLandmarks>,
    ) -> Self {
        Self { face, left_hand, right_hand }
    }

    /// Hands in detector order: right first, then left
    pub fn hands(&self) -> impl Iterator<Item = &HandLandmarks> {
        self.right_hand.iter().chain(self.left_hand.iter())
    }

    pub fn hand_count(&self) -> usize {
        self.hands().count()
    }

    pub fn has_face(&self) -> bool {
        self.face.is_some()
    }

    pub fn has_both_hands(&self) -> bool {
        self.left_hand.is_some() && self.right_hand.is_some()
    }
}
