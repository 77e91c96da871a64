//! Face mesh landmark indices (MediaPipe Face Mesh - 468 points, 478 refined)
//!
//! Only the points the pose rules read are named here. "Left" and "right"
//! are the subject's, as MediaPipe labels them.

/// Number of points in the unrefined face mesh
pub const FACE_LANDMARK_COUNT: usize = 468;

// ============================================================================
// HEAD
// ============================================================================

pub const NOSE_TIP: usize = 1;
pub const FOREHEAD_TOP: usize = 10;
pub const CHIN_TIP: usize = 152;

// ============================================================================
// MOUTH
// ============================================================================

pub const UPPER_LIP_CENTER: usize = 13;
pub const LOWER_LIP_CENTER: usize = 14;
pub const MOUTH_LEFT_CORNER: usize = 61;
pub const MOUTH_RIGHT_CORNER: usize = 291;

// ============================================================================
// EYES (upper / lower lid)
// ============================================================================

pub const RIGHT_EYE_TOP: usize = 159;
pub const RIGHT_EYE_BOTTOM: usize = 145;
pub const LEFT_EYE_TOP: usize = 386;
pub const LEFT_EYE_BOTTOM: usize = 374;
