//! Error types for landmark ingestion

use thiserror::Error;

/// Raised when a landmark set handed over by the detector does not match
/// the published topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkError {
    /// Flat buffer does not hold whole `x, y, z` triples.
    #[error("flat landmark buffer of length {0} is not a multiple of 3")]
    RaggedBuffer(usize),

    /// Face mesh is missing points.
    #[error("face mesh has {actual} landmarks, expected at least {expected}")]
    FaceTooShort {
        /// Minimum number of face points.
        expected: usize,
        /// Number of points received.
        actual: usize,
    },

    /// Hand does not have exactly 21 points.
    #[error("hand has {actual} landmarks, expected {expected}")]
    HandLength {
        /// Required number of hand points.
        expected: usize,
        /// Number of points received.
        actual: usize,
    },
}
