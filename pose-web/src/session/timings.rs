//! Session timing constants

use super::hold::{COOLDOWN_RELEASE_MS, HOLD_TIME_MS};

/// Delay between calibration completing and the calibration screen hiding (ms)
pub const CALIBRATION_HIDE_MS: f64 = 700.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub hold_ms: f64,
    pub cooldown_release_ms: f64,
    pub calibration_hide_ms: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            hold_ms: HOLD_TIME_MS,
            cooldown_release_ms: COOLDOWN_RELEASE_MS,
            calibration_hide_ms: CALIBRATION_HIDE_MS,
        }
    }
}
