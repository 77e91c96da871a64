//! Events emitted by a pose session for the UI and capture layers

use crate::classifier::PoseLabel;
use super::calibration::CalibrationState;

pub const STATUS_STRIKE_A_POSE: &str = "Strike a pose! \u{1F412}";
pub const STATUS_HOLD_IT: &str = "Hold it... \u{1F412}";
pub const STATUS_SNAP: &str = "\u{1F4F8} SNAP!";

/// Category of the status bar text (maps to a CSS state on the JS side)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Holding,
    Warning,
    Captured,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Idle => "idle",
            StatusKind::Holding => "holding",
            StatusKind::Warning => "warning",
            StatusKind::Captured => "captured",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Calibration entered a new state
    CalibrationProgress {
        state: CalibrationState,
        percentage: u8,
        message: &'static str,
    },
    /// Calibration reached `Ready` (fires once)
    CalibrationComplete,
    /// Calibration screen can be hidden (fires once, shortly after ready)
    CalibrationHidden,
    /// Which hint pills to highlight for this frame
    PoseHint {
        active: Option<PoseLabel>,
        warn: Option<PoseLabel>,
    },
    /// Status bar text changed
    Status {
        message: &'static str,
        kind: StatusKind,
    },
    /// A pose was held long enough; capture now
    PoseConfirmed(PoseLabel),
}

impl SessionEvent {
    pub(crate) fn progress(state: CalibrationState) -> Self {
        SessionEvent::CalibrationProgress {
            state,
            percentage: state.progress(),
            message: state.message(),
        }
    }
}
