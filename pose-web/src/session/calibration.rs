//! Calibration readiness tracking
//!
//! Detection stays off until the model has produced a frame, a face has
//! been seen, and both hands have been seen together. Each milestone
//! latches: losing the face or a hand later never sends calibration back.

use tracing::info;
use crate::landmarks::Frame;

/// Ordered calibration states
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalibrationState {
    WaitingModel,
    WaitingFace,
    WaitingHands,
    Ready,
}

/// Calibration states in progression order
pub const CALIBRATION_STATES: [CalibrationState; 4] = [
    CalibrationState::WaitingModel,
    CalibrationState::WaitingFace,
    CalibrationState::WaitingHands,
    CalibrationState::Ready,
];

impl CalibrationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalibrationState::WaitingModel => "waiting-model",
            CalibrationState::WaitingFace => "waiting-face",
            CalibrationState::WaitingHands => "waiting-hands",
            CalibrationState::Ready => "ready",
        }
    }

    /// Loader bar fill, percent
    pub fn progress(&self) -> u8 {
        match self {
            CalibrationState::WaitingModel => 15,
            CalibrationState::WaitingFace => 50,
            CalibrationState::WaitingHands => 80,
            CalibrationState::Ready => 100,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CalibrationState::WaitingModel => "Loading AI models...",
            CalibrationState::WaitingFace => "Look at the camera so we can see your face!",
            CalibrationState::WaitingHands => "Now raise both hands so we can detect them!",
            CalibrationState::Ready => "All set! Get ready to pose...",
        }
    }

    /// Status of the model / face / hands step indicators
    pub fn steps(&self) -> [StepStatus; 3] {
        use StepStatus::{Active, Done, Pending};
        match self {
            CalibrationState::WaitingModel => [Active, Pending, Pending],
            CalibrationState::WaitingFace => [Done, Active, Pending],
            CalibrationState::WaitingHands => [Done, Done, Active],
            CalibrationState::Ready => [Done, Done, Done],
        }
    }
}

/// One calibration step indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

impl StepStatus {
    /// CSS class used by the step indicator ("" for pending)
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "",
            StepStatus::Active => "active",
            StepStatus::Done => "done",
        }
    }
}

#[derive(Debug, Default)]
pub struct CalibrationTracker {
    model_ready: bool,
    face_seen: bool,
    hands_seen: bool,
    /// Last state reported to the caller
    reported: Option<CalibrationState>,
    ready_at: Option<f64>,
}

impl CalibrationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, derived from the latched milestones
    pub fn state(&self) -> CalibrationState {
        if !self.model_ready {
            CalibrationState::WaitingModel
        } else if !self.face_seen {
            CalibrationState::WaitingFace
        } else if !self.hands_seen {
            CalibrationState::WaitingHands
        } else {
            CalibrationState::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == CalibrationState::Ready
    }

    /// Time the tracker became ready, if it has
    pub fn ready_at(&self) -> Option<f64> {
        self.ready_at
    }

    /// Record one detector frame. Returns every state entered as a result,
    /// in order; a single frame can skip straight through several.
    pub fn observe(&mut self, frame: &Frame, now: f64) -> Vec<CalibrationState> {
        self.model_ready = true;
        self.face_seen |= frame.has_face();
        self.hands_seen |= frame.has_both_hands();

        let current = self.state();
        let entered: Vec<CalibrationState> = CALIBRATION_STATES
            .iter()
            .copied()
            .filter(|s| self.reported.map_or(true, |r| *s > r) && *s <= current)
            .filter(|s| *s != CalibrationState::WaitingModel)
            .collect();

        if !entered.is_empty() {
            self.reported = Some(current);
            info!("Calibration: {} ({}%)", current.as_str(), current.progress());
        }
        if current == CalibrationState::Ready && self.ready_at.is_none() {
            self.ready_at = Some(now);
        }
        entered
    }
}
