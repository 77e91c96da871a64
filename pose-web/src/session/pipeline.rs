//! Per-frame pose pipeline
//!
//! `PoseSession` owns every piece of state that survives between frames.
//! Callers must feed frames one at a time, in order; `&mut self` on every
//! entry point makes that contract explicit.

use tracing::info;
use crate::classifier::{PoseClassifier, Thresholds};
use crate::landmarks::Frame;
use super::calibration::{CalibrationState, CalibrationTracker};
use super::events::{SessionEvent, StatusKind, STATUS_HOLD_IT, STATUS_SNAP, STATUS_STRIKE_A_POSE};
use super::hold::{HoldDebouncer, HoldOutcome, HoldState};
use super::timings::Timings;

#[derive(Debug)]
pub struct PoseSession {
    classifier: PoseClassifier,
    calibration: CalibrationTracker,
    hold: HoldDebouncer,
    timings: Timings,
    /// Calibration screen hide already announced
    hidden: bool,
    /// Last status sent, for change detection
    last_status: Option<(&'static str, StatusKind)>,
}

impl PoseSession {
    pub fn new() -> Self {
        Self::with_config(Thresholds::default(), Timings::default())
    }

    pub fn with_config(thresholds: Thresholds, timings: Timings) -> Self {
        Self {
            classifier: PoseClassifier::new(thresholds),
            calibration: CalibrationTracker::new(),
            hold: HoldDebouncer::new(timings.hold_ms, timings.cooldown_release_ms),
            timings,
            hidden: false,
            last_status: None,
        }
    }

    pub fn calibration_state(&self) -> CalibrationState {
        self.calibration.state()
    }

    pub fn hold_state(&self) -> HoldState {
        self.hold.state()
    }

    /// Whether pose classification is running. Starts once the
    /// calibration screen has been hidden, not at `Ready`.
    pub fn is_active(&self) -> bool {
        self.hidden
    }

    /// Process one detector frame taken at `now` (ms)
    pub fn on_frame(&mut self, frame: &Frame, now: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        for state in self.calibration.observe(frame, now) {
            events.push(SessionEvent::progress(state));
            if state == CalibrationState::Ready {
                info!("✅ Calibration complete");
                events.push(SessionEvent::CalibrationComplete);
            }
        }
        self.check_calibration_hidden(now, &mut events);

        if !self.hidden {
            return events;
        }

        let result = self.classifier.classify(frame);
        events.push(SessionEvent::PoseHint {
            active: result.pose,
            warn: result.warn_pose(),
        });

        match self.hold.update(result.pose, now) {
            HoldOutcome::Started(_) => {
                self.set_status(STATUS_HOLD_IT, StatusKind::Holding, &mut events);
            }
            HoldOutcome::Confirmed(pose) => {
                self.set_status(STATUS_SNAP, StatusKind::Captured, &mut events);
                events.push(SessionEvent::PoseConfirmed(pose));
            }
            HoldOutcome::Idle { released } => {
                if let Some(warning) = &result.warning {
                    self.set_status(warning.message, StatusKind::Warning, &mut events);
                } else if released {
                    self.set_status(STATUS_STRIKE_A_POSE, StatusKind::Idle, &mut events);
                }
            }
            HoldOutcome::Holding(_) | HoldOutcome::CoolingDown => {}
        }

        events
    }

    /// Capture popup closed at `now` (ms). Cooldown ends after the release delay.
    pub fn acknowledge_popup_dismissed(&mut self, now: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.hold.acknowledge_dismissed(now) {
            self.set_status(STATUS_STRIKE_A_POSE, StatusKind::Idle, &mut events);
        }
        events
    }

    /// Drop all session state
    pub fn reset(&mut self) {
        *self = Self::with_config(*self.classifier.thresholds(), self.timings);
    }

    fn check_calibration_hidden(&mut self, now: f64, events: &mut Vec<SessionEvent>) {
        if self.hidden {
            return;
        }
        if let Some(ready_at) = self.calibration.ready_at() {
            if now - ready_at >= self.timings.calibration_hide_ms {
                self.hidden = true;
                events.push(SessionEvent::CalibrationHidden);
                self.set_status(STATUS_STRIKE_A_POSE, StatusKind::Idle, events);
            }
        }
    }

    fn set_status(&mut self, message: &'static str, kind: StatusKind, events: &mut Vec<SessionEvent>) {
        if self.last_status == Some((message, kind)) {
            return;
        }
        self.last_status = Some((message, kind));
        events.push(SessionEvent::Status { message, kind });
    }
}

impl Default for PoseSession {
    fn default() -> Self {
        Self::new()
    }
}
