//! Session module - per-session state machines and the frame pipeline
//!
//! Re-exports only. All logic in submodules.

mod calibration;
mod events;
mod hold;
mod pipeline;
mod timings;

pub use calibration::{CalibrationState, CalibrationTracker, StepStatus, CALIBRATION_STATES};
pub use events::{SessionEvent, StatusKind, STATUS_STRIKE_A_POSE, STATUS_HOLD_IT, STATUS_SNAP};
pub use hold::{HoldDebouncer, HoldOutcome, HoldState, HOLD_TIME_MS, COOLDOWN_RELEASE_MS};
pub use pipeline::PoseSession;
pub use timings::{Timings, CALIBRATION_HIDE_MS};
