//! Hold-to-confirm debouncing
//!
//! A pose must be classified identically on every frame for `hold_ms`
//! before it is confirmed. Any gap or change restarts the clock. After a
//! confirmation the debouncer sits in cooldown until the capture popup is
//! dismissed and a further release delay has passed.

use tracing::{debug, info};
use crate::classifier::PoseLabel;

/// Minimum continuous hold before a pose is confirmed (ms)
pub const HOLD_TIME_MS: f64 = 1200.0;

/// Delay between popup dismissal and the end of cooldown (ms)
pub const COOLDOWN_RELEASE_MS: f64 = 1500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoldState {
    Idle,
    Holding { pose: PoseLabel, started_at: f64 },
    /// `until` stays `None` until the popup is acknowledged
    Cooldown { until: Option<f64> },
}

/// What a single frame did to the hold
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoldOutcome {
    /// No pose; `released` is set when a hold was just abandoned
    Idle { released: bool },
    /// A new hold began this frame
    Started(PoseLabel),
    /// Same pose as before, not held long enough yet
    Holding(PoseLabel),
    /// Held long enough; cooldown has begun
    Confirmed(PoseLabel),
    /// Frame ignored for confirmation purposes
    CoolingDown,
}

#[derive(Debug)]
pub struct HoldDebouncer {
    state: HoldState,
    hold_ms: f64,
    release_ms: f64,
}

impl HoldDebouncer {
    pub fn new(hold_ms: f64, release_ms: f64) -> Self {
        Self {
            state: HoldState::Idle,
            hold_ms,
            release_ms,
        }
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn is_cooling_down(&self) -> bool {
        matches!(self.state, HoldState::Cooldown { .. })
    }

    /// Feed one classified frame
    pub fn update(&mut self, pose: Option<PoseLabel>, now: f64) -> HoldOutcome {
        if let HoldState::Cooldown { until } = self.state {
            match until {
                Some(t) if now >= t => {
                    debug!("Cooldown released at {:.0}ms", now);
                    self.state = HoldState::Idle;
                }
                _ => return HoldOutcome::CoolingDown,
            }
        }

        match (self.state, pose) {
            (state, None) => {
                let released = matches!(state, HoldState::Holding { .. });
                if released {
                    debug!("Hold abandoned");
                }
                self.state = HoldState::Idle;
                HoldOutcome::Idle { released }
            }
            (HoldState::Holding { pose: held, started_at }, Some(pose)) if held == pose => {
                let elapsed_ms = now - started_at;
                if elapsed_ms >= self.hold_ms {
                    info!("Pose confirmed: {} (held {:.0}ms)", pose.as_str(), elapsed_ms);
                    self.state = HoldState::Cooldown { until: None };
                    HoldOutcome::Confirmed(pose)
                } else {
                    HoldOutcome::Holding(pose)
                }
            }
            (_, Some(pose)) => {
                debug!("Hold started: {} at {:.0}ms", pose.as_str(), now);
                self.state = HoldState::Holding { pose, started_at: now };
                HoldOutcome::Started(pose)
            }
        }
    }

    /// Popup dismissed: schedule the end of cooldown.
    ///
    /// Returns false (and does nothing) when not cooling down, so a late
    /// acknowledgement can never disturb a newer hold.
    pub fn acknowledge_dismissed(&mut self, now: f64) -> bool {
        match self.state {
            HoldState::Cooldown { until } => {
                let release_at = now + self.release_ms;
                let until = until.map_or(release_at, |t| t.max(release_at));
                debug!("Popup dismissed, cooldown ends at {:.0}ms", until);
                self.state = HoldState::Cooldown { until: Some(until) };
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = HoldState::Idle;
    }
}

impl Default for HoldDebouncer {
    fn default() -> Self {
        Self::new(HOLD_TIME_MS, COOLDOWN_RELEASE_MS)
    }
}
