//! Power management - idle tracking and deep sleep.
//!
//! The remote has two power states:
//!
//! - **Active**: polling the buttons every ~100 ms.
//! - **Sleeping**: nRF52840 System OFF (~0.4 µA), woken only by the
//!   Input button. Waking resets the chip, so nothing in RAM survives and
//!   the firmware starts again from `main`.

use crate::input::LogicalButton;
use crate::power_logic;

/// Power state reported by each control-loop cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Keep polling.
    Active,
    /// Idle timeout elapsed - enter deep sleep.
    Sleeping,
}

/// Tracks the time of the last dispatched press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleTimer {
    last_activity_ms: u64,
    timeout_ms: u64,
}

impl IdleTimer {
    /// Start the timer with `now_ms` as the last activity.
    pub fn new(now_ms: u64, timeout_ms: u64) -> Self {
        Self {
            last_activity_ms: now_ms,
            timeout_ms,
        }
    }

    /// Record activity (a dispatched press).
    pub fn activity(&mut self, now_ms: u64) {
        self.last_activity_ms = now_ms;
    }

    pub fn last_activity_ms(&self) -> u64 {
        self.last_activity_ms
    }

    /// Earliest time at which the device may go to sleep.
    pub fn deadline_ms(&self) -> u64 {
        self.last_activity_ms.saturating_add(self.timeout_ms)
    }

    /// Whether the idle timeout has elapsed at `now_ms`.
    pub fn expired(&self, now_ms: u64) -> bool {
        power_logic::sleep_due(self.last_activity_ms, now_ms, self.timeout_ms)
    }
}

/// Platform deep sleep.
///
/// `sleep_until_pressed` arms `wake` as the only wake source (active low)
/// and powers down. It never returns: waking restarts the firmware.
pub trait DeepSleep {
    fn sleep_until_pressed(&mut self, wake: LogicalButton) -> !;
}
