//! The count-up animation state machine.
//!
//! [`CountUp`] drives a numeric value from a start to an end value over a
//! fixed duration with an eased interpolation. It is a pure machine: it
//! never schedules anything itself, it only consumes timestamps handed to
//! it by a driver. That keeps it deterministic and trivially testable on a
//! fabricated clock.

use std::time::Instant;

use crate::ease::Transition;
use crate::error::ConfigError;

/// Where a [`CountUp`] is in its lifecycle.
///
/// The machine only ever moves forward: `Idle → Running → Completed`.
/// There is no way back to `Idle`; a counter animates at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet triggered.
    Idle,
    /// Triggered and still before the end of its duration.
    Running,
    /// The value reached the end of the transition.
    Completed,
}

/// A one-shot eased count from a start value to an end value.
///
/// Each frame, a driver calls [`advance`](Self::advance) with the current
/// timestamp; the machine computes clamped progress, applies the easing
/// curve, and rounds the interpolated value to the configured number of
/// decimal places. Once progress reaches 1 the value is pinned to the
/// rounded end value and the phase becomes [`Phase::Completed`].
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    start: f64,
    end: f64,
    transition: Transition,
    decimals: u32,
    started_at: Option<Instant>,
    value: f64,
    phase: Phase,
}

impl CountUp {
    /// Creates a counter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDuration`] for a zero-length transition
    /// and [`ConfigError::NonFinite`] when either endpoint is NaN or
    /// infinite.
    pub fn new(
        start: f64,
        end: f64,
        transition: Transition,
        decimals: u32,
    ) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        if transition.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(Self {
            start,
            end,
            transition,
            decimals,
            started_at: None,
            value: round_to(start, decimals),
            phase: Phase::Idle,
        })
    }

    /// Arms the counter, recording the timestamp progress is measured from.
    ///
    /// The latch is one-way: the first call returns `true` and moves the
    /// machine to [`Phase::Running`]; every later call is a no-op returning
    /// `false`, regardless of phase. A `start_at` in the future simply
    /// holds the value at the start until the clock catches up, which is
    /// how staggered reveals delay their members.
    pub fn begin(&mut self, start_at: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.started_at = Some(start_at);
        self.phase = Phase::Running;
        true
    }

    /// Performs one frame step at `now` and returns the current value.
    ///
    /// Outside [`Phase::Running`] this is a read of the current value. The
    /// step assumes nothing about frame spacing, only that `now` never
    /// decreases across calls; a `now` before the start timestamp reads as
    /// zero progress.
    pub fn advance(&mut self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return self.value;
        };
        if self.phase != Phase::Running {
            return self.value;
        }

        let duration = self.transition.duration;
        let elapsed = now.saturating_duration_since(started_at);
        let progress = if elapsed >= duration {
            1.0
        } else {
            elapsed.as_secs_f64() / duration.as_secs_f64()
        };

        let eased = self.transition.easing.apply(progress);
        let raw = (self.end - self.start).mul_add(eased, self.start);
        // Rounding may nudge past a fractional endpoint; keep the displayed
        // value inside the rounded endpoint range.
        let lo = round_to(self.start.min(self.end), self.decimals);
        let hi = round_to(self.start.max(self.end), self.decimals);
        self.value = round_to(raw, self.decimals).clamp(lo, hi);

        if progress >= 1.0 {
            self.phase = Phase::Completed;
        }
        self.value
    }

    /// The most recently computed value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` strictly between trigger and completion.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// `true` once [`begin`](Self::begin) has been called.
    #[must_use]
    pub fn has_begun(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The configured transition.
    #[must_use]
    pub const fn transition(&self) -> Transition {
        self.transition
    }
}

/// Rounds to `decimals` fractional digits, half away from zero.
fn round_to(value: f64, decimals: u32) -> f64 {
    #[allow(clippy::cast_possible_wrap)]
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
