//! Countdown timer component.
//!
//! A [`CountdownTimer`] counts down from `duration` in fixed `interval` steps
//! and reports each step as a [`CountdownNotice`]. It is driven by frame time:
//! [`crate::systems::time::update_countdowns`] feeds it the scaled frame
//! delta and turns the notices into events.
//!
//! # State Machine
//!
//! ```text
//! Idle --start--> Running --expiry--> Idle      (Finished notice)
//!                    \----stop/reset--> Idle    (no notice)
//! ```
//!
//! `start` while running is ignored. `stop` takes effect immediately, so a
//! cancelled run never produces another notice.
//!
//! # Related
//!
//! - [`crate::events::countdown`] – start/update/finish events and the control observer
//! - [`crate::systems::time::update_countdowns`] – the system that advances timers

use bevy_ecs::prelude::Component;
use log::{debug, warn};
use smallvec::SmallVec;

/// Default step between two progress notifications, in seconds.
pub const DEFAULT_INTERVAL: f32 = 0.1;
/// Smallest accepted interval; anything lower is clamped to it.
pub const MIN_INTERVAL: f32 = 0.001;
/// Remaining time at or below this counts as expired.
const EXPIRY_EPSILON: f64 = 1e-4;

/// Whether the countdown is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    #[default]
    Idle,
    Running,
}

/// Progress produced by [`CountdownTimer::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownNotice {
    /// One interval elapsed; `progress` is `remaining / duration`.
    Updated { remaining: f32, progress: f32 },
    /// The countdown reached zero and is idle again.
    Finished,
}

/// Fixed-step countdown timer.
///
/// Remaining time is derived from the number of completed steps rather than
/// decremented in place, so long runs with tiny intervals still reach zero.
#[derive(Component, Debug, Clone)]
pub struct CountdownTimer {
    duration: f32,
    interval: f32,
    phase: CountdownPhase,
    /// Steps completed in the current run.
    steps: u64,
    /// Time accumulated since the last step.
    since_tick: f64,
}

fn sanitize_interval(interval: f32) -> f32 {
    if interval.is_finite() && interval >= MIN_INTERVAL {
        interval
    } else {
        warn!(
            "Countdown interval {} is invalid, clamping to {}",
            interval, MIN_INTERVAL
        );
        MIN_INTERVAL
    }
}

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration >= 0.0 {
        duration
    } else {
        warn!("Countdown duration {} is invalid, using 0", duration);
        0.0
    }
}

impl CountdownTimer {
    /// Create an idle timer.
    pub fn new(duration: f32, interval: f32) -> Self {
        CountdownTimer {
            duration: sanitize_duration(duration),
            interval: sanitize_interval(interval),
            phase: CountdownPhase::Idle,
            steps: 0,
            since_tick: 0.0,
        }
    }

    /// Create an idle timer ticking every [`DEFAULT_INTERVAL`] seconds.
    pub fn with_duration(duration: f32) -> Self {
        Self::new(duration, DEFAULT_INTERVAL)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    fn remaining_exact(&self) -> f64 {
        f64::from(self.duration) - self.steps as f64 * f64::from(self.interval)
    }

    /// Time left in the current (or last) run, in seconds. 0 once expired.
    pub fn remaining(&self) -> f32 {
        let remaining = self.remaining_exact();
        if remaining <= EXPIRY_EPSILON {
            0.0
        } else {
            remaining as f32
        }
    }

    /// `remaining / duration`, or 0 for a zero-length timer.
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            self.remaining() / self.duration
        } else {
            0.0
        }
    }

    /// Begin counting down. Returns false if already running.
    ///
    /// The caller is responsible for announcing the start.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = CountdownPhase::Running;
        self.steps = 0;
        self.since_tick = 0.0;
        debug!(
            "Countdown started: duration={} interval={}",
            self.duration, self.interval
        );
        true
    }

    /// Reconfigure and start. Ignored entirely while running.
    pub fn start_with(&mut self, duration: f32, interval: f32) -> bool {
        if self.is_running() {
            return false;
        }
        self.duration = sanitize_duration(duration);
        self.interval = sanitize_interval(interval);
        self.start()
    }

    /// Cancel a running countdown. Returns whether a run was cancelled.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = CountdownPhase::Idle;
        self.since_tick = 0.0;
        debug!("Countdown cancelled with {} s remaining", self.remaining());
        true
    }

    /// Stop any running countdown and set the parameters for the next start.
    pub fn reset(&mut self, duration: f32, interval: f32) {
        self.stop();
        self.duration = sanitize_duration(duration);
        self.interval = sanitize_interval(interval);
        self.steps = 0;
    }

    /// Advance by `dt` seconds and return the steps that completed.
    pub fn advance(&mut self, dt: f32) -> SmallVec<[CountdownNotice; 4]> {
        let mut notices = SmallVec::new();
        if !self.is_running() {
            return notices;
        }
        if self.remaining_exact() <= EXPIRY_EPSILON {
            self.finish(&mut notices);
            return notices;
        }
        let interval = f64::from(self.interval);
        if dt.is_finite() {
            self.since_tick += f64::from(dt.max(0.0));
        }
        while self.since_tick >= interval {
            self.since_tick -= interval;
            self.steps += 1;
            if self.remaining_exact() <= EXPIRY_EPSILON {
                self.finish(&mut notices);
                break;
            }
            notices.push(CountdownNotice::Updated {
                remaining: self.remaining(),
                progress: self.progress(),
            });
        }
        notices
    }

    fn finish(&mut self, notices: &mut SmallVec<[CountdownNotice; 4]>) {
        self.since_tick = 0.0;
        self.phase = CountdownPhase::Idle;
        debug!("Countdown finished");
        notices.push(CountdownNotice::Finished);
    }
}
