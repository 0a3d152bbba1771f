//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Target refresh rate.
pub const TARGET_FPS: u32 = 60;

/// Deadline-based frame clock.
///
/// Deadlines advance by a fixed step so short frames do not accumulate
/// drift. A frame that overruns by more than one step resynchronizes to
/// `now` instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    deadline: Instant,
    frames: u64,
    overruns: u64,
}

impl FrameClock {
    /// Clock ticking `fps` times per second, starting at `now`.
    #[must_use]
    pub fn new(fps: u32, now: Instant) -> Self {
        let step = Duration::from_secs(1) / fps.max(1);
        Self { step, deadline: now + step, frames: 0, overruns: 0 }
    }

    /// Duration of one frame.
    #[must_use]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time left before the next frame is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Whether the next frame is due.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Record a frame and schedule the next one.
    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;
        self.deadline += self.step;
        if now > self.deadline {
            self.overruns += 1;
            self.deadline = now + self.step;
        }
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that ran more than a full step late.
    #[must_use]
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}
