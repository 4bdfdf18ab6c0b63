//! Converts host frame timestamps into a whole number of fixed simulation steps.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::constants::{FIXED_STEP, MAX_FRAME_TIME, MAX_SUBSTEPS};

/// Fixed-step accumulator.
///
/// Each frame's elapsed time is clamped to `max_frame` and added to the
/// accumulator, which is then drained in `step` sized chunks, at most
/// `max_substeps` of them per frame. The remainder carries into the next frame.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: Duration,
    max_frame: Duration,
    max_substeps: u32,
    last: Option<Instant>,
    accumulator: Duration,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(FIXED_STEP, MAX_FRAME_TIME, MAX_SUBSTEPS)
    }
}

impl FixedStepClock {
    pub fn new(step: Duration, max_frame: Duration, max_substeps: u32) -> Self {
        Self {
            step,
            max_frame,
            max_substeps: max_substeps.max(1),
            last: None,
            accumulator: Duration::ZERO,
        }
    }

    /// Length of one simulation step.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time waiting in the accumulator, always less than one step after a call
    /// to [`FixedStepClock::advance`] unless the sub-step cap was hit.
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    /// Registers a frame at `now` and returns how many steps to simulate.
    ///
    /// The first frame only records the timestamp. Timestamps going backwards
    /// count as no elapsed time.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(last).min(self.max_frame);
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            warn!("Simulation behind schedule by: {:?}, dropping it", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    /// Throws away accumulated time, used while the simulation is paused.
    pub fn drain(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
