//! Open-loop demo sweep
//!
//! Walks the scale up to the bounds' maximum, then back down to the minimum,
//! forever. Measured timing is ignored. The wait between steps is counted in
//! ticks, so its wall-clock length follows the frame rate.

use crate::config::ScaleBounds;
use crate::decision::Decision;
use crate::scale::ScaleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepState {
    direction: SweepDirection,
    frames_until_step: u32,
}

impl SweepState {
    pub fn new() -> Self {
        Self {
            direction: SweepDirection::Up,
            frames_until_step: 0,
        }
    }

    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Count one tick. Returns the step to take when one is due.
    pub fn poll(&mut self, scale: ScaleState, bounds: ScaleBounds, interval_frames: u32) -> Option<Decision> {
        if self.frames_until_step > 0 {
            self.frames_until_step -= 1;
            return None;
        }
        self.frames_until_step = interval_frames.saturating_sub(1);

        match self.direction {
            SweepDirection::Up if bounds.at_max(scale) => self.direction = SweepDirection::Down,
            SweepDirection::Down if bounds.at_min(scale) => self.direction = SweepDirection::Up,
            _ => {}
        }

        Some(match self.direction {
            SweepDirection::Up => Decision::Increase,
            SweepDirection::Down => Decision::Decrease,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SweepState {
    fn default() -> Self {
        Self::new()
    }
}
