//! Scale state and frame bookkeeping owned by the controller

use crate::config::{ScaleBounds, StepSize};
use crate::decision::Decision;
use serde::{Deserialize, Serialize};

/// Slack, in steps, when locating the bound rungs so rounding error never
/// adds a rung that only moves the scale by a few ulps.
const RUNG_EPSILON: f64 = 1e-4;

/// Current render-scale multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleState {
    pub width: f32,
    pub height: f32,
}

impl ScaleState {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn uniform(scale: f32) -> Self {
        Self::new(scale, scale)
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl std::fmt::Display for ScaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}x{:.3}", self.width, self.height)
    }
}

/// One axis as an integer rung on a grid anchored at the starting scale.
///
/// Rung `0` is the origin; the lowest and highest rungs sit exactly on the
/// bounds. Values are recomputed from the rung, so stepping never
/// accumulates rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisLadder {
    origin: f32,
    step: f32,
    min: f32,
    max: f32,
    lowest: i64,
    highest: i64,
    rung: i64,
}

impl AxisLadder {
    fn new(origin: f32, step: f32, min: f32, max: f32) -> Self {
        let span = |bound: f32| (f64::from(bound) - f64::from(origin)) / f64::from(step);
        Self {
            origin,
            step,
            min,
            max,
            lowest: (span(min) + RUNG_EPSILON).floor().min(0.0) as i64,
            highest: (span(max) - RUNG_EPSILON).ceil().max(0.0) as i64,
            rung: 0,
        }
    }

    fn value(&self) -> f32 {
        if self.rung >= self.highest && self.highest > 0 {
            return self.max;
        }
        if self.rung <= self.lowest && self.lowest < 0 {
            return self.min;
        }
        let value = f64::from(self.origin) + self.rung as f64 * f64::from(self.step);
        (value as f32).clamp(self.min, self.max)
    }

    fn moved(self, delta: i64) -> Self {
        Self {
            rung: (self.rung + delta).clamp(self.lowest, self.highest),
            ..self
        }
    }
}

/// Scale position on both axes, stepped in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLadder {
    width: AxisLadder,
    height: AxisLadder,
}

impl ScaleLadder {
    /// Anchor at `origin`, clamped into `bounds` first.
    pub fn new(origin: ScaleState, step: StepSize, bounds: ScaleBounds) -> Self {
        let origin = bounds.clamp(origin.width, origin.height);
        Self {
            width: AxisLadder::new(origin.width, step.width(), bounds.min_width(), bounds.max_width()),
            height: AxisLadder::new(origin.height, step.height(), bounds.min_height(), bounds.max_height()),
        }
    }

    pub fn scale(&self) -> ScaleState {
        ScaleState::new(self.width.value(), self.height.value())
    }

    /// Signed rung offsets from the origin, width then height.
    pub fn rungs(&self) -> (i64, i64) {
        (self.width.rung, self.height.rung)
    }

    /// One step in `decision`'s direction on both axes. `Hold` returns `self`.
    pub fn stepped(self, decision: Decision) -> Self {
        let delta = match decision {
            Decision::Increase => 1,
            Decision::Decrease => -1,
            Decision::Hold => return self,
        };
        Self {
            width: self.width.moved(delta),
            height: self.height.moved(delta),
        }
    }
}

/// Ticks seen since the controller was initialised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounter {
    count: u64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Count this frame and return the new total.
    pub fn advance(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn is_warm(&self, warmup_frames: u32) -> bool {
        self.count > u64::from(warmup_frames)
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
