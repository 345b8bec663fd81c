//! Controller configuration
//!
//! Everything here is validated once, when the controller is built. The
//! control loop never reconfigures itself.

use crate::error::{Axis, ConfigError};
use crate::scale::ScaleState;

/// 60 Hz frame budget in milliseconds.
pub const DEFAULT_TARGET_FRAME_MS: f64 = 1000.0 / 60.0;
pub const DEFAULT_HYSTERESIS_MS: f64 = 2.0;
/// Frames of timing history required before the controller acts.
pub const DEFAULT_WARMUP_FRAMES: u32 = 2;
/// Three seconds at 60 Hz between demo sweep steps.
pub const DEFAULT_SWEEP_INTERVAL_FRAMES: u32 = 180;

/// Per-axis scale limits. Always `0 < min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min_width: f32,
    max_width: f32,
    min_height: f32,
    max_height: f32,
}

impl ScaleBounds {
    pub fn new(
        min_width: f32,
        max_width: f32,
        min_height: f32,
        max_height: f32,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("min_width", min_width),
            ("max_width", max_width),
            ("min_height", min_height),
            ("max_height", max_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveBound { name, value });
            }
        }
        if min_width > max_width {
            return Err(ConfigError::InvertedBounds {
                axis: Axis::Width,
                min: min_width,
                max: max_width,
            });
        }
        if min_height > max_height {
            return Err(ConfigError::InvertedBounds {
                axis: Axis::Height,
                min: min_height,
                max: max_height,
            });
        }

        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// Same range on both axes.
    pub fn uniform(min: f32, max: f32) -> Result<Self, ConfigError> {
        Self::new(min, max, min, max)
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Clamp per axis. A non-finite component lands on the middle of its range.
    pub fn clamp(&self, width: f32, height: f32) -> ScaleState {
        ScaleState::new(
            clamp_axis(width, self.min_width, self.max_width),
            clamp_axis(height, self.min_height, self.max_height),
        )
    }

    pub fn contains(&self, scale: ScaleState) -> bool {
        (self.min_width..=self.max_width).contains(&scale.width)
            && (self.min_height..=self.max_height).contains(&scale.height)
    }

    pub fn at_max(&self, scale: ScaleState) -> bool {
        scale.width >= self.max_width && scale.height >= self.max_height
    }

    pub fn at_min(&self, scale: ScaleState) -> bool {
        scale.width <= self.min_width && scale.height <= self.min_height
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min + (max - min) * 0.5
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min_width: 0.5,
            max_width: 1.5,
            min_height: 0.5,
            max_height: 1.5,
        }
    }
}

/// Per-tick change in scale. Both components are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSize {
    width: f32,
    height: f32,
}

impl StepSize {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        for (axis, value) in [(Axis::Width, width), (Axis::Height, height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveStep { axis, value });
            }
        }
        Ok(Self { width, height })
    }

    pub fn uniform(step: f32) -> Result<Self, ConfigError> {
        Self::new(step, step)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self {
            width: 0.25,
            height: 0.25,
        }
    }
}

/// How the controller picks a direction each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Steer by measured frame time against the budget.
    TimingDriven,
    /// Ignore timing and walk min -> max -> min, one step every
    /// `interval_frames` ticks. Used for demos and soak tests.
    DemoSweep { interval_frames: u32 },
}

impl Policy {
    pub fn demo_sweep() -> Self {
        Policy::DemoSweep {
            interval_frames: DEFAULT_SWEEP_INTERVAL_FRAMES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::TimingDriven => "timing-driven",
            Policy::DemoSweep { .. } => "demo-sweep",
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::TimingDriven
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub bounds: ScaleBounds,
    pub step: StepSize,
    /// Frame budget in milliseconds.
    pub target_frame_ms: f64,
    /// Width of the hold band below the budget, in milliseconds.
    pub hysteresis_ms: f64,
    pub warmup_frames: u32,
    pub policy: Policy,
}

impl ControllerConfig {
    /// Checks the scalar settings. Bounds and steps are already valid by
    /// construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_frame_ms.is_finite() || self.target_frame_ms <= 0.0 {
            return Err(ConfigError::InvalidBudget(self.target_frame_ms));
        }
        if !self.hysteresis_ms.is_finite()
            || self.hysteresis_ms < 0.0
            || self.hysteresis_ms >= self.target_frame_ms
        {
            return Err(ConfigError::InvalidHysteresis {
                hysteresis_ms: self.hysteresis_ms,
                target_ms: self.target_frame_ms,
            });
        }
        if self.warmup_frames == 0 {
            return Err(ConfigError::InvalidWarmup);
        }
        if let Policy::DemoSweep { interval_frames: 0 } = self.policy {
            return Err(ConfigError::InvalidSweepInterval);
        }
        Ok(())
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            bounds: ScaleBounds::default(),
            step: StepSize::default(),
            target_frame_ms: DEFAULT_TARGET_FRAME_MS,
            hysteresis_ms: DEFAULT_HYSTERESIS_MS,
            warmup_frames: DEFAULT_WARMUP_FRAMES,
            policy: Policy::TimingDriven,
        }
    }
}
