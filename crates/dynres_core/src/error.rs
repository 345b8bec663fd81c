use thiserror::Error;

/// Axis a scale value or step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Rejected controller configuration. Raised at construction only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{axis} bounds are inverted: min {min} > max {max}")]
    InvertedBounds { axis: Axis, min: f32, max: f32 },

    #[error("bound '{name}' must be a positive finite number, got {value}")]
    NonPositiveBound { name: &'static str, value: f32 },

    #[error("{axis} step must be a positive finite number, got {value}")]
    NonPositiveStep { axis: Axis, value: f32 },

    #[error("target frame budget must be a positive finite number of milliseconds, got {0}")]
    InvalidBudget(f64),

    #[error("hysteresis band {hysteresis_ms}ms must be finite, non-negative and below the {target_ms}ms budget")]
    InvalidHysteresis { hysteresis_ms: f64, target_ms: f64 },

    #[error("warm-up must cover at least one frame")]
    InvalidWarmup,

    #[error("sweep interval must be at least one frame")]
    InvalidSweepInterval,
}

/// Problem reported by the resolution sink. The new scale stays committed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyWarning {
    #[error("requested {requested:?} was capped to {applied:?} by the platform")]
    Capped {
        requested: (f32, f32),
        applied: (f32, f32),
    },

    #[error("platform reported: {0}")]
    Platform(String),
}
