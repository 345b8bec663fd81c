//! Dynres Core
//!
//! Adaptive render-resolution control:
//! - Scale bounds, step sizes and controller configuration
//! - Timing-driven increase/decrease/hold decisions with a hysteresis band
//! - Open-loop demo sweep
//! - The per-frame [`ResolutionController`]
//!
//! The host supplies frame timings through
//! [`FrameTimingSource`](dynres_metrics::FrameTimingSource) and receives scale
//! changes through a [`ResolutionSink`].

pub mod config;
pub mod controller;
pub mod decision;
pub mod error;
pub mod scale;
pub mod sink;
pub mod sweep;

pub use config::{ControllerConfig, Policy, ScaleBounds, StepSize};
pub use controller::{Lifecycle, ResolutionController, TickOutcome};
pub use decision::{decide, Decision};
pub use error::{ApplyWarning, Axis, ConfigError};
pub use scale::{FrameCounter, ScaleLadder, ScaleState};
pub use sink::ResolutionSink;

pub use dynres_metrics;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
