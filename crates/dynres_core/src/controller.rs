//! Per-frame resolution controller
//!
//! One [`ResolutionController`] per viewport. Each [`tick`] is atomic with
//! respect to the scale: acquire timing, decide, apply, commit, all inside the
//! call. Stopping between ticks never leaves a half-applied change.
//!
//! [`tick`]: ResolutionController::tick

use crate::config::{ControllerConfig, Policy};
use crate::decision::{decide, Decision};
use crate::error::{ApplyWarning, ConfigError};
use crate::scale::{FrameCounter, ScaleLadder, ScaleState};
use crate::sink::ResolutionSink;
use crate::sweep::SweepState;
use dynres_metrics::{Counter, FrameTiming, FrameTimingSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built but not yet initialised with a starting scale.
    Idle,
    Running,
    Stopped,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Not initialised, or shut down.
    Inactive,
    /// Still inside the warm-up window.
    WarmingUp { frame: u64 },
    /// The timing source had less history than required. Nothing changed.
    InsufficientData { available: usize, required: usize },
    /// No scale change: a hold decision, a step clamped to no movement, or a
    /// sweep waiting for its next step.
    Held { decision: Decision },
    /// The sink was called and the new scale committed.
    Applied {
        scale: ScaleState,
        decision: Decision,
        warning: Option<ApplyWarning>,
    },
}

impl TickOutcome {
    pub fn applied_scale(&self) -> Option<ScaleState> {
        match self {
            TickOutcome::Applied { scale, .. } => Some(*scale),
            _ => None,
        }
    }
}

pub struct ResolutionController<S, K> {
    config: ControllerConfig,
    source: S,
    sink: K,
    ladder: ScaleLadder,
    frames: FrameCounter,
    sweep: SweepState,
    lifecycle: Lifecycle,
    stats: Counter,
}

impl<S, K> ResolutionController<S, K>
where
    S: FrameTimingSource,
    K: ResolutionSink,
{
    pub fn new(config: ControllerConfig, source: S, sink: K) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ladder: ScaleLadder::new(ScaleState::default(), config.step, config.bounds),
            config,
            source,
            sink,
            frames: FrameCounter::new(),
            sweep: SweepState::new(),
            lifecycle: Lifecycle::Idle,
            stats: Counter::new(),
        })
    }

    /// Start (or restart) from the renderer's current scale.
    ///
    /// A starting scale outside the bounds, or not finite, is clamped in. The
    /// sink is not called; the renderer is already at this scale.
    pub fn initialize(&mut self, width_scale: f32, height_scale: f32) {
        let requested = ScaleState::new(width_scale, height_scale);
        self.ladder = ScaleLadder::new(requested, self.config.step, self.config.bounds);
        let scale = self.ladder.scale();
        if scale != requested {
            tracing::warn!(%requested, clamped = %scale, "initial render scale outside bounds");
        }

        self.frames.reset();
        self.sweep.reset();
        self.stats.reset_all();
        self.lifecycle = Lifecycle::Running;
        tracing::info!(policy = self.config.policy.name(), %scale, "resolution controller started");
    }

    /// Stop ticking. Safe at any point between ticks; repeated calls are no-ops.
    pub fn shutdown(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            tracing::info!(scale = %self.ladder.scale(), frames = self.frames.count(), "resolution controller stopped");
        }
        self.lifecycle = Lifecycle::Stopped;
    }

    /// Run one frame of the control loop. Never fails; see [`TickOutcome`].
    pub fn tick(&mut self) -> TickOutcome {
        if self.lifecycle != Lifecycle::Running {
            return TickOutcome::Inactive;
        }

        let frame = self.frames.advance();
        if !self.frames.is_warm(self.config.warmup_frames) {
            return TickOutcome::WarmingUp { frame };
        }

        let decision = match self.config.policy {
            Policy::TimingDriven => match self.acquire_timing(frame) {
                Ok(timing) => {
                    let decision = decide(timing, self.config.target_frame_ms, self.config.hysteresis_ms);
                    tracing::trace!(
                        frame,
                        gpu_ms = timing.gpu_time_ms,
                        cpu_ms = timing.cpu_time_ms,
                        decision = decision.name(),
                        "frame timing evaluated"
                    );
                    decision
                }
                Err(outcome) => return outcome,
            },
            Policy::DemoSweep { interval_frames } => {
                match self.sweep.poll(self.ladder.scale(), self.config.bounds, interval_frames) {
                    Some(decision) => {
                        let outcome = self.step(decision);
                        if outcome.applied_scale().is_some() {
                            self.stats.increment("sweep_step", 1);
                        }
                        return outcome;
                    }
                    None => return TickOutcome::Held { decision: Decision::Hold },
                }
            }
        };

        self.step(decision)
    }

    fn acquire_timing(&mut self, frame: u64) -> Result<FrameTiming, TickOutcome> {
        let required = self.config.warmup_frames as usize;
        self.source.capture();
        let timings = self.source.latest(required);

        match timings.first() {
            Some(newest) if timings.len() >= required => Ok(*newest),
            _ => {
                tracing::debug!(frame, available = timings.len(), required, "skipping frame, not enough frame timings");
                self.stats.increment("insufficient_data", 1);
                Err(TickOutcome::InsufficientData {
                    available: timings.len(),
                    required,
                })
            }
        }
    }

    fn step(&mut self, decision: Decision) -> TickOutcome {
        let current = self.ladder.scale();
        let ladder = self.ladder.stepped(decision);
        let next = ladder.scale();
        if next == current {
            self.stats.increment("hold", 1);
            return TickOutcome::Held { decision };
        }

        // The sink sees a copy; the commit below happens regardless of its result.
        let warning = match self.sink.apply(next.width, next.height) {
            Ok(()) => None,
            Err(warning) => {
                tracing::warn!(%warning, scale = %next, "resolution sink reported a problem");
                self.stats.increment("apply_warning", 1);
                Some(warning)
            }
        };

        self.ladder = ladder;
        self.stats.increment(decision.name(), 1);
        tracing::debug!(decision = decision.name(), scale = %next, "render scale changed");

        TickOutcome::Applied {
            scale: next,
            decision,
            warning,
        }
    }

    pub fn scale(&self) -> ScaleState {
        self.ladder.scale()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames.count()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn policy(&self) -> Policy {
        self.config.policy
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Diagnostic counters: `increase`, `decrease`, `hold`,
    /// `insufficient_data`, `apply_warning`, `sweep_step`.
    /// All zero without the `metrics` feature.
    pub fn stats(&self) -> &Counter {
        &self.stats
    }

    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}
