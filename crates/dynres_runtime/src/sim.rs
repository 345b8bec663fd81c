//! Synthetic renderer used to drive the controller without a GPU

use dynres_metrics::{FrameTiming, FrameTimingHistory, FrameTimingSource};

/// GPU cost grows with rendered area; CPU cost is flat.
pub struct SimulatedGpu {
    history: FrameTimingHistory,
    /// GPU milliseconds for one frame at scale 1.0 x 1.0.
    base_gpu_ms: f64,
    cpu_ms: f64,
    frame: u64,
}

impl SimulatedGpu {
    pub fn new(base_gpu_ms: f64, cpu_ms: f64) -> Self {
        Self {
            history: FrameTimingHistory::new(),
            base_gpu_ms,
            cpu_ms,
            frame: 0,
        }
    }

    /// Render one frame at the given scale and queue its timing.
    pub fn render(&mut self, width_scale: f32, height_scale: f32) -> FrameTiming {
        self.frame += 1;
        // Small deterministic wobble so the hold band gets exercised.
        let wobble = 1.0 + 0.08 * (self.frame as f64 * 0.37).sin();
        let area = f64::from(width_scale) * f64::from(height_scale);
        let timing = FrameTiming::new(self.base_gpu_ms * area * wobble, self.cpu_ms);
        self.history.record(timing);
        timing
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }
}

impl FrameTimingSource for SimulatedGpu {
    fn capture(&mut self) {
        self.history.capture();
    }

    fn latest(&self, count: usize) -> Vec<FrameTiming> {
        self.history.latest(count)
    }
}
