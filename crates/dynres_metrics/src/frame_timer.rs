//! Frame timing utilities

use super::ring_buffer::RingBuffer;
use crate::timing::FrameTiming;
use std::time::Instant;

/// Measures CPU frame time on the host thread and pairs it with the GPU
/// time the renderer reports.
pub struct FrameTimer {
    frame_start: Instant,
    frame_times: RingBuffer<FrameTiming>,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        Self {
            frame_start: Instant::now(),
            frame_times: RingBuffer::new(capacity),
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Close the frame. Pass `0.0` when the platform has no GPU timing.
    pub fn end(&mut self, gpu_time_ms: f64) -> FrameTiming {
        let cpu_time_ms = self.frame_start.elapsed().as_secs_f64() * 1000.0;
        let timing = FrameTiming::new(gpu_time_ms, cpu_time_ms);
        self.frame_times.push(timing);
        timing
    }

    pub fn fps(&self) -> f64 {
        let avg = self.frame_time_ms();
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_times.average().frame_time_ms()
    }

    pub fn frame_time_range_ms(&self) -> (f64, f64) {
        self.frame_times.min_max_frame_time_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_time_dominates_when_slower() {
        let mut timer = FrameTimer::new(8);
        timer.begin();
        let timing = timer.end(1_000.0);

        assert_eq!(timing.gpu_time_ms, 1_000.0);
        assert!(timing.cpu_time_ms < 1_000.0);
        assert_eq!(timer.frame_time_ms(), 1_000.0);
        assert!((timer.fps() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_timer_reports_zero_fps() {
        let timer = FrameTimer::new(8);
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_range_ms(), (0.0, 0.0));
    }
}
