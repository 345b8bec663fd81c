//! Frame timing samples and the provider contract

use crate::ring_buffer::RingBuffer;

/// Default number of captured frames kept by [`FrameTimingHistory`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

/// Measured cost of one finished frame, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTiming {
    pub gpu_time_ms: f64,
    pub cpu_time_ms: f64,
}

impl FrameTiming {
    pub const fn new(gpu_time_ms: f64, cpu_time_ms: f64) -> Self {
        Self {
            gpu_time_ms,
            cpu_time_ms,
        }
    }

    /// Time of the slower of the two pipelines.
    ///
    /// Platforms without GPU timing report `0.0` there, which leaves the CPU
    /// time in charge.
    pub fn frame_time_ms(&self) -> f64 {
        self.gpu_time_ms.max(self.cpu_time_ms)
    }
}

/// Supplies recent frame timings to the resolution controller.
///
/// Both calls happen on the render thread once per tick and must not block.
pub trait FrameTimingSource {
    /// Snapshot whatever timing state the platform has accumulated.
    /// May be a no-op where the platform has nothing to capture.
    fn capture(&mut self);

    /// The most recent `count` samples, newest first. Returns fewer when
    /// history is short; callers check the length.
    fn latest(&self, count: usize) -> Vec<FrameTiming>;
}

impl<S: FrameTimingSource + ?Sized> FrameTimingSource for &mut S {
    fn capture(&mut self) {
        (**self).capture();
    }

    fn latest(&self, count: usize) -> Vec<FrameTiming> {
        (**self).latest(count)
    }
}

impl<S: FrameTimingSource + ?Sized> FrameTimingSource for Box<S> {
    fn capture(&mut self) {
        (**self).capture();
    }

    fn latest(&self, count: usize) -> Vec<FrameTiming> {
        (**self).latest(count)
    }
}

/// In-process timing provider.
///
/// Finished frames are queued by [`record`](Self::record) and only become
/// visible to [`latest`](FrameTimingSource::latest) after the next
/// [`capture`](FrameTimingSource::capture).
pub struct FrameTimingHistory {
    pending: Vec<FrameTiming>,
    captured: RingBuffer<FrameTiming>,
}

impl FrameTimingHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::new(),
            captured: RingBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, timing: FrameTiming) {
        self.pending.push(timing);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn captured_len(&self) -> usize {
        self.captured.len()
    }

    pub fn average(&self) -> FrameTiming {
        self.captured.average()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.captured.clear();
    }
}

impl Default for FrameTimingHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimingSource for FrameTimingHistory {
    fn capture(&mut self) {
        for timing in self.pending.drain(..) {
            self.captured.push(timing);
        }
    }

    fn latest(&self, count: usize) -> Vec<FrameTiming> {
        self.captured.latest(count)
    }
}
