//! Ring buffer for rolling frame history

use crate::timing::FrameTiming;

pub struct RingBuffer<T> {
    samples: Vec<T>,
    capacity: usize,
    index: usize,
}

impl<T: Clone> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            index: 0,
        }
    }

    pub fn push(&mut self, sample: T) {
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.index] = sample;
        }
        self.index = (self.index + 1) % self.capacity;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.index = 0;
    }

    /// Iterate from the most recently pushed sample backwards.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &T> + '_ {
        let len = self.samples.len();
        // `index` is the next write slot, so the newest sample sits just before it.
        let newest = (self.index + self.capacity - 1) % self.capacity;
        (0..len).map(move |offset| &self.samples[(newest + len - offset) % len])
    }

    /// Up to `count` newest samples, newest first.
    pub fn latest(&self, count: usize) -> Vec<T> {
        self.iter_newest_first().take(count).cloned().collect()
    }
}

impl RingBuffer<FrameTiming> {
    pub fn average(&self) -> FrameTiming {
        if self.samples.is_empty() {
            return FrameTiming::default();
        }

        let n = self.samples.len() as f64;
        let (gpu, cpu) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(gpu, cpu), t| (gpu + t.gpu_time_ms, cpu + t.cpu_time_ms));
        FrameTiming::new(gpu / n, cpu / n)
    }

    pub fn min_max_frame_time_ms(&self) -> (f64, f64) {
        if self.samples.is_empty() {
            return (0.0, 0.0);
        }

        self.samples
            .iter()
            .map(FrameTiming::frame_time_ms)
            .fold((f64::MAX, f64::MIN), |(min, max), t| (min.min(t), max.max(t)))
    }
}
