//! Dynres Metrics - frame timing feed for the resolution controller
//!
//! Holds the timing samples the controller steers by, the provider trait the
//! host implements, and an in-process history that plays that role when the
//! host records frames itself.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable diagnostic counters (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use dynres_metrics::{FrameTimer, FrameTimingHistory, FrameTimingSource};
//!
//! let mut timer = FrameTimer::new(60);
//! let mut history = FrameTimingHistory::new();
//! timer.begin();
//! // ... render ...
//! history.record(timer.end(gpu_ms));
//! history.capture();
//! let newest = history.latest(2);
//! ```
//!
//! Timing collection is always available. Only the diagnostic counters are
//! compiled out without `metrics`.

mod frame_timer;
mod ring_buffer;
mod timing;
#[cfg(feature = "metrics")]
mod counter;

pub use frame_timer::FrameTimer;
pub use ring_buffer::RingBuffer;
pub use timing::{FrameTiming, FrameTimingHistory, FrameTimingSource, DEFAULT_HISTORY_CAPACITY};
#[cfg(feature = "metrics")]
pub use counter::Counter;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct Counter;

#[cfg(not(feature = "metrics"))]
impl Counter {
    pub fn new() -> Self { Self }
    pub fn increment(&mut self, _name: &'static str, _value: usize) {}
    pub fn get(&self, _name: &str) -> usize { 0 }
    pub fn reset_all(&mut self) {}
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ { std::iter::empty() }
}

#[cfg(not(feature = "metrics"))]
impl Default for Counter {
    fn default() -> Self { Self }
}
