//! Timing-driven step decision

use dynres_metrics::FrameTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Increase,
    Decrease,
    Hold,
}

impl Decision {
    pub fn name(&self) -> &'static str {
        match self {
            Decision::Increase => "increase",
            Decision::Decrease => "decrease",
            Decision::Hold => "hold",
        }
    }
}

/// Pick a direction from the newest frame's bottleneck time.
///
/// Over budget lowers resolution. Under `target_ms - hysteresis_ms` raises
/// it. Anything between holds.
pub fn decide(timing: FrameTiming, target_ms: f64, hysteresis_ms: f64) -> Decision {
    let frame_ms = timing.frame_time_ms();
    if frame_ms > target_ms {
        Decision::Decrease
    } else if frame_ms < target_ms - hysteresis_ms {
        Decision::Increase
    } else {
        Decision::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: f64 = 16.0;
    const BAND: f64 = 2.0;

    #[test]
    fn over_budget_decreases() {
        assert_eq!(decide(FrameTiming::new(16.5, 4.0), TARGET, BAND), Decision::Decrease);
        // CPU bound frames count too
        assert_eq!(decide(FrameTiming::new(4.0, 20.0), TARGET, BAND), Decision::Decrease);
    }

    #[test]
    fn comfortably_under_budget_increases() {
        assert_eq!(decide(FrameTiming::new(10.0, 9.0), TARGET, BAND), Decision::Increase);
    }

    #[test]
    fn inside_band_holds() {
        assert_eq!(decide(FrameTiming::new(14.0, 3.0), TARGET, BAND), Decision::Hold);
        assert_eq!(decide(FrameTiming::new(15.0, 3.0), TARGET, BAND), Decision::Hold);
        assert_eq!(decide(FrameTiming::new(16.0, 3.0), TARGET, BAND), Decision::Hold);
    }

    #[test]
    fn zero_band_never_holds_below_budget() {
        assert_eq!(decide(FrameTiming::new(15.9, 0.0), TARGET, 0.0), Decision::Increase);
        assert_eq!(decide(FrameTiming::new(16.0, 0.0), TARGET, 0.0), Decision::Hold);
    }
}
