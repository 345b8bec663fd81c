use dynres_core::dynres_metrics::{FrameTiming, FrameTimingHistory};
use dynres_core::{
    ApplyWarning, ControllerConfig, Decision, Policy, ResolutionController, ResolutionSink, ScaleBounds,
    ScaleState, StepSize, TickOutcome,
};

const BUDGET_MS: f64 = 16.0;
const OVER: FrameTiming = FrameTiming::new(24.0, 6.0);
const UNDER: FrameTiming = FrameTiming::new(8.0, 6.0);

#[derive(Default)]
struct RecordingSink {
    calls: Vec<(f32, f32)>,
}

impl ResolutionSink for RecordingSink {
    fn apply(&mut self, width_scale: f32, height_scale: f32) -> Result<(), ApplyWarning> {
        self.calls.push((width_scale, height_scale));
        Ok(())
    }
}

type Controller = ResolutionController<FrameTimingHistory, RecordingSink>;

fn config() -> ControllerConfig {
    ControllerConfig {
        bounds: ScaleBounds::uniform(0.5, 1.5).unwrap(),
        step: StepSize::uniform(0.25).unwrap(),
        target_frame_ms: BUDGET_MS,
        hysteresis_ms: 2.0,
        warmup_frames: 2,
        policy: Policy::TimingDriven,
    }
}

fn controller(initial: f32) -> Controller {
    let mut controller =
        ResolutionController::new(config(), FrameTimingHistory::new(), RecordingSink::default()).unwrap();
    controller.initialize(initial, initial);
    controller
}

/// Record the frame that just finished, then tick.
fn frame(controller: &mut Controller, timing: FrameTiming) -> TickOutcome {
    controller.source_mut().record(timing);
    controller.tick()
}

#[test]
fn over_budget_walks_down_to_floor_and_stops() {
    let mut c = controller(1.0);

    assert_eq!(frame(&mut c, OVER), TickOutcome::WarmingUp { frame: 1 });
    assert_eq!(frame(&mut c, OVER), TickOutcome::WarmingUp { frame: 2 });
    assert!(c.sink().calls.is_empty());

    assert_eq!(
        frame(&mut c, OVER),
        TickOutcome::Applied {
            scale: ScaleState::uniform(0.75),
            decision: Decision::Decrease,
            warning: None,
        }
    );
    assert_eq!(frame(&mut c, OVER).applied_scale(), Some(ScaleState::uniform(0.5)));
    assert_eq!(
        frame(&mut c, OVER),
        TickOutcome::Held {
            decision: Decision::Decrease
        }
    );

    assert_eq!(c.scale(), ScaleState::uniform(0.5));
    assert_eq!(c.sink().calls, vec![(0.75, 0.75), (0.5, 0.5)]);
}

#[test]
fn under_budget_walks_up_to_ceiling_and_stops() {
    let mut c = controller(1.0);
    let mut widths = vec![c.scale().width];

    for _ in 0..6 {
        frame(&mut c, UNDER);
        widths.push(c.scale().width);
    }

    assert_eq!(widths, vec![1.0, 1.0, 1.0, 1.25, 1.5, 1.5, 1.5]);
    assert_eq!(c.sink().calls, vec![(1.25, 1.25), (1.5, 1.5)]);
}

#[test]
fn sustained_overload_converges_exactly_to_min() {
    let mut c = controller(1.5);
    for _ in 0..20 {
        frame(&mut c, OVER);
    }

    assert_eq!(c.scale(), ScaleState::uniform(0.5));
    assert_eq!(c.sink().calls.len(), 4);
    assert_eq!(c.sink().calls.last(), Some(&(0.5, 0.5)));
}

#[test]
fn up_then_down_returns_to_start() {
    let mut c = controller(1.0);
    frame(&mut c, UNDER);
    frame(&mut c, UNDER);

    frame(&mut c, UNDER);
    frame(&mut c, UNDER);
    assert_eq!(c.scale(), ScaleState::uniform(1.5));

    frame(&mut c, OVER);
    frame(&mut c, OVER);
    assert_eq!(c.scale(), ScaleState::uniform(1.0));
}

#[test]
fn up_then_down_returns_exactly_for_any_step() {
    for step in [0.1, 0.2, 0.3, 0.05] {
        for initial in [0.7, 0.9, 1.1] {
            let config = ControllerConfig {
                bounds: ScaleBounds::uniform(0.1, 3.0).unwrap(),
                step: StepSize::uniform(step).unwrap(),
                ..config()
            };
            let mut c = ResolutionController::new(config, FrameTimingHistory::new(), RecordingSink::default()).unwrap();
            c.initialize(initial, initial);
            frame(&mut c, UNDER);
            frame(&mut c, UNDER);

            for _ in 0..4 {
                frame(&mut c, UNDER);
            }
            for _ in 0..4 {
                frame(&mut c, OVER);
            }
            assert_eq!(c.scale(), ScaleState::uniform(initial), "step {step} from {initial}");
            assert_eq!(c.sink().calls.len(), 8);
            assert_eq!(c.sink().calls.last(), Some(&(initial, initial)));
        }
    }
}

#[test]
fn short_history_skips_without_change() {
    let mut c = controller(1.0);
    c.tick();
    c.tick();

    assert_eq!(
        c.tick(),
        TickOutcome::InsufficientData {
            available: 0,
            required: 2
        }
    );
    assert_eq!(
        frame(&mut c, OVER),
        TickOutcome::InsufficientData {
            available: 1,
            required: 2
        }
    );
    assert_eq!(c.scale(), ScaleState::uniform(1.0));
    assert!(c.sink().calls.is_empty());

    assert_eq!(frame(&mut c, OVER).applied_scale(), Some(ScaleState::uniform(0.75)));
}

#[test]
fn newest_sample_decides() {
    let mut c = controller(1.0);
    c.tick();
    c.tick();

    c.source_mut().record(OVER);
    c.source_mut().record(UNDER);
    assert_eq!(c.tick().applied_scale(), Some(ScaleState::uniform(1.25)));
}

#[test]
fn scale_never_leaves_bounds() {
    let config = ControllerConfig {
        bounds: ScaleBounds::new(0.3, 1.2, 0.6, 1.0).unwrap(),
        step: StepSize::new(0.35, 0.15).unwrap(),
        ..config()
    };
    let mut c = ResolutionController::new(config, FrameTimingHistory::new(), RecordingSink::default()).unwrap();
    c.initialize(1.0, 1.0);

    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let gpu_ms = f64::from(seed >> 16) / 65_536.0 * 32.0;
        frame(&mut c, FrameTiming::new(gpu_ms, 4.0));
        assert!(config.bounds.contains(c.scale()), "{} escaped bounds", c.scale());
    }

    for &(w, h) in &c.sink().calls {
        assert!(config.bounds.contains(ScaleState::new(w, h)));
    }
}

#[test]
fn controllers_are_independent() {
    let mut a = controller(1.0);
    let mut b = controller(1.0);

    for _ in 0..4 {
        frame(&mut a, OVER);
        frame(&mut b, UNDER);
    }

    assert_eq!(a.scale(), ScaleState::uniform(0.5));
    assert_eq!(b.scale(), ScaleState::uniform(1.5));
}

#[cfg(feature = "metrics")]
#[test]
fn counters_track_outcomes() {
    let mut c = controller(1.0);
    for _ in 0..6 {
        frame(&mut c, OVER);
    }

    assert_eq!(c.stats().get("decrease"), 2);
    assert_eq!(c.stats().get("hold"), 2);
    assert_eq!(c.stats().get("increase"), 0);
}
