//! Dynres Runtime
//!
//! Runs the resolution controller against a simulated renderer.
//!
//! Usage: `dynres [settings.json] [frames]`

mod sim;

use anyhow::{Context, Result};
use dynres_core::{ResolutionController, TickOutcome};
use dynres_metrics::FrameTimer;
use dynres_services::{BufferResizeSink, Settings};
use sim::SimulatedGpu;
use tracing_subscriber::EnvFilter;

const DEFAULT_FRAMES: u64 = 600;
/// GPU cost of a native-resolution frame in the simulation.
const SIM_BASE_GPU_MS: f64 = 10.0;
const SIM_CPU_MS: f64 = 6.0;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Dynres v{}", dynres_core::VERSION);

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path).with_context(|| format!("loading settings from {path}"))?,
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(count) => count.parse::<u64>().with_context(|| format!("invalid frame count '{count}'"))?,
        None => DEFAULT_FRAMES,
    };

    let config = settings.resolution.to_config().context("invalid resolution settings")?;
    let initial = settings.resolution.initial_scale();

    let sink = BufferResizeSink::for_current_platform(|w, h| {
        tracing::trace!("resize buffers to {:.3}x{:.3}", w, h);
    });
    tracing::info!(platform = ?sink.platform(), "resolution sink ready");

    let mut controller = ResolutionController::new(config, SimulatedGpu::new(SIM_BASE_GPU_MS, SIM_CPU_MS), sink)?;
    controller.initialize(initial.width, initial.height);

    let mut timer = FrameTimer::new(120);
    let mut warnings = 0usize;
    for _ in 0..frames {
        timer.begin();

        // Render at whatever the buffers were last resized to.
        let (w, h) = controller
            .sink()
            .last_applied()
            .unwrap_or((controller.scale().width, controller.scale().height));
        let timing = controller.source_mut().render(w, h);

        if let TickOutcome::Applied { warning: Some(_), .. } = controller.tick() {
            warnings += 1;
        }
        timer.end(timing.gpu_time_ms);
    }

    controller.shutdown();

    let (min_ms, max_ms) = timer.frame_time_range_ms();
    tracing::info!(
        frames = controller.source().frames_rendered(),
        scale = %controller.scale(),
        apply_warnings = warnings,
        "simulation finished, frame time {:.2}ms (range {:.2}..{:.2}ms)",
        timer.frame_time_ms(),
        min_ms,
        max_ms
    );
    for (name, count) in controller.stats().iter() {
        tracing::info!(counter = name, count, "controller stats");
    }

    // Final scale on stdout for scripts; logs go to stderr.
    println!("{}", serde_json::to_string(&controller.scale()).context("encoding final scale")?);

    Ok(())
}
