//! Settings management

use dynres_core::config::{
    DEFAULT_HYSTERESIS_MS, DEFAULT_SWEEP_INTERVAL_FRAMES, DEFAULT_TARGET_FRAME_MS, DEFAULT_WARMUP_FRAMES,
};
use dynres_core::{ConfigError, ControllerConfig, Policy, ScaleBounds, ScaleState, StepSize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid resolution settings: {0}")]
    Config(#[from] ConfigError),
}

/// Engine settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub resolution: ResolutionSettings,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), policy = ?settings.resolution.policy, "loaded settings");
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    TimingDriven,
    DemoSweep,
}

/// On-disk form of the controller configuration. Missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionSettings {
    pub min_width_scale: f32,
    pub max_width_scale: f32,
    pub min_height_scale: f32,
    pub max_height_scale: f32,
    pub width_step: f32,
    pub height_step: f32,
    pub target_frame_ms: f64,
    pub hysteresis_ms: f64,
    pub warmup_frames: u32,
    pub policy: PolicyKind,
    pub sweep_interval_frames: u32,
    /// Scale the renderer starts at.
    pub initial_scale: f32,
}

impl ResolutionSettings {
    pub fn to_config(&self) -> Result<ControllerConfig, ConfigError> {
        let bounds = ScaleBounds::new(
            self.min_width_scale,
            self.max_width_scale,
            self.min_height_scale,
            self.max_height_scale,
        )?;
        let step = StepSize::new(self.width_step, self.height_step)?;
        let policy = match self.policy {
            PolicyKind::TimingDriven => Policy::TimingDriven,
            PolicyKind::DemoSweep => Policy::DemoSweep {
                interval_frames: self.sweep_interval_frames,
            },
        };

        let config = ControllerConfig {
            bounds,
            step,
            target_frame_ms: self.target_frame_ms,
            hysteresis_ms: self.hysteresis_ms,
            warmup_frames: self.warmup_frames,
            policy,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn initial_scale(&self) -> ScaleState {
        ScaleState::uniform(self.initial_scale)
    }
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        Self {
            min_width_scale: 0.5,
            max_width_scale: 1.5,
            min_height_scale: 0.5,
            max_height_scale: 1.5,
            width_step: 0.25,
            height_step: 0.25,
            target_frame_ms: DEFAULT_TARGET_FRAME_MS,
            hysteresis_ms: DEFAULT_HYSTERESIS_MS,
            warmup_frames: DEFAULT_WARMUP_FRAMES,
            policy: PolicyKind::TimingDriven,
            sweep_interval_frames: DEFAULT_SWEEP_INTERVAL_FRAMES,
            initial_scale: 1.0,
        }
    }
}
