//! Platform resolution sink
//!
//! Desktop and editor builds never supersample through buffer resizing, so
//! scales above 1.0 are capped there. Devices take the scale as given.

use dynres_core::{ApplyWarning, ResolutionSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    Device,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Platform::Device
        } else {
            Platform::Desktop
        }
    }

    /// Largest scale the platform's buffer resize accepts per axis.
    pub fn max_buffer_scale(&self) -> Option<f32> {
        match self {
            Platform::Desktop => Some(1.0),
            Platform::Device => None,
        }
    }
}

/// Forwards scale changes to the renderer's buffer resize call.
pub struct BufferResizeSink<F> {
    platform: Platform,
    resize: F,
    last_applied: Option<(f32, f32)>,
}

impl<F> BufferResizeSink<F>
where
    F: FnMut(f32, f32),
{
    pub fn new(platform: Platform, resize: F) -> Self {
        Self {
            platform,
            resize,
            last_applied: None,
        }
    }

    pub fn for_current_platform(resize: F) -> Self {
        Self::new(Platform::current(), resize)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Scale most recently handed to the resize call, after capping.
    pub fn last_applied(&self) -> Option<(f32, f32)> {
        self.last_applied
    }
}

impl<F> ResolutionSink for BufferResizeSink<F>
where
    F: FnMut(f32, f32),
{
    fn apply(&mut self, width_scale: f32, height_scale: f32) -> Result<(), ApplyWarning> {
        let requested = (width_scale, height_scale);
        let applied = match self.platform.max_buffer_scale() {
            Some(cap) => (width_scale.min(cap), height_scale.min(cap)),
            None => requested,
        };

        (self.resize)(applied.0, applied.1);
        self.last_applied = Some(applied);
        tracing::debug!(platform = ?self.platform, "render scale: {:.3}x{:.3}", applied.0, applied.1);

        if applied != requested {
            return Err(ApplyWarning::Capped { requested, applied });
        }
        Ok(())
    }
}
