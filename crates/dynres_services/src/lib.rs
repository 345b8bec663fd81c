//! Dynres Services Layer
//!
//! Settings on disk and the platform side of applying a render scale.

pub mod settings;
pub mod sink;

pub use settings::{PolicyKind, ResolutionSettings, Settings, SettingsError};
pub use sink::{BufferResizeSink, Platform};
