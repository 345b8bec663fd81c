use crate::error::ApplyWarning;

/// Receives every scale change the controller commits.
///
/// Implementations resize render targets or the viewport. A returned
/// warning is logged and surfaced from the tick; it never rolls the scale
/// back or stops the controller.
pub trait ResolutionSink {
    fn apply(&mut self, width_scale: f32, height_scale: f32) -> Result<(), ApplyWarning>;
}

impl<F> ResolutionSink for F
where
    F: FnMut(f32, f32) -> Result<(), ApplyWarning>,
{
    fn apply(&mut self, width_scale: f32, height_scale: f32) -> Result<(), ApplyWarning> {
        self(width_scale, height_scale)
    }
}
