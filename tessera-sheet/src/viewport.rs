//! Viewport size injected into the controller.

use crate::error::SheetError;

/// Anything that can report the current viewport height in pixels.
///
/// Hosts implement this over their window or surface size and let the
/// controller poll it through
/// [`SheetController::poll_viewport`](crate::SheetController::poll_viewport).
pub trait ViewportSource {
    /// Current viewport height in pixels.
    fn height(&self) -> f32;
}

impl<F> ViewportSource for F
where
    F: Fn() -> f32,
{
    fn height(&self) -> f32 {
        self()
    }
}

/// Snapshot of the viewport, replaced wholesale on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Viewport height in pixels.
    pub height: f32,
}

impl ViewportState {
    /// Creates a viewport snapshot.
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    /// Reads a snapshot from a [`ViewportSource`].
    pub fn from_source(source: &impl ViewportSource) -> Self {
        Self::new(source.height())
    }

    pub(crate) fn validated(self) -> Result<Self, SheetError> {
        if self.height.is_finite() && self.height >= 0.0 {
            Ok(self)
        } else {
            Err(SheetError::InvalidViewportHeight(self.height))
        }
    }
}

impl ViewportSource for ViewportState {
    fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_sources() {
        let source = || 720.0;
        assert_eq!(ViewportState::from_source(&source), ViewportState::new(720.0));
    }

    #[test]
    fn rejects_unusable_heights() {
        assert!(ViewportState::new(0.0).validated().is_ok());
        assert_eq!(
            ViewportState::new(-1.0).validated(),
            Err(SheetError::InvalidViewportHeight(-1.0))
        );
        assert!(ViewportState::new(f32::INFINITY).validated().is_err());
    }
}
