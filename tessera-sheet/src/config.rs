//! Configuration surface of a snapping sheet.
//!
//! ## Usage
//!
//! Build [`SheetArgs`] with its setters and hand it to
//! [`SheetController::new`](crate::SheetController::new).

use std::time::Duration;

use derive_setters::Setters;

use crate::error::SheetError;

/// Snap fractions used when none are configured.
pub const DEFAULT_SNAP_POINTS: [f32; 3] = [0.0, 0.4, 0.8];

/// Hold delay applied by [`DragDelay::Enabled`].
pub const DEFAULT_DRAG_DELAY: Duration = Duration::from_millis(180);

/// Whether the gesture source waits for a hold before it takes the drag
/// away from scrolling ancestors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragDelay {
    /// The drag engages immediately.
    #[default]
    Disabled,
    /// The drag engages after [`DEFAULT_DRAG_DELAY`].
    Enabled,
    /// The drag engages after the given number of milliseconds.
    Millis(u64),
}

impl DragDelay {
    /// Resolves the delay the gesture source should apply, if any.
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::Enabled => Some(DEFAULT_DRAG_DELAY),
            Self::Millis(0) => None,
            Self::Millis(ms) => Some(Duration::from_millis(ms)),
        }
    }
}

impl From<bool> for DragDelay {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<u64> for DragDelay {
    fn from(ms: u64) -> Self {
        Self::Millis(ms)
    }
}

/// Arguments for a snapping sheet.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetArgs {
    /// Resting positions as fractions of the viewport height, measured from
    /// the top. `0.0` is fully open. Order does not matter.
    pub snap_points: Vec<f32>,
    /// Fraction the sheet starts at. Defaults to the largest snap point.
    #[setters(skip)]
    pub initial_snap_point: Option<f32>,
    /// Minimum height in pixels that stays visible at the most open resting
    /// position.
    pub min_visible_height: f32,
    /// Hold delay forwarded to the gesture source.
    #[setters(skip)]
    pub drag_delay: DragDelay,
}

impl Default for SheetArgs {
    fn default() -> Self {
        Self {
            snap_points: DEFAULT_SNAP_POINTS.to_vec(),
            initial_snap_point: None,
            min_visible_height: 0.0,
            drag_delay: DragDelay::default(),
        }
    }
}

impl SheetArgs {
    /// Sets the fraction the sheet starts at.
    pub fn initial_snap_point(mut self, fraction: f32) -> Self {
        self.initial_snap_point = Some(fraction);
        self
    }

    /// Sets the hold delay, from a [`DragDelay`], a `bool` toggle, or a
    /// millisecond count.
    pub fn drag_delay(mut self, delay: impl Into<DragDelay>) -> Self {
        self.drag_delay = delay.into();
        self
    }

    /// Checks that every fraction and pixel value is usable.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.snap_points.is_empty() {
            return Err(SheetError::NoSnapPoints);
        }
        if let Some((index, &value)) = self
            .snap_points
            .iter()
            .enumerate()
            .find(|(_, fraction)| !is_fraction(**fraction))
        {
            return Err(SheetError::InvalidSnapPoint { index, value });
        }
        if let Some(initial) = self.initial_snap_point
            && !is_fraction(initial)
        {
            return Err(SheetError::InvalidInitialSnapPoint(initial));
        }
        if !self.min_visible_height.is_finite() || self.min_visible_height < 0.0 {
            return Err(SheetError::InvalidMinVisibleHeight(
                self.min_visible_height,
            ));
        }
        Ok(())
    }

    /// The fraction the sheet rests at before the first gesture.
    pub fn initial_fraction(&self) -> f32 {
        self.initial_snap_point.unwrap_or_else(|| {
            self.snap_points
                .iter()
                .copied()
                .fold(0.0, f32::max)
        })
    }
}

fn is_fraction(value: f32) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_three_stop_sheet() {
        let args = SheetArgs::default();
        assert_eq!(args.snap_points, vec![0.0, 0.4, 0.8]);
        assert_eq!(args.initial_fraction(), 0.8);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn explicit_initial_fraction_wins() {
        let args = SheetArgs::default().initial_snap_point(0.4);
        assert_eq!(args.initial_fraction(), 0.4);
    }

    #[test]
    fn validation_rejects_bad_values() {
        assert_eq!(
            SheetArgs::default().snap_points(vec![]).validate(),
            Err(SheetError::NoSnapPoints)
        );
        assert_eq!(
            SheetArgs::default()
                .snap_points(vec![0.2, 1.5])
                .validate(),
            Err(SheetError::InvalidSnapPoint {
                index: 1,
                value: 1.5
            })
        );
        assert!(matches!(
            SheetArgs::default()
                .snap_points(vec![f32::NAN])
                .validate(),
            Err(SheetError::InvalidSnapPoint { index: 0, .. })
        ));
        assert_eq!(
            SheetArgs::default().initial_snap_point(-0.1).validate(),
            Err(SheetError::InvalidInitialSnapPoint(-0.1))
        );
        assert_eq!(
            SheetArgs::default().min_visible_height(-4.0).validate(),
            Err(SheetError::InvalidMinVisibleHeight(-4.0))
        );
    }

    #[test]
    fn drag_delay_resolution() {
        assert_eq!(DragDelay::Disabled.duration(), None);
        assert_eq!(DragDelay::Enabled.duration(), Some(DEFAULT_DRAG_DELAY));
        assert_eq!(
            DragDelay::Millis(250).duration(),
            Some(Duration::from_millis(250))
        );
        assert_eq!(DragDelay::Millis(0).duration(), None);
        assert_eq!(DragDelay::from(true), DragDelay::Enabled);

        let args = SheetArgs::default().drag_delay(400u64);
        assert_eq!(args.drag_delay, DragDelay::Millis(400));
    }
}
