//! Resistance applied when the sheet is dragged past its fully open bound.
//!
//! Above the open bound (`offset < 0`) the sheet follows a hyperbolic curve
//! `y / (1 - y * 0.005)` that approaches `-200` instead of tracking the finger
//! 1:1. Past [`CANCEL_THRESHOLD`] the drag is cancelled and the sheet settles
//! back open.

/// Damping coefficient of the overdrag curve.
pub const FRICTION_COEFFICIENT: f32 = 0.005;

/// Friction-adjusted offset below which the drag is cancelled.
pub const CANCEL_THRESHOLD: f32 = -120.0;

/// Lowest offset an intermediate drag frame may write.
pub const MIN_DRAG_OFFSET: f32 = -200.0;

/// Friction and clamping rules for one viewport/snap layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionModel {
    max_offset: f32,
}

impl FrictionModel {
    /// Builds the model for a viewport of `height` pixels whose most hidden
    /// snap offset is `largest_snap_offset`.
    ///
    /// The upper clamp is `height - max(min_visible_height, height -
    /// largest_snap_offset)`.
    pub fn new(height: f32, largest_snap_offset: f32, min_visible_height: f32) -> Self {
        let safe_area = min_visible_height.max(height - largest_snap_offset);
        Self {
            max_offset: height - safe_area,
        }
    }

    /// Applies overdrag resistance to a raw offset.
    pub fn apply(raw: f32) -> f32 {
        if raw < 0.0 {
            raw / (1.0 - raw * FRICTION_COEFFICIENT)
        } else {
            raw
        }
    }

    /// Whether an adjusted offset has crossed the cancellation threshold.
    pub fn should_cancel(adjusted: f32) -> bool {
        adjusted < CANCEL_THRESHOLD
    }

    /// Upper bound for intermediate drag frames.
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Clamps an intermediate drag frame into `[MIN_DRAG_OFFSET, max_offset]`.
    ///
    /// Release offsets are never clamped; they snap to a discrete point.
    pub fn clamp(&self, offset: f32) -> f32 {
        // A degenerate layout can put the upper bound under the lower one.
        offset.max(MIN_DRAG_OFFSET).min(self.max_offset.max(MIN_DRAG_OFFSET))
    }
}
