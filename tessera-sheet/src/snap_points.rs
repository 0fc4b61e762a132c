//! Resolution of fractional snap configuration into pixel offsets.
//!
//! Snap points are stored as offsets from the top of the viewport: `0.0` is
//! fully open, larger values hide more of the sheet. They must be resolved
//! again every time the fraction set or the viewport height changes.

use std::ops::Deref;

use smallvec::SmallVec;
use tracing::warn;

use crate::config::DEFAULT_SNAP_POINTS;

/// Ascending pixel offsets the sheet may rest at.
///
/// Always holds at least one element. Duplicate fractions are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPoints {
    offsets: SmallVec<[f32; 4]>,
}

impl SnapPoints {
    /// Converts `fractions` of `height` into ascending pixel offsets.
    ///
    /// An empty fraction set falls back to the default three-stop layout so
    /// the result is never empty.
    pub fn resolve(fractions: &[f32], height: f32) -> Self {
        let fractions = if fractions.is_empty() {
            warn!("No snap fractions configured; using {DEFAULT_SNAP_POINTS:?}");
            &DEFAULT_SNAP_POINTS[..]
        } else {
            fractions
        };

        let mut offsets: SmallVec<[f32; 4]> =
            fractions.iter().map(|fraction| fraction * height).collect();
        offsets.sort_by(f32::total_cmp);
        Self { offsets }
    }

    /// Offsets in ascending order.
    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }

    /// Smallest offset (the most open resting position).
    pub fn first(&self) -> f32 {
        self.offsets[0]
    }

    /// Largest offset (the most hidden resting position).
    pub fn largest(&self) -> f32 {
        self.offsets[self.offsets.len() - 1]
    }

    /// Whether `offset` is exactly one of the resting positions.
    pub fn contains(&self, offset: f32) -> bool {
        self.offsets.iter().any(|point| *point == offset)
    }
}

impl Deref for SnapPoints {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn resolves_and_sorts() {
        let points = SnapPoints::resolve(&[0.8, 0.0, 0.4], 800.0);
        assert_eq!(points.as_slice(), &[0.0, 320.0, 640.0]);
        assert_eq!(points.first(), 0.0);
        assert_eq!(points.largest(), 640.0);
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let points = SnapPoints::resolve(&[0.25, 1.0, 0.125], 100.0);
        assert_eq!(points.as_slice(), &[12.5, 25.0, 100.0]);
    }

    #[test]
    fn duplicates_are_kept() {
        let points = SnapPoints::resolve(&[0.5, 0.5], 200.0);
        assert_eq!(points.as_slice(), &[100.0, 100.0]);
    }

    #[test]
    fn empty_fractions_fall_back_to_defaults() {
        let points = SnapPoints::resolve(&[], 800.0);
        assert_eq!(points.as_slice(), &[0.0, 320.0, 640.0]);
    }

    #[test]
    fn recomputes_against_new_height() {
        let fractions = [0.0, 0.4, 0.8];
        let before = SnapPoints::resolve(&fractions, 800.0);
        let after = SnapPoints::resolve(&fractions, 600.0);
        assert_ne!(before, after);
        assert_eq!(after.as_slice(), &[0.0, 240.0, 480.0]);
        assert!(after.contains(240.0));
        assert!(!after.contains(320.0));
    }

    proptest! {
        #[test]
        fn resolved_offsets_are_non_decreasing(
            fractions in prop::collection::vec(0.0f32..=1.0, 1..12),
            height in 0.0f32..4000.0,
        ) {
            let points = SnapPoints::resolve(&fractions, height);
            prop_assert_eq!(points.len(), fractions.len());
            prop_assert!(points.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}
