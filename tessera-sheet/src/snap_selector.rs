//! Choice of the resting point on release.

use crate::snap_points::SnapPoints;

/// Returns the snap offset nearest to `offset`.
///
/// Points are scanned in ascending order and a candidate only replaces the
/// current best on a strictly smaller distance, so on a tie the lower offset
/// wins. Velocity is not considered here; it only shapes the animator's
/// transition.
///
/// The scan is seeded with the first point rather than a `(height, height)`
/// sentinel baseline. Ties resolve the same way, but the result is always a
/// member of `points`, even when every point is farther than the viewport
/// height from `offset`.
pub fn select_nearest(offset: f32, points: &SnapPoints) -> f32 {
    let mut best = points.first();
    let mut best_distance = (best - offset).abs();
    for &point in points.iter().skip(1) {
        let distance = (point - offset).abs();
        if distance < best_distance {
            best = point;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(offsets: &[f32]) -> SnapPoints {
        SnapPoints::resolve(offsets, 1.0)
    }

    #[test]
    fn ties_keep_the_earlier_point() {
        let points = points(&[0.0, 100.0, 200.0]);
        assert_eq!(select_nearest(150.0, &points), 100.0);
        assert_eq!(select_nearest(50.0, &points), 0.0);
    }

    #[test]
    fn picks_the_closest_point() {
        let points = SnapPoints::resolve(&[0.0, 0.4, 0.8], 800.0);
        assert_eq!(select_nearest(300.0, &points), 320.0);
        assert_eq!(select_nearest(-90.0, &points), 0.0);
        assert_eq!(select_nearest(500.0, &points), 640.0);
    }

    #[test]
    fn offsets_far_past_the_viewport_still_land_on_a_point() {
        let points = SnapPoints::resolve(&[0.0, 0.4, 0.8], 800.0);
        assert_eq!(select_nearest(2400.0, &points), 640.0);
        assert_eq!(select_nearest(-5000.0, &points), 0.0);
    }

    #[test]
    fn single_point_always_wins() {
        let points = points(&[42.0]);
        assert_eq!(select_nearest(-1000.0, &points), 42.0);
    }
}
