// SPDX-License-Identifier: MPL-2.0
//! Editable speed curve driving the radar animation.
//!
//! The curve maps normalized sweep time to a speed factor. Easing raises the
//! raw progress to a power derived from the local speed, so speeds above 1.0
//! accelerate the sweep and speeds below 1.0 hold it back.

/// Lowest allowed speed factor.
pub const MIN_SPEED: f32 = 0.0;
/// Highest allowed speed factor.
pub const MAX_SPEED: f32 = 2.0;
/// A curve is always at least a segment.
pub const MIN_POINTS: usize = 2;

/// A single control point: `time` is the normalized sweep position, `speed`
/// the factor applied there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedPoint {
    pub time: f32,
    pub speed: f32,
}

impl SpeedPoint {
    #[must_use]
    pub fn new(time: f32, speed: f32) -> Self {
        Self {
            time: time.clamp(0.0, 1.0),
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }
}

/// Ready-made curves selectable from the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Smooth,
    Dramatic,
    Linear,
    Bounce,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Smooth,
        Preset::Dramatic,
        Preset::Linear,
        Preset::Bounce,
    ];

    /// Fluent key for the preset button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Preset::Smooth => "stats-preset-smooth",
            Preset::Dramatic => "stats-preset-dramatic",
            Preset::Linear => "stats-preset-linear",
            Preset::Bounce => "stats-preset-bounce",
        }
    }

    #[must_use]
    pub fn points(self) -> Vec<SpeedPoint> {
        let raw: &[(f32, f32)] = match self {
            Preset::Smooth => &[(0.0, 0.1), (0.5, 1.0), (1.0, 0.1)],
            Preset::Dramatic => &[(0.0, 0.05), (0.3, 0.2), (0.7, 2.0), (1.0, 0.05)],
            Preset::Linear => &[(0.0, 1.0), (1.0, 1.0)],
            Preset::Bounce => &[
                (0.0, 0.1),
                (0.2, 1.5),
                (0.4, 0.3),
                (0.6, 1.8),
                (0.8, 0.2),
                (1.0, 0.1),
            ],
        };
        raw.iter().map(|&(t, s)| SpeedPoint::new(t, s)).collect()
    }
}

/// A piecewise-linear speed profile over the normalized sweep.
///
/// Invariants: points stay sorted by time, and there are never fewer than
/// [`MIN_POINTS`] of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedCurve {
    points: Vec<SpeedPoint>,
}

impl Default for SpeedCurve {
    /// Slow start, fast middle, slow finish.
    fn default() -> Self {
        Self {
            points: vec![
                SpeedPoint::new(0.0, 0.2),
                SpeedPoint::new(0.25, 0.6),
                SpeedPoint::new(0.5, 1.5),
                SpeedPoint::new(0.75, 0.8),
                SpeedPoint::new(1.0, 0.3),
            ],
        }
    }
}

impl SpeedCurve {
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            points: preset.points(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[SpeedPoint] {
        &self.points
    }

    /// Speed factor at normalized time `t`, linearly interpolated between the
    /// surrounding control points. Outside the curve's span the nearest
    /// endpoint's speed applies.
    #[must_use]
    pub fn speed_at(&self, t: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if t <= first.time {
            return first.speed;
        }
        if t >= last.time {
            return last.speed;
        }

        for pair in self.points.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            if t >= start.time && t <= end.time {
                let span = end.time - start.time;
                if span <= f32::EPSILON {
                    return start.speed;
                }
                let local = (t - start.time) / span;
                return start.speed + (end.speed - start.speed) * local;
            }
        }

        last.speed
    }

    /// Eased progress: `t ^ (2 - speed_at(t))`.
    ///
    /// A speed of 1.0 leaves progress linear, higher speeds push it ahead,
    /// lower speeds hold it back.
    #[must_use]
    pub fn eased(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        t.powf(2.0 - self.speed_at(t))
    }

    /// Inserts a control point, keeping the curve sorted. Returns the index
    /// the point landed at.
    pub fn add_point(&mut self, time: f32, speed: f32) -> usize {
        self.insert(SpeedPoint::new(time, speed))
    }

    /// Moves a control point to a new position. The curve is re-sorted, so
    /// the point's index may change; the new index is returned.
    pub fn move_point(&mut self, index: usize, time: f32, speed: f32) -> Option<usize> {
        if index >= self.points.len() {
            return None;
        }
        self.points.remove(index);
        Some(self.insert(SpeedPoint::new(time, speed)))
    }

    /// Removes a control point unless that would leave fewer than
    /// [`MIN_POINTS`]. Returns whether the removal happened.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if self.points.len() <= MIN_POINTS || index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }

    fn insert(&mut self, point: SpeedPoint) -> usize {
        let index = self.points.partition_point(|p| p.time <= point.time);
        self.points.insert(index, point);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(curve: &SpeedCurve) {
        for pair in curve.points().windows(2) {
            assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn default_curve_has_five_points_and_is_sorted() {
        let curve = SpeedCurve::default();
        assert_eq!(curve.points().len(), 5);
        assert_sorted(&curve);
    }

    #[test]
    fn new_point_clamps_into_range() {
        let point = SpeedPoint::new(1.7, -0.5);
        assert_eq!(point.time, 1.0);
        assert_eq!(point.speed, MIN_SPEED);

        let point = SpeedPoint::new(-0.1, 9.0);
        assert_eq!(point.time, 0.0);
        assert_eq!(point.speed, MAX_SPEED);
    }

    #[test]
    fn speed_at_interpolates_linearly() {
        let curve = SpeedCurve::from_preset(Preset::Smooth);
        // Halfway between (0.0, 0.1) and (0.5, 1.0).
        let speed = curve.speed_at(0.25);
        assert!((speed - 0.55).abs() < 1e-5, "got {speed}");
    }

    #[test]
    fn speed_at_clamps_to_endpoints() {
        let curve = SpeedCurve::default();
        assert_eq!(curve.speed_at(-1.0), curve.points()[0].speed);
        assert_eq!(curve.speed_at(2.0), curve.points()[4].speed);
    }

    #[test]
    fn linear_preset_leaves_progress_unchanged() {
        let curve = SpeedCurve::from_preset(Preset::Linear);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!((curve.eased(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn eased_is_bounded() {
        for preset in Preset::ALL {
            let curve = SpeedCurve::from_preset(preset);
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let eased = curve.eased(t);
                assert!((0.0..=1.0).contains(&eased), "{preset:?} at {t}: {eased}");
            }
        }
    }

    #[test]
    fn full_sweep_reaches_the_end() {
        for preset in Preset::ALL {
            let curve = SpeedCurve::from_preset(preset);
            assert!((curve.eased(1.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn add_point_keeps_order_and_reports_index() {
        let mut curve = SpeedCurve::from_preset(Preset::Linear);
        let index = curve.add_point(0.5, 1.2);
        assert_eq!(index, 1);
        assert_eq!(curve.points().len(), 3);
        assert_sorted(&curve);
    }

    #[test]
    fn move_point_resorts_and_returns_new_index() {
        let mut curve = SpeedCurve::default();
        // Drag the second point past the midpoint.
        let new_index = curve.move_point(1, 0.6, 1.0).expect("valid index");
        assert_eq!(new_index, 2);
        assert_sorted(&curve);
        assert_eq!(curve.points().len(), 5);
    }

    #[test]
    fn move_point_rejects_out_of_range_index() {
        let mut curve = SpeedCurve::default();
        assert_eq!(curve.move_point(99, 0.5, 1.0), None);
    }

    #[test]
    fn remove_point_stops_at_minimum() {
        let mut curve = SpeedCurve::from_preset(Preset::Smooth);
        assert!(curve.remove_point(1));
        assert_eq!(curve.points().len(), 2);
        assert!(!curve.remove_point(0));
        assert_eq!(curve.points().len(), 2);
    }

    #[test]
    fn presets_all_satisfy_invariants() {
        for preset in Preset::ALL {
            let curve = SpeedCurve::from_preset(preset);
            assert!(curve.points().len() >= MIN_POINTS);
            assert_sorted(&curve);
            for point in curve.points() {
                assert!((0.0..=1.0).contains(&point.time));
                assert!((MIN_SPEED..=MAX_SPEED).contains(&point.speed));
            }
        }
    }
}
