// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for user-tunable settings.

/// Default length of one radar animation sweep, in seconds.
pub const DEFAULT_RADAR_DURATION_SECS: f32 = 8.0;

/// Shortest selectable radar sweep.
pub const MIN_RADAR_DURATION_SECS: f32 = 2.0;

/// Longest selectable radar sweep.
pub const MAX_RADAR_DURATION_SECS: f32 = 15.0;

/// Slider step for the radar sweep duration.
pub const RADAR_DURATION_STEP_SECS: f32 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radar_duration_bounds_are_consistent() {
        assert!(MIN_RADAR_DURATION_SECS < MAX_RADAR_DURATION_SECS);
        assert!(DEFAULT_RADAR_DURATION_SECS >= MIN_RADAR_DURATION_SECS);
        assert!(DEFAULT_RADAR_DURATION_SECS <= MAX_RADAR_DURATION_SECS);
        assert!(RADAR_DURATION_STEP_SECS > 0.0);
    }
}
