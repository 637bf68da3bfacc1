// SPDX-License-Identifier: MPL-2.0
//! Ping-pong sweep animator for the radar chart.
//!
//! One sweep runs eased progress from 0 to 1 over the configured duration,
//! then flips direction. Most channels fill up on the forward sweep; the
//! relationship channel runs inverted, draining while the others fill.

use super::curve::{Preset, SpeedCurve};
use crate::config::{MAX_RADAR_DURATION_SECS, MIN_RADAR_DURATION_SECS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Delay before the first sweep starts, giving the page time to settle.
pub const INITIAL_DELAY: Duration = Duration::from_millis(500);

/// The six radar channels, in display order (60° apart, starting at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Physical,
    Relationship,
    Discipline,
    Mental,
    Intellect,
    Ambition,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Physical,
        Channel::Relationship,
        Channel::Discipline,
        Channel::Mental,
        Channel::Intellect,
        Channel::Ambition,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Channel::Physical => "stats-channel-physical",
            Channel::Relationship => "stats-channel-relationship",
            Channel::Discipline => "stats-channel-discipline",
            Channel::Mental => "stats-channel-mental",
            Channel::Intellect => "stats-channel-intellect",
            Channel::Ambition => "stats-channel-ambition",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Channel::Physical => palette::RADAR_PHYSICAL,
            Channel::Relationship => palette::RADAR_RELATIONSHIP,
            Channel::Discipline => palette::RADAR_DISCIPLINE,
            Channel::Mental => palette::RADAR_MENTAL,
            Channel::Intellect => palette::RADAR_INTELLECT,
            Channel::Ambition => palette::RADAR_AMBITION,
        }
    }

    /// The relationship channel moves against the others.
    #[must_use]
    pub fn is_inverted(self) -> bool {
        matches!(self, Channel::Relationship)
    }
}

/// Drives the sweep and owns the curve it is eased by.
#[derive(Debug, Clone)]
pub struct Animator {
    curve: SpeedCurve,
    selected_preset: Option<Preset>,
    duration_secs: f32,
    delay_remaining: Duration,
    elapsed: Duration,
    forward: bool,
}

impl Animator {
    #[must_use]
    pub fn new(duration_secs: f32) -> Self {
        Self {
            curve: SpeedCurve::default(),
            selected_preset: None,
            duration_secs: clamp_duration(duration_secs),
            delay_remaining: INITIAL_DELAY,
            elapsed: Duration::ZERO,
            forward: true,
        }
    }

    /// Advances the animation. The initial delay is consumed first; any
    /// remainder of the delta flows into the sweep.
    pub fn tick(&mut self, delta: Duration) {
        let delta = if self.delay_remaining.is_zero() {
            delta
        } else if delta < self.delay_remaining {
            self.delay_remaining -= delta;
            return;
        } else {
            let leftover = delta - self.delay_remaining;
            self.delay_remaining = Duration::ZERO;
            leftover
        };

        self.elapsed += delta;
        if self.progress() >= 1.0 {
            self.forward = !self.forward;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Raw sweep progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.duration_secs).min(1.0)
    }

    /// Eased sweep progress in `[0, 1]`.
    #[must_use]
    pub fn eased(&self) -> f32 {
        self.curve.eased(self.progress())
    }

    /// Current value of a channel, in `[0, 100]`.
    #[must_use]
    pub fn value(&self, channel: Channel) -> f32 {
        let filling = self.forward != channel.is_inverted();
        let eased = self.eased();
        if filling {
            eased * 100.0
        } else {
            100.0 - eased * 100.0
        }
    }

    /// Center readout, following the non-inverted channels.
    #[must_use]
    pub fn level(&self) -> f32 {
        self.value(Channel::Physical)
    }

    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    #[must_use]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    /// Changes the sweep duration (clamped to the configured bounds) and
    /// restarts the animation.
    pub fn set_duration(&mut self, secs: f32) {
        self.duration_secs = clamp_duration(secs);
        self.restart();
    }

    #[must_use]
    pub fn curve(&self) -> &SpeedCurve {
        &self.curve
    }

    /// Which preset matches the current curve, if the user has not edited it.
    #[must_use]
    pub fn selected_preset(&self) -> Option<Preset> {
        self.selected_preset
    }

    /// Replaces the curve with a preset and restarts the sweep.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.curve = SpeedCurve::from_preset(preset);
        self.selected_preset = Some(preset);
        self.restart();
    }

    /// Adds a curve point. Editing the curve clears the preset highlight and
    /// restarts the sweep.
    pub fn add_curve_point(&mut self, time: f32, speed: f32) -> usize {
        let index = self.curve.add_point(time, speed);
        self.selected_preset = None;
        self.restart();
        index
    }

    /// Moves a curve point, returning its index after re-sorting.
    pub fn move_curve_point(&mut self, index: usize, time: f32, speed: f32) -> Option<usize> {
        let new_index = self.curve.move_point(index, time, speed)?;
        self.selected_preset = None;
        Some(new_index)
    }

    /// Removes a curve point unless the curve is already minimal.
    pub fn remove_curve_point(&mut self, index: usize) -> bool {
        let removed = self.curve.remove_point(index);
        if removed {
            self.selected_preset = None;
            self.restart();
        }
        removed
    }

    /// Back to the start of a forward sweep, initial delay included.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.forward = true;
        self.delay_remaining = INITIAL_DELAY;
    }
}

fn clamp_duration(secs: f32) -> f32 {
    secs.clamp(MIN_RADAR_DURATION_SECS, MAX_RADAR_DURATION_SECS)
}
