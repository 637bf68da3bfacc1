// SPDX-License-Identifier: MPL-2.0
//! Personal statistics section: the animated radar chart with its speed
//! controls panel.

pub mod animator;
pub mod curve;
pub mod curve_editor;
pub mod radar;

pub use animator::{Animator, Channel};
pub use curve::{Preset, SpeedCurve, SpeedPoint};

use crate::config::{MAX_RADAR_DURATION_SECS, MIN_RADAR_DURATION_SECS, RADAR_DURATION_STEP_SECS};
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use curve_editor::CurveEditor;
use iced::widget::{button, container, slider, text, Column, Row};
use iced::{Alignment, Element, Length};
use radar::RadarChart;
use std::time::Duration;

/// Section state: the animator plus controls-panel UI state.
pub struct State {
    pub animator: Animator,
    pub controls_open: bool,
    drag_index: Option<usize>,
}

impl State {
    #[must_use]
    pub fn new(duration_secs: f32) -> Self {
        Self {
            animator: Animator::new(duration_secs),
            controls_open: false,
            drag_index: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Duration),
    ToggleControls,
    PresetSelected(Preset),
    DurationChanged(f32),
    CurveGrabbed(usize),
    CurveAdded { time: f32, speed: f32 },
    CurveDragged { time: f32, speed: f32 },
    CurveReleased,
    CurvePointRemoved(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The sweep duration changed and should be persisted.
    DurationChanged(f32),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Tick(delta) => {
            state.animator.tick(delta);
            Event::None
        }
        Message::ToggleControls => {
            state.controls_open = !state.controls_open;
            Event::None
        }
        Message::PresetSelected(preset) => {
            state.animator.apply_preset(preset);
            Event::None
        }
        Message::DurationChanged(secs) => {
            state.animator.set_duration(secs);
            Event::DurationChanged(state.animator.duration_secs())
        }
        Message::CurveGrabbed(index) => {
            state.drag_index = Some(index);
            Event::None
        }
        Message::CurveAdded { time, speed } => {
            state.animator.add_curve_point(time, speed);
            Event::None
        }
        Message::CurveDragged { time, speed } => {
            if let Some(index) = state.drag_index {
                state.drag_index = state.animator.move_curve_point(index, time, speed);
            }
            Event::None
        }
        Message::CurveReleased => {
            // The sweep resumes from the start once the drag settles.
            if state.drag_index.take().is_some() {
                state.animator.restart();
            }
            Event::None
        }
        Message::CurvePointRemoved(index) => {
            state.animator.remove_curve_point(index);
            Event::None
        }
    }
}

/// Render the statistics section.
pub fn view<'a>(state: &'a State, i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let labels: [String; 6] = std::array::from_fn(|i| i18n.tr(Channel::ALL[i].label_key()));
    let chart = RadarChart::new(&state.animator, labels, scheme).into_element();

    let toggle_label = if state.controls_open {
        i18n.tr("stats-hide-controls")
    } else {
        i18n.tr("stats-show-controls")
    };
    let toggle = button(text(toggle_label).size(typography::BODY_SM))
        .on_press(Message::ToggleControls)
        .style(styles::button::secondary(&scheme))
        .padding([spacing::XXS, spacing::SM]);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .push(
            text(i18n.tr("stats-title"))
                .size(typography::TITLE_LG)
                .color(scheme.text),
        )
        .push(toggle);

    if state.controls_open {
        content = content.push(controls_panel(state, i18n, scheme));
    }

    content = content.push(chart).push(channel_readout(state, i18n));

    container(content)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

fn controls_panel<'a>(state: &State, i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let mut presets = Row::new().spacing(spacing::XS);
    for preset in Preset::ALL {
        let selected = state.animator.selected_preset() == Some(preset);
        presets = presets.push(
            button(text(i18n.tr(preset.label_key())).size(typography::BODY_SM))
                .on_press(Message::PresetSelected(preset))
                .style(styles::button::preset(&scheme, selected))
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    let editor = CurveEditor::new(state.animator.curve().points().to_vec(), scheme).into_element();

    let duration = state.animator.duration_secs();
    let duration_row = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(format!("{}: {duration}s", i18n.tr("stats-duration-label")))
                .size(typography::BODY_SM)
                .color(scheme.text),
        )
        .push(
            slider(
                MIN_RADAR_DURATION_SECS..=MAX_RADAR_DURATION_SECS,
                duration,
                Message::DurationChanged,
            )
            .step(RADAR_DURATION_STEP_SECS),
        );

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(
            text(i18n.tr("stats-curve-title"))
                .size(typography::TITLE_SM)
                .color(scheme.text),
        )
        .push(presets)
        .push(
            text(i18n.tr("stats-curve-editor"))
                .size(typography::CAPTION)
                .color(scheme.text_secondary()),
        )
        .push(editor)
        .push(
            text(i18n.tr("stats-curve-hint"))
                .size(typography::CAPTION)
                .color(scheme.text_secondary()),
        )
        .push(duration_row);

    container(panel)
        .style(styles::container::card(&scheme))
        .padding(spacing::LG)
        .into()
}

fn channel_readout<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let mut grid = Row::new().spacing(spacing::XL);
    for channel in Channel::ALL {
        let value = state.animator.value(channel).round() as i32;
        grid = grid.push(
            Column::new()
                .align_x(Alignment::Center)
                .spacing(spacing::XXS)
                .push(
                    text(i18n.tr(channel.label_key()))
                        .size(typography::CAPTION)
                        .color(channel.color()),
                )
                .push(
                    text(format!("{value}"))
                        .size(typography::TITLE_MD)
                        .color(channel.color()),
                ),
        );
    }
    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked_state() -> State {
        let mut state = State::new(8.0);
        update(Message::Tick(Duration::from_millis(600)), &mut state);
        state
    }

    #[test]
    fn toggle_controls_flips_panel_visibility() {
        let mut state = State::new(8.0);
        assert!(!state.controls_open);
        update(Message::ToggleControls, &mut state);
        assert!(state.controls_open);
        update(Message::ToggleControls, &mut state);
        assert!(!state.controls_open);
    }

    #[test]
    fn duration_change_reports_clamped_value() {
        let mut state = State::new(8.0);
        let event = update(Message::DurationChanged(99.0), &mut state);
        assert_eq!(event, Event::DurationChanged(MAX_RADAR_DURATION_SECS));
    }

    #[test]
    fn drag_sequence_moves_a_point() {
        let mut state = ticked_state();
        let before = state.animator.curve().points().to_vec();

        update(Message::CurveGrabbed(1), &mut state);
        update(
            Message::CurveDragged {
                time: 0.9,
                speed: 1.9,
            },
            &mut state,
        );
        update(Message::CurveReleased, &mut state);

        let after = state.animator.curve().points();
        assert_eq!(after.len(), before.len());
        assert_ne!(after, before.as_slice());
        // Dragging clears any preset highlight.
        assert_eq!(state.animator.selected_preset(), None);
    }

    #[test]
    fn drag_release_restarts_the_sweep() {
        let mut state = ticked_state();
        update(Message::Tick(Duration::from_millis(2000)), &mut state);
        assert!(state.animator.progress() > 0.0);

        update(Message::CurveGrabbed(0), &mut state);
        update(Message::CurveReleased, &mut state);
        assert_eq!(state.animator.progress(), 0.0);
    }

    #[test]
    fn stray_drag_without_grab_is_ignored() {
        let mut state = ticked_state();
        let before = state.animator.curve().points().to_vec();
        update(
            Message::CurveDragged {
                time: 0.5,
                speed: 0.5,
            },
            &mut state,
        );
        assert_eq!(state.animator.curve().points(), before.as_slice());
    }

    #[test]
    fn release_without_drag_does_not_restart() {
        let mut state = ticked_state();
        update(Message::Tick(Duration::from_millis(2000)), &mut state);
        let progress = state.animator.progress();
        update(Message::CurveReleased, &mut state);
        assert_eq!(state.animator.progress(), progress);
    }

    #[test]
    fn preset_selection_swaps_the_curve() {
        let mut state = State::new(8.0);
        update(Message::PresetSelected(Preset::Linear), &mut state);
        assert_eq!(state.animator.curve().points().len(), 2);
        assert_eq!(state.animator.selected_preset(), Some(Preset::Linear));
    }
}
