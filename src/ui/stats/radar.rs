// SPDX-License-Identifier: MPL-2.0
//! Radar chart widget using Canvas.
//!
//! Six axes, 60° apart starting at the top, with a filled polygon tracking
//! the animator's current channel values and a large level readout in the
//! center.

use super::animator::{Animator, Channel};
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{opacity, sizing, typography};
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::widget::text::Alignment;
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const GRID_LEVELS: [f32; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Angle of a channel's axis, in radians. Index 0 points straight up.
fn axis_angle(index: usize) -> f32 {
    (index as f32 * 60.0 - 90.0) * PI / 180.0
}

fn vertex(center: Point, radius: f32, index: usize) -> Point {
    let angle = axis_angle(index);
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Snapshot renderer for one animation frame.
pub struct RadarChart {
    cache: Cache,
    values: [f32; 6],
    level: f32,
    labels: [String; 6],
    scheme: ColorScheme,
}

impl RadarChart {
    #[must_use]
    pub fn new(animator: &Animator, labels: [String; 6], scheme: ColorScheme) -> Self {
        let mut values = [0.0f32; 6];
        for (slot, channel) in values.iter_mut().zip(Channel::ALL) {
            *slot = animator.value(channel).clamp(0.0, 100.0);
        }

        Self {
            cache: Cache::default(),
            values,
            level: animator.level(),
            labels,
            scheme,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::RADAR_CANVAS))
            .height(Length::Fixed(sizing::RADAR_CANVAS))
            .into()
    }

    fn polygon(&self, center: Point) -> Path {
        let mut builder = canvas::path::Builder::new();
        for (index, value) in self.values.iter().enumerate() {
            let radius = value / 100.0 * sizing::RADAR_MAX_RADIUS;
            let point = vertex(center, radius, index);
            if index == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.close();
        builder.build()
    }
}

impl<Message> canvas::Program<Message> for RadarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let grid_color = Color {
                    a: 0.15,
                    ..self.scheme.text
                };

                // Concentric hexagonal grid
                for level in GRID_LEVELS {
                    let radius = level * sizing::RADAR_MAX_RADIUS;
                    let mut builder = canvas::path::Builder::new();
                    for index in 0..6 {
                        let point = vertex(center, radius, index);
                        if index == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                    builder.close();
                    frame.stroke(
                        &builder.build(),
                        Stroke::default().with_width(1.0).with_color(grid_color),
                    );
                }

                // Axes from the center to each outer vertex
                for index in 0..6 {
                    let mut builder = canvas::path::Builder::new();
                    builder.move_to(center);
                    builder.line_to(vertex(center, sizing::RADAR_MAX_RADIUS, index));
                    frame.stroke(
                        &builder.build(),
                        Stroke::default().with_width(1.0).with_color(grid_color),
                    );
                }

                // Value polygon
                let polygon = self.polygon(center);
                frame.fill(
                    &polygon,
                    Color {
                        a: opacity::RADAR_FILL,
                        ..self.scheme.text
                    },
                );
                frame.stroke(
                    &polygon,
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: 0.3,
                        ..self.scheme.text
                    }),
                );

                // Colored vertex markers
                for (index, channel) in Channel::ALL.iter().enumerate() {
                    let radius = self.values[index] / 100.0 * sizing::RADAR_MAX_RADIUS;
                    let marker = Path::circle(vertex(center, radius, index), 4.0);
                    frame.fill(&marker, channel.color());
                }

                // Channel labels on the outer ring
                for (index, channel) in Channel::ALL.iter().enumerate() {
                    let position = vertex(center, sizing::RADAR_LABEL_RADIUS, index);
                    frame.fill_text(Text {
                        content: self.labels[index].clone(),
                        position,
                        color: channel.color(),
                        size: typography::CAPTION.into(),
                        align_x: Alignment::Center,
                        align_y: Vertical::Center,
                        ..Text::default()
                    });
                }

                // Center level readout
                frame.fill_text(Text {
                    content: format!("{}", self.level.round() as i32),
                    position: center,
                    color: self.scheme.text,
                    size: typography::RADAR_LEVEL.into(),
                    align_x: Alignment::Center,
                    align_y: Vertical::Center,
                    ..Text::default()
                });
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_axis_points_straight_up() {
        let angle = axis_angle(0);
        assert!((angle + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn axes_are_sixty_degrees_apart() {
        for index in 0..5 {
            let step = axis_angle(index + 1) - axis_angle(index);
            assert!((step - PI / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn vertex_at_zero_radius_is_the_center() {
        let center = Point::new(200.0, 200.0);
        let point = vertex(center, 0.0, 3);
        assert!((point.x - center.x).abs() < 1e-6);
        assert!((point.y - center.y).abs() < 1e-6);
    }

    #[test]
    fn chart_clamps_values_to_percentage_range() {
        let mut animator = Animator::new(8.0);
        animator.tick(std::time::Duration::from_millis(600));
        let labels: [String; 6] = std::array::from_fn(|i| format!("L{i}"));
        let chart = RadarChart::new(&animator, labels, ColorScheme::dark());
        for value in chart.values {
            assert!((0.0..=100.0).contains(&value));
        }
    }
}
