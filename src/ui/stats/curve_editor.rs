// SPDX-License-Identifier: MPL-2.0
//! Interactive canvas for editing the speed curve.
//!
//! Time runs left to right, speed bottom to top. Dragging a control point
//! moves it, clicking empty canvas adds one, right-clicking a point removes
//! it (down to the two-point minimum).

use super::curve::{SpeedPoint, MAX_SPEED};
use super::Message;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Converts a canvas position into curve coordinates.
fn to_curve_coords(position: Point, bounds: Rectangle) -> (f32, f32) {
    let time = (position.x / bounds.width).clamp(0.0, 1.0);
    let speed = ((1.0 - position.y / bounds.height) * MAX_SPEED).clamp(0.0, MAX_SPEED);
    (time, speed)
}

/// Converts a curve point into a canvas position.
fn to_canvas_point(point: SpeedPoint, bounds_size: iced::Size) -> Point {
    Point::new(
        point.time * bounds_size.width,
        (1.0 - point.speed / MAX_SPEED) * bounds_size.height,
    )
}

pub struct CurveEditor {
    cache: Cache,
    points: Vec<SpeedPoint>,
    scheme: ColorScheme,
}

impl CurveEditor {
    #[must_use]
    pub fn new(points: Vec<SpeedPoint>, scheme: ColorScheme) -> Self {
        Self {
            cache: Cache::default(),
            points,
            scheme,
        }
    }

    pub fn into_element(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::CURVE_CANVAS_WIDTH))
            .height(Length::Fixed(sizing::CURVE_CANVAS_HEIGHT))
            .into()
    }

    fn hit_point(&self, position: Point, bounds: Rectangle) -> Option<usize> {
        self.points.iter().position(|&point| {
            let canvas_point = to_canvas_point(point, bounds.size());
            let dx = canvas_point.x - position.x;
            let dy = canvas_point.y - position.y;
            (dx * dx + dy * dy).sqrt() <= sizing::CURVE_POINT_HIT_RADIUS
        })
    }
}

impl canvas::Program<Message> for CurveEditor {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    let message = match self.hit_point(position, bounds) {
                        Some(index) => Message::CurveGrabbed(index),
                        None => {
                            let (time, speed) = to_curve_coords(position, bounds);
                            Message::CurveAdded { time, speed }
                        }
                    };
                    return Some(Action::publish(message).and_capture());
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    if let Some(index) = self.hit_point(position, bounds) {
                        return Some(
                            Action::publish(Message::CurvePointRemoved(index)).and_capture(),
                        );
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(position) = cursor.position_in(bounds) {
                    let (time, speed) = to_curve_coords(position, bounds);
                    return Some(
                        Action::publish(Message::CurveDragged { time, speed }).and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft) => {
                return Some(Action::publish(Message::CurveReleased).and_capture());
            }
            _ => {}
        }

        None
    }

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
                let size = frame.size();
                let faint = Color {
                    a: 0.15,
                    ..self.scheme.text
                };

                // Midline marks speed 1.0
                let midline_y = (1.0 - 1.0 / MAX_SPEED) * size.height;
                let mut midline = canvas::path::Builder::new();
                midline.move_to(Point::new(0.0, midline_y));
                midline.line_to(Point::new(size.width, midline_y));
                frame.stroke(
                    &midline.build(),
                    Stroke::default().with_width(1.0).with_color(faint),
                );

                // The curve itself
                let mut builder = canvas::path::Builder::new();
                for (index, &point) in self.points.iter().enumerate() {
                    let canvas_point = to_canvas_point(point, size);
                    if index == 0 {
                        builder.move_to(canvas_point);
                    } else {
                        builder.line_to(canvas_point);
                    }
                }
                frame.stroke(
                    &builder.build(),
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.scheme.accent),
                );

                // Control points
                for &point in &self.points {
                    let canvas_point = to_canvas_point(point, size);
                    let dot = Path::circle(canvas_point, sizing::CURVE_POINT_RADIUS);
                    frame.fill(&dot, self.scheme.accent);
                    frame.stroke(
                        &dot,
                        Stroke::default()
                            .with_width(1.0)
                            .with_color(self.scheme.text),
                    );
                }
            });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if let Some(position) = cursor.position_in(bounds) {
            if self.hit_point(position, bounds).is_some() {
                return mouse::Interaction::Grab;
            }
            return mouse::Interaction::Crosshair;
        }
        mouse::Interaction::default()
    }
}
