// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::theme::ColorScheme;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

/// Pill-shaped accent button for primary actions.
pub fn primary(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let scheme = *scheme;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => lighten(scheme.accent, 0.08),
            button::Status::Pressed => scheme.accent,
            _ => scheme.accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

/// Pill-shaped surface button for secondary actions.
pub fn secondary(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let scheme = *scheme;
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER.min(scheme.surface.a + 0.1),
            _ => scheme.surface.a,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..scheme.surface
            })),
            text_color: scheme.text,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..scheme.text
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Borderless text button used for navigation links.
pub fn link(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let scheme = *scheme;
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => scheme.accent,
            _ => scheme.text,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small toggle used for speed-curve presets; highlighted when selected.
pub fn preset(
    scheme: &ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let scheme = *scheme;
    move |_theme: &Theme, status: button::Status| {
        let background = if selected {
            scheme.accent
        } else {
            Color {
                a: match status {
                    button::Status::Hovered => 0.3,
                    _ => 0.15,
                },
                ..scheme.text
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if selected { Color::WHITE } else { scheme.text },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_clamps_at_white() {
        let lifted = lighten(Color::WHITE, 0.5);
        assert_eq!(lifted, Color::WHITE);
    }

    #[test]
    fn link_highlights_on_hover() {
        let scheme = ColorScheme::light();
        let style = link(&scheme);
        let idle = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.text_color, scheme.text);
        assert_eq!(hovered.text_color, scheme.accent);
    }

    #[test]
    fn selected_preset_uses_accent_background() {
        let scheme = ColorScheme::dark();
        let style = preset(&scheme, true);
        let active = style(&Theme::Dark, button::Status::Active);
        assert_eq!(
            active.background,
            Some(Background::Color(scheme.accent))
        );
    }
}
