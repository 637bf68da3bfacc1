// SPDX-License-Identifier: MPL-2.0
//! Form field styles.

use crate::theme::ColorScheme;
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Contact form field. An invalid field gets an error-colored ring that stays
/// visible across all three theme variants.
pub fn form(
    scheme: &ColorScheme,
    has_error: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let scheme = *scheme;
    move |_theme: &Theme, status: text_input::Status| {
        let border_color = if has_error {
            palette::ERROR_500
        } else {
            match status {
                text_input::Status::Focused { .. } => scheme.accent,
                _ => Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..scheme.text
                },
            }
        };

        let border_width = if has_error || matches!(status, text_input::Status::Focused { .. }) {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        };

        text_input::Style {
            background: Background::Color(scheme.surface),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            icon: scheme.text_secondary(),
            placeholder: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..scheme.text
            },
            value: scheme.text,
            selection: Color {
                a: 0.35,
                ..scheme.accent
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_ring_overrides_focus_color() {
        let scheme = ColorScheme::light();
        let style = form(&scheme, true)(
            &Theme::Light,
            text_input::Status::Active,
        );
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn focused_field_uses_accent_ring() {
        let scheme = ColorScheme::dark();
        let style = form(&scheme, false)(
            &Theme::Dark,
            text_input::Status::Focused { is_hovered: false },
        );
        assert_eq!(style.border.color, scheme.accent);
    }
}
