// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::theme::ColorScheme;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::gradient;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};

/// Full-page backdrop. The gradient variant gets a top-to-bottom linear
/// gradient between its two stops; flat variants get a solid fill.
pub fn page(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scheme = *scheme;
    move |_theme: &Theme| {
        let background = match scheme.background_end {
            Some(end) => Background::Gradient(
                gradient::Linear::new(Radians(std::f32::consts::PI))
                    .add_stop(0.0, scheme.background)
                    .add_stop(1.0, end)
                    .into(),
            ),
            None => Background::Color(scheme.background),
        };

        container::Style {
            background: Some(background),
            text_color: Some(scheme.text),
            ..Default::default()
        }
    }
}

/// Card surface for project tiles, form panels, and stat boxes.
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scheme = *scheme;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Fixed navigation bar surface. Once the page has scrolled the bar gets a
/// stronger shadow to lift it off the content.
pub fn navbar(scheme: &ColorScheme, elevated: bool) -> impl Fn(&Theme) -> container::Style {
    let scheme = *scheme;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: (scheme.surface.a * 0.95).min(1.0),
            ..scheme.surface
        })),
        text_color: Some(scheme.text),
        shadow: if elevated { shadow::MD } else { shadow::SM },
        ..Default::default()
    }
}

/// Small pill chip for technology tags.
pub fn chip(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scheme = *scheme;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..scheme.accent
        })),
        text_color: Some(scheme.text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Banner shown after a form submission attempt.
pub fn status_banner(
    scheme: &ColorScheme,
    success: bool,
) -> impl Fn(&Theme) -> container::Style {
    use crate::ui::design_tokens::palette;

    let scheme = *scheme;
    let tint = if success {
        palette::SUCCESS_500
    } else {
        palette::ERROR_500
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..tint })),
        text_color: Some(scheme.text),
        border: Border {
            color: tint,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Track behind a skill proficiency bar.
pub fn bar_track(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scheme = *scheme;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..scheme.text
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled portion of a skill proficiency bar.
pub fn bar_fill(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scheme = *scheme;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.accent)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
