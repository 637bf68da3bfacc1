// SPDX-License-Identifier: MPL-2.0
//! Visual theme variants and their color schemes.
//!
//! The portfolio ships three looks: a flat light theme, a flat dark theme, and
//! a purple gradient theme. Exactly one variant is active at a time; the
//! [`store::ThemeStore`] owns the selection and its persistence.

pub mod store;

pub use store::{SceneColors, ThemeApplier, ThemeStore};

use crate::ui::design_tokens::opacity;
use iced::Color;
use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive visual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
    Gradient,
}

impl ThemeVariant {
    /// Cycle order used by the header's theme button.
    pub const ALL: [ThemeVariant; 3] = [
        ThemeVariant::Light,
        ThemeVariant::Dark,
        ThemeVariant::Gradient,
    ];

    /// Advances to the next variant, wrapping from the last back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Gradient,
            ThemeVariant::Gradient => ThemeVariant::Light,
        }
    }

    /// Stable identifier used in `settings.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
            ThemeVariant::Gradient => "gradient",
        }
    }

    /// Parses a persisted identifier, rejecting anything outside the closed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemeVariant::Light),
            "dark" => Some(ThemeVariant::Dark),
            "gradient" => Some(ThemeVariant::Gradient),
            _ => None,
        }
    }

    /// Returns the color scheme for this variant.
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemeVariant::Light => ColorScheme::light(),
            ThemeVariant::Dark => ColorScheme::dark(),
            ThemeVariant::Gradient => ColorScheme::gradient(),
        }
    }

    /// True for the variants that render light text on a dark surface.
    #[must_use]
    pub fn is_dark(self) -> bool {
        !matches!(self, ThemeVariant::Light)
    }
}

/// The four named style values each variant defines, mirrored from the
/// original site's root custom properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Page background. For the gradient variant this is the first stop.
    pub background: Color,
    /// Second gradient stop; `None` for the flat variants.
    pub background_end: Option<Color>,
    /// Card / panel surface color.
    pub surface: Color,
    /// Primary text color.
    pub text: Color,
    /// Accent color for highlights and interactive elements.
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(0xf0, 0xf2, 0xf5),
            background_end: None,
            surface: Color::from_rgb8(0xff, 0xff, 0xff),
            text: Color::from_rgb8(0x2d, 0x37, 0x48),
            accent: Color::from_rgb8(0x66, 0x7e, 0xea),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x1a, 0x20, 0x2c),
            background_end: None,
            surface: Color::from_rgb8(0x2d, 0x37, 0x48),
            text: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            accent: Color::from_rgb8(0x9f, 0x7a, 0xea),
        }
    }

    #[must_use]
    pub fn gradient() -> Self {
        Self {
            background: Color::from_rgb8(0x66, 0x7e, 0xea),
            background_end: Some(Color::from_rgb8(0x76, 0x4b, 0xa2)),
            surface: Color {
                a: 0.1,
                ..Color::WHITE
            },
            text: Color::WHITE,
            accent: Color::from_rgb8(0xf0, 0x93, 0xfb),
        }
    }

    /// Text color for secondary copy (section intros, captions).
    #[must_use]
    pub fn text_secondary(&self) -> Color {
        Color {
            a: opacity::TEXT_SECONDARY,
            ..self.text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_back_to_light() {
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Gradient);
        assert_eq!(ThemeVariant::Gradient.next(), ThemeVariant::Light);
    }

    #[test]
    fn cycling_three_times_is_identity() {
        for variant in ThemeVariant::ALL {
            assert_eq!(variant.next().next().next(), variant);
        }
    }

    #[test]
    fn parse_accepts_only_the_closed_set() {
        assert_eq!(ThemeVariant::parse("light"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::parse("dark"), Some(ThemeVariant::Dark));
        assert_eq!(
            ThemeVariant::parse("gradient"),
            Some(ThemeVariant::Gradient)
        );
        assert_eq!(ThemeVariant::parse("solarized"), None);
        assert_eq!(ThemeVariant::parse(""), None);
        assert_eq!(ThemeVariant::parse("Light"), None);
    }

    #[test]
    fn secondary_text_uses_the_shared_opacity_token() {
        for variant in ThemeVariant::ALL {
            let scheme = variant.scheme();
            let secondary = scheme.text_secondary();
            assert_eq!(secondary.a, opacity::TEXT_SECONDARY);
            assert_eq!(secondary.r, scheme.text.r);
            assert_eq!(secondary.g, scheme.text.g);
            assert_eq!(secondary.b, scheme.text.b);
        }
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for variant in ThemeVariant::ALL {
            assert_eq!(ThemeVariant::parse(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn only_gradient_has_a_second_background_stop() {
        assert!(ColorScheme::light().background_end.is_none());
        assert!(ColorScheme::dark().background_end.is_none());
        assert!(ColorScheme::gradient().background_end.is_some());
    }

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_variants_report_dark() {
        assert!(!ThemeVariant::Light.is_dark());
        assert!(ThemeVariant::Dark.is_dark());
        assert!(ThemeVariant::Gradient.is_dark());
    }
}
