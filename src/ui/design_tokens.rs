// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the radar category colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Radar chart channel colors, one per statistic
    pub const RADAR_PHYSICAL: Color = Color::from_rgb(0.0, 1.0, 0.533); // #00ff88
    pub const RADAR_RELATIONSHIP: Color = Color::from_rgb(0.0, 0.533, 1.0); // #0088ff
    pub const RADAR_DISCIPLINE: Color = Color::from_rgb(1.0, 0.267, 0.267); // #ff4444
    pub const RADAR_MENTAL: Color = Color::from_rgb(1.0, 0.667, 0.0); // #ffaa00
    pub const RADAR_INTELLECT: Color = Color::from_rgb(1.0, 0.533, 0.0); // #ff8800
    pub const RADAR_AMBITION: Color = Color::from_rgb(0.533, 0.267, 1.0); // #8844ff
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Secondary text derived from the scheme's primary text color.
    pub const TEXT_SECONDARY: f32 = 0.72;

    /// Fill inside the animated radar polygon.
    pub const RADAR_FILL: f32 = 0.1;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units

    /// Vertical breathing room between page sections.
    pub const SECTION: f32 = 80.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Page layout
    pub const CONTENT_WIDTH: f32 = 900.0;
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Circular initials placeholder in the about section
    pub const AVATAR: f32 = 96.0;

    // Radar chart
    pub const RADAR_CANVAS: f32 = 400.0;
    pub const RADAR_MAX_RADIUS: f32 = 150.0;
    pub const RADAR_LABEL_RADIUS: f32 = 155.0;

    // Speed curve editor
    pub const CURVE_CANVAS_WIDTH: f32 = 320.0;
    pub const CURVE_CANVAS_HEIGHT: f32 = 120.0;
    pub const CURVE_POINT_RADIUS: f32 = 5.0;
    /// Hit area around a curve point - generous for pointer accuracy
    pub const CURVE_POINT_HIT_RADIUS: f32 = 12.0;

    // Skill bars
    pub const SKILL_BAR_HEIGHT: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Hero headline
    pub const DISPLAY: f32 = 48.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card titles, brand name
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Sub-headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;

    /// Center level readout inside the radar chart
    pub const RADAR_LEVEL: f32 = 60.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, validation rings
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TEXT_SECONDARY > 0.0 && opacity::TEXT_SECONDARY < 1.0);
    assert!(opacity::RADAR_FILL > 0.0 && opacity::RADAR_FILL < 1.0);

    // Sizing validation
    assert!(sizing::RADAR_LABEL_RADIUS > sizing::RADAR_MAX_RADIUS);
    assert!(sizing::RADAR_CANVAS > 2.0 * sizing::RADAR_MAX_RADIUS);
    assert!(sizing::CURVE_POINT_HIT_RADIUS > sizing::CURVE_POINT_RADIUS);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
