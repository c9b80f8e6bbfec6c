// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens.

## Organization

- **Palette**: Base colors, including the per-eye iris scales
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale

## Examples

```
use iced_gaze::ui::design_tokens::{palette, opacity};
use iced::Color;

// Create a faded accent color
let faded = Color {
    a: opacity::ACCENT_DIM,
    ..palette::ACCENT_BLUE
};
```
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Eye surface
    pub const SCLERA: Color = Color::from_rgb(0.97, 0.96, 0.93);
    pub const SCLERA_SHADOW: Color = Color::from_rgb(0.55, 0.55, 0.6);

    // Left iris (blue scale, center to rim)
    pub const IRIS_BLUE_400: Color = Color::from_rgb(0.2, 0.6, 1.0);
    pub const IRIS_BLUE_600: Color = Color::from_rgb(0.05, 0.47, 0.85);
    pub const IRIS_BLUE_800: Color = Color::from_rgb(0.12, 0.24, 0.48);

    // Right iris (green scale, center to rim)
    pub const IRIS_GREEN_400: Color = Color::from_rgb(0.2, 0.8, 0.3);
    pub const IRIS_GREEN_600: Color = Color::from_rgb(0.12, 0.68, 0.18);
    pub const IRIS_GREEN_800: Color = Color::from_rgb(0.12, 0.38, 0.21);

    // Background accents
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.4, 0.85, 0.55);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.65, 0.45, 0.95);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const HIGHLIGHT: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Accent dots at the dim end of their pulse.
    pub const ACCENT_DIM: f32 = 0.15;

    /// Accent dots at the bright end of their pulse.
    pub const ACCENT_BRIGHT: f32 = 0.75;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 34.0;
    pub const SUBTITLE: f32 = 18.0;
}
