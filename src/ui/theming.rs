// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.

use crate::ui::design_tokens::palette;
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Scene background behind the eyes.
    pub background: Color,

    // Text colors for the caption overlay
    pub text_primary: Color,
    pub text_secondary: Color,

    // Eye surface colors
    pub sclera: Color,
    pub eye_outline: Color,
    pub pupil: Color,
    pub highlight: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb(0.92, 0.93, 0.96),

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            sclera: palette::SCLERA,
            eye_outline: palette::GRAY_400,
            pupil: palette::BLACK,
            highlight: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb(0.08, 0.09, 0.14),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            sclera: palette::SCLERA,
            eye_outline: palette::SCLERA_SHADOW,
            pupil: palette::BLACK,
            highlight: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }

    /// Resolves the scheme for a given theme mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System => Self::from_system(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the next mode in the cycle System -> Light -> Dark.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// Parses a CLI flag value (`light`, `dark`, `system`).
    #[must_use]
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_background() {
        let scheme = ColorScheme::light();
        assert!(scheme.background.r > 0.8); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_background() {
        let scheme = ColorScheme::dark();
        assert!(scheme.background.r < 0.2); // Close to black
    }

    #[test]
    fn both_themes_share_the_sclera_color() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert_eq!(light.sclera, dark.sclera);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn cycling_visits_every_mode() {
        let start = ThemeMode::System;
        let second = start.cycled();
        let third = second.cycled();
        assert_eq!(second, ThemeMode::Light);
        assert_eq!(third, ThemeMode::Dark);
        assert_eq!(third.cycled(), start);
    }

    #[test]
    fn from_flag_parses_known_values() {
        assert_eq!(ThemeMode::from_flag("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_flag("DARK"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_flag("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::from_flag("solar"), None);
    }
}
