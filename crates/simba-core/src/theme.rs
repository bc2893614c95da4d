//! Light/dark theme tables for both 3D scenes.

use crate::constants::*;

/// Key under which the preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Name of the page-wide event carrying `{ isLightTheme }`.
pub const THEME_EVENT: &str = "themeChanged";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[inline]
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Anything other than `"light"` (including nothing stored) is dark.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_storage_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Every theme-dependent scene parameter of the intro scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeParams {
    pub background: [f32; 3],
    pub fog_color: [f32; 3],
    pub fog_density: f32,
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub point_intensity: f32,
    pub spot_intensity: f32,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub exposure: f32,
}

/// Map a theme to its parameter table. Pure and idempotent.
pub fn apply_theme(theme: Theme) -> ThemeParams {
    match theme {
        Theme::Dark => ThemeParams {
            background: hex_to_rgb(DARK_BACKGROUND_HEX),
            fog_color: hex_to_rgb(DARK_BACKGROUND_HEX),
            fog_density: FOG_DENSITY,
            ambient_intensity: 1.0,
            directional_intensity: 1.5,
            point_intensity: 3.0,
            spot_intensity: 2.0,
            bloom_strength: 0.7,
            bloom_radius: 0.3,
            exposure: 1.0,
        },
        Theme::Light => ThemeParams {
            background: hex_to_rgb(LIGHT_BACKGROUND_HEX),
            fog_color: hex_to_rgb(LIGHT_BACKGROUND_HEX),
            fog_density: FOG_DENSITY,
            ambient_intensity: 1.6,
            directional_intensity: 1.2,
            point_intensity: 2.0,
            spot_intensity: 1.6,
            bloom_strength: 0.45,
            bloom_radius: 0.25,
            exposure: 1.2,
        },
    }
}

/// Lighting table of the product viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerLighting {
    pub background: [f32; 3],
    pub directional_intensity: f32,
    pub fill_intensity: f32,
    pub ambient_intensity: f32,
    pub spot_intensity: f32,
    pub rim_intensity: f32,
    pub exposure: f32,
}

impl ViewerLighting {
    /// Rig used before the first theme switch: the background follows the
    /// theme but the lights and exposure are fixed.
    pub fn initial(theme: Theme) -> Self {
        Self {
            directional_intensity: 2.0,
            fill_intensity: 1.2,
            ambient_intensity: 0.7,
            spot_intensity: 1.5,
            rim_intensity: 1.0,
            exposure: 1.2,
            ..Self::for_theme(theme)
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: hex_to_rgb(DARK_BACKGROUND_HEX),
                directional_intensity: 2.0,
                fill_intensity: 2.0,
                ambient_intensity: 0.7,
                spot_intensity: 1.5,
                rim_intensity: 1.0,
                exposure: 1.5,
            },
            Theme::Light => Self {
                background: hex_to_rgb(LIGHT_BACKGROUND_HEX),
                directional_intensity: 1.8,
                fill_intensity: 1.8,
                ambient_intensity: 0.8,
                spot_intensity: 1.2,
                rim_intensity: 1.0,
                exposure: 1.2,
            },
        }
    }
}
