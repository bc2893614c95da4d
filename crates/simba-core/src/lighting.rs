//! Fixed light rigs for the two scenes, scaled by the active theme table.

use crate::constants::*;
use crate::theme::{ThemeParams, ViewerLighting};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels (from the light towards the origin).
    pub direction: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the contribution reaches zero.
    pub range: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    /// Cosine of the outer cone half-angle.
    pub cos_outer: f32,
    /// Cosine of the angle where the penumbra starts.
    pub cos_inner: f32,
}

impl SpotLight {
    fn aimed_at_origin(position: Vec3, intensity: f32, range: f32) -> Self {
        let angle = std::f32::consts::PI / 6.0;
        let penumbra = 0.5;
        Self {
            position,
            direction: (-position).normalize_or_zero(),
            color: [1.0, 1.0, 1.0],
            intensity,
            range,
            cos_outer: angle.cos(),
            cos_inner: (angle * (1.0 - penumbra)).cos(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightRig {
    /// Ambient colour already multiplied by its intensity.
    pub ambient: [f32; 3],
    pub directional: [DirectionalLight; 2],
    pub points: [PointLight; 2],
    pub spot: SpotLight,
}

#[inline]
fn scaled(rgb: [f32; 3], k: f32) -> [f32; 3] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k]
}

/// Key light, two coloured rims and a spotlight on the can.
pub fn intro_rig(params: &ThemeParams) -> LightRig {
    LightRig {
        ambient: scaled(hex_to_rgb(AMBIENT_HEX), params.ambient_intensity),
        directional: [
            DirectionalLight {
                direction: (-KEY_LIGHT_POS).normalize(),
                color: [1.0, 1.0, 1.0],
                intensity: params.directional_intensity,
            },
            DirectionalLight::default(),
        ],
        points: [
            PointLight {
                position: RIM_GOLD_POS,
                color: hex_to_rgb(GOLD_HEX),
                intensity: params.point_intensity,
                range: RIM_LIGHT_RANGE,
            },
            PointLight {
                position: RIM_DARK_GOLD_POS,
                color: hex_to_rgb(DARK_GOLD_HEX),
                intensity: params.point_intensity,
                range: RIM_LIGHT_RANGE,
            },
        ],
        spot: SpotLight::aimed_at_origin(SPOT_POS, params.spot_intensity, SPOT_RANGE),
    }
}

/// Warm key/fill pair, soft ambient, spotlight and a white rim.
pub fn viewer_rig(lighting: &ViewerLighting) -> LightRig {
    LightRig {
        ambient: scaled(hex_to_rgb(0x404040), lighting.ambient_intensity),
        directional: [
            DirectionalLight {
                direction: (-Vec3::new(5.0, 5.0, 5.0)).normalize(),
                color: hex_to_rgb(0xE65B07),
                intensity: lighting.directional_intensity,
            },
            DirectionalLight {
                direction: (-Vec3::new(-5.0, 0.0, -5.0)).normalize(),
                color: hex_to_rgb(0xB34605),
                intensity: lighting.fill_intensity,
            },
        ],
        points: [
            PointLight {
                position: Vec3::new(-3.0, 0.0, -3.0),
                color: [1.0, 1.0, 1.0],
                intensity: lighting.rim_intensity,
                range: 10.0,
            },
            PointLight::default(),
        ],
        spot: SpotLight::aimed_at_origin(Vec3::new(0.0, 5.0, 5.0), lighting.spot_intensity, 20.0),
    }
}
