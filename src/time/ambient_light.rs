use glam::{Quat, Vec4};
use serde::{Deserialize, Serialize};

use crate::constants::ambient::{
    DEFAULT_FILL_INTENSITY, DEFAULT_HORIZON_MULTIPLIER, DEFAULT_MID_MULTIPLIER,
    DEFAULT_ZENITH_MULTIPLIER, FILL_HEADROOM,
};
use crate::lighting::PhaseColors;
use crate::time::celestial::tilt_rotation;

/// Ambient lighting settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLightSettings {
    /// Upper bound on the fill light intensity
    pub fill_intensity: f32,
    pub zenith_multiplier: f32,
    pub mid_multiplier: f32,
    pub horizon_multiplier: f32,
}

impl Default for AmbientLightSettings {
    fn default() -> Self {
        Self {
            fill_intensity: DEFAULT_FILL_INTENSITY,
            zenith_multiplier: DEFAULT_ZENITH_MULTIPLIER,
            mid_multiplier: DEFAULT_MID_MULTIPLIER,
            horizon_multiplier: DEFAULT_HORIZON_MULTIPLIER,
        }
    }
}

/// Colors for the host's three-band ambient lighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientEnvironment {
    pub sky: Vec4,
    pub equator: Vec4,
    pub ground: Vec4,
}

/// Low-intensity light facing away from the dominant light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillLight {
    pub rotation: Quat,
    pub color: Vec4,
    pub intensity: f32,
}

impl AmbientLightSettings {
    /// Scale blended ambient colors into the environment bands
    pub fn environment(&self, ambient: &PhaseColors) -> AmbientEnvironment {
        let scaled =
            ambient.scaled(self.zenith_multiplier, self.mid_multiplier, self.horizon_multiplier);
        AmbientEnvironment {
            sky: scaled.zenith,
            equator: scaled.mid,
            ground: scaled.horizon,
        }
    }

    /// Fill light for the current dominant light
    pub fn fill_light(
        &self,
        dominant_angle: f32,
        dominant_intensity: f32,
        ambient: &PhaseColors,
    ) -> FillLight {
        FillLight {
            rotation: tilt_rotation(-dominant_angle),
            color: ambient.mid,
            intensity: calculate_fill_intensity(self.fill_intensity, dominant_intensity),
        }
    }
}

/// Fill intensity: capped by the setting, kept below the dominant light,
/// never negative
pub fn calculate_fill_intensity(configured: f32, dominant_intensity: f32) -> f32 {
    configured.min(dominant_intensity - FILL_HEADROOM).max(0.0)
}
