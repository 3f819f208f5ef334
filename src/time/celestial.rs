use glam::{Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::constants::celestial::MOON_OPPOSITION_DEGREES;
use crate::utils::lerp;

/// Which body a light represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
}

/// How the moon's path relates to the sun's
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonAngleMode {
    /// Moon follows the same angle as the sun
    CoLocated,
    /// Moon trails the sun by half a turn
    #[default]
    Opposed,
}

/// Sweep of the celestial pivot over one cycle, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialTilt {
    pub min: f32,
    pub max: f32,
}

impl Default for CelestialTilt {
    fn default() -> Self {
        use crate::constants::celestial::{DEFAULT_TILT_MAX, DEFAULT_TILT_MIN};
        Self {
            min: DEFAULT_TILT_MIN,
            max: DEFAULT_TILT_MAX,
        }
    }
}

/// Base angles of both bodies at a time of day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialAngles {
    pub sun: f32,
    pub moon: f32,
}

impl CelestialAngles {
    pub fn at(time: f32, tilt: CelestialTilt, mode: MoonAngleMode) -> Self {
        let sun = lerp(tilt.min, tilt.max, time);
        let moon = match mode {
            MoonAngleMode::CoLocated => sun,
            MoonAngleMode::Opposed => sun - MOON_OPPOSITION_DEGREES,
        };
        Self { sun, moon }
    }

    pub fn of(&self, body: CelestialBody) -> f32 {
        match body {
            CelestialBody::Sun => self.sun,
            CelestialBody::Moon => self.moon,
        }
    }
}

/// Rotation about the tilt (X) axis
pub fn tilt_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_x(degrees.to_radians())
}

/// Direction a light with this rotation shines toward
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}

/// Evaluated state of a directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialLight {
    pub body: CelestialBody,
    /// Final angle about the tilt axis, in degrees
    pub angle: f32,
    pub rotation: Quat,
    pub intensity: f32,
    pub color: Vec4,
    pub shadow_strength: f32,
}

impl CelestialLight {
    /// Build a light from its base angle and curve sample
    ///
    /// The orientation leans by `curve_value * offset` degrees so the light
    /// rises a little ahead of its pivot as it brightens.
    pub fn new(
        body: CelestialBody,
        base_angle: f32,
        curve_value: f32,
        offset: f32,
        intensity: f32,
        color: Vec4,
        shadow_strength: f32,
    ) -> Self {
        let angle = base_angle + curve_value * offset;
        Self {
            body,
            angle,
            rotation: tilt_rotation(angle),
            intensity,
            color,
            shadow_strength,
        }
    }

    pub fn direction(&self) -> Vec3 {
        forward(self.rotation)
    }
}
