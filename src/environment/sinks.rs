use glam::{Vec3, Vec4};

use crate::time::{AmbientEnvironment, CelestialLight, DayPhase, FillLight};

/// Named color slots on the sky material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyColorSlot {
    Zenith,
    Mid,
    Horizon,
}

impl SkyColorSlot {
    pub const ALL: [SkyColorSlot; 3] =
        [SkyColorSlot::Zenith, SkyColorSlot::Mid, SkyColorSlot::Horizon];

    pub fn index(&self) -> usize {
        match self {
            SkyColorSlot::Zenith => 0,
            SkyColorSlot::Mid => 1,
            SkyColorSlot::Horizon => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkyColorSlot::Zenith => "zenith",
            SkyColorSlot::Mid => "mid",
            SkyColorSlot::Horizon => "horizon",
        }
    }
}

/// Host directional lights
pub trait LightSink {
    /// Main light, driven by whichever body dominates
    fn apply_main_light(&mut self, light: &CelestialLight);

    fn apply_fill_light(&mut self, fill: &FillLight);
}

/// Host sky material parameters
pub trait SkyMaterialSink {
    fn set_time_of_day(&mut self, time: f32);

    fn set_celestial_directions(&mut self, sun: Vec3, moon: Vec3);

    fn set_color(&mut self, slot: SkyColorSlot, color: Vec4);
}

/// Per-phase colors already authored on a host sky material
///
/// Lets a palette be read back from the material instead of from config.
pub trait SkyMaterialSource {
    fn phase_color(&self, phase: DayPhase, slot: SkyColorSlot) -> Option<Vec4>;
}

/// Host global ambient lighting
pub trait AmbientSink {
    fn set_ambient(&mut self, environment: &AmbientEnvironment);
}
