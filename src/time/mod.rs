pub mod day_night_cycle;
pub mod time_of_day;
pub mod day_phase;
pub mod celestial;
pub mod ambient_light;

pub use day_night_cycle::{DayNightCycle, DayPhaseModel, LightingFrame};
pub use time_of_day::TimeOfDay;
pub use day_phase::{DayPhase, PhaseBlend, PhaseBoundaries};
pub use celestial::{CelestialAngles, CelestialBody, CelestialLight, CelestialTilt, MoonAngleMode};
pub use ambient_light::{
    calculate_fill_intensity, AmbientEnvironment, AmbientLightSettings, FillLight,
};
