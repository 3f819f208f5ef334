pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod lighting;
pub mod time;
pub mod utils;

pub use config::{ConfigFormat, DayCycleConfig};
pub use environment::{
    AmbientSink, EnvironmentPresenter, LightSink, SkyColorSlot, SkyMaterialSink, SkyMaterialSource,
};
pub use error::{ConfigError, ConfigResult};
pub use lighting::{ColorGradient, Curve, PhaseColors, PhasePalette};
pub use time::{
    CelestialBody, DayNightCycle, DayPhase, DayPhaseModel, LightingFrame, MoonAngleMode,
    PhaseBlend, PhaseBoundaries, TimeOfDay,
};
