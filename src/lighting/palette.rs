use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::environment::{SkyColorSlot, SkyMaterialSource};
use crate::error::{ConfigError, ConfigResult};
use crate::time::{DayPhase, PhaseBlend};
use crate::utils::{inverse_lerp, lerp_color};

/// Zenith, mid and horizon colors for one phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseColors {
    pub zenith: Vec4,
    pub mid: Vec4,
    pub horizon: Vec4,
}

impl PhaseColors {
    pub fn new(zenith: Vec4, mid: Vec4, horizon: Vec4) -> Self {
        Self { zenith, mid, horizon }
    }

    /// Component-wise blend toward `other`
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            zenith: lerp_color(self.zenith, other.zenith, t),
            mid: lerp_color(self.mid, other.mid, t),
            horizon: lerp_color(self.horizon, other.horizon, t),
        }
    }

    /// Scale each band by its own multiplier, leaving alpha alone
    pub fn scaled(&self, zenith: f32, mid: f32, horizon: f32) -> Self {
        let scale = |color: Vec4, k: f32| (color.truncate() * k).extend(color.w);
        Self {
            zenith: scale(self.zenith, zenith),
            mid: scale(self.mid, mid),
            horizon: scale(self.horizon, horizon),
        }
    }

    pub fn slot(&self, slot: SkyColorSlot) -> Vec4 {
        match slot {
            SkyColorSlot::Zenith => self.zenith,
            SkyColorSlot::Mid => self.mid,
            SkyColorSlot::Horizon => self.horizon,
        }
    }

    /// Sky color seen along a world direction
    ///
    /// Looking straight down gives the horizon color, straight up the zenith.
    pub fn color_for_direction(&self, direction: Vec3) -> Vec4 {
        let y = direction.normalize_or_zero().y.clamp(-1.0, 1.0);
        let t = inverse_lerp(-1.0, 1.0, y);
        let bottom = lerp_color(self.horizon, self.mid, t);
        lerp_color(bottom, self.zenith, t)
    }

    fn is_finite(&self) -> bool {
        self.zenith.is_finite() && self.mid.is_finite() && self.horizon.is_finite()
    }
}

fn rgb(r: f32, g: f32, b: f32) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}

/// One color set per phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhasePalette {
    pub sunrise: PhaseColors,
    pub day: PhaseColors,
    pub sunset: PhaseColors,
    pub night: PhaseColors,
}

impl PhasePalette {
    /// Default sky palette
    pub fn sky() -> Self {
        Self {
            sunrise: PhaseColors::new(rgb(0.4, 0.3, 0.6), rgb(0.9, 0.55, 0.45), rgb(1.0, 0.6, 0.2)),
            day: PhaseColors::new(rgb(0.3, 0.5, 0.9), rgb(0.5, 0.65, 0.9), rgb(0.7, 0.8, 0.9)),
            sunset: PhaseColors::new(
                rgb(0.35, 0.25, 0.55),
                rgb(0.85, 0.45, 0.4),
                rgb(1.0, 0.5, 0.25),
            ),
            night: PhaseColors::new(
                rgb(0.02, 0.02, 0.08),
                rgb(0.03, 0.03, 0.11),
                rgb(0.05, 0.05, 0.15),
            ),
        }
    }

    /// Default ambient palette, dimmer than the sky
    pub fn ambient() -> Self {
        Self {
            sunrise: PhaseColors::new(
                rgb(0.6, 0.45, 0.4),
                rgb(0.9, 0.6, 0.4),
                rgb(0.5, 0.35, 0.25),
            ),
            day: PhaseColors::new(rgb(0.7, 0.8, 1.0), rgb(0.6, 0.65, 0.7), rgb(0.4, 0.38, 0.35)),
            sunset: PhaseColors::new(rgb(0.55, 0.4, 0.5), rgb(0.8, 0.5, 0.4), rgb(0.45, 0.3, 0.25)),
            night: PhaseColors::new(
                rgb(0.1, 0.1, 0.2),
                rgb(0.06, 0.06, 0.12),
                rgb(0.03, 0.03, 0.06),
            ),
        }
    }

    /// Read all twelve phase colors back from a sky material
    pub fn from_material(source: &dyn SkyMaterialSource) -> ConfigResult<Self> {
        let read = |phase: DayPhase| -> ConfigResult<PhaseColors> {
            let mut bands = [Vec4::ZERO; 3];
            for slot in SkyColorSlot::ALL {
                bands[slot.index()] = source.phase_color(phase, slot).ok_or(
                    ConfigError::MissingMaterialColor {
                        phase: phase.name(),
                        slot: slot.name(),
                    },
                )?;
            }
            Ok(PhaseColors::new(bands[0], bands[1], bands[2]))
        };

        let palette = Self {
            sunrise: read(DayPhase::Sunrise)?,
            day: read(DayPhase::Day)?,
            sunset: read(DayPhase::Sunset)?,
            night: read(DayPhase::Night)?,
        };
        palette.validate("material")?;
        Ok(palette)
    }

    pub fn colors(&self, phase: DayPhase) -> &PhaseColors {
        match phase {
            DayPhase::Sunrise => &self.sunrise,
            DayPhase::Day => &self.day,
            DayPhase::Sunset => &self.sunset,
            DayPhase::Night => &self.night,
        }
    }

    /// Blend the current and next phase colors
    pub fn blend(&self, blend: &PhaseBlend) -> PhaseColors {
        self.colors(blend.current).lerp(self.colors(blend.next), blend.t)
    }

    pub fn validate(&self, name: &str) -> ConfigResult<()> {
        for phase in DayPhase::ALL {
            if !self.colors(phase).is_finite() {
                return Err(ConfigError::non_finite(&format!("{}.{}", name, phase.name())));
            }
        }
        Ok(())
    }
}
