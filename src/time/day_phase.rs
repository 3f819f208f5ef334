use serde::{Deserialize, Serialize};

use crate::constants::phases::{EVEN_BOUNDARIES, LEGACY_BOUNDARIES};
use crate::error::{ConfigError, ConfigResult};
use crate::time::TimeOfDay;
use crate::utils::inverse_lerp;

/// Phases of the day, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    Sunrise,
    Day,
    Sunset,
    Night,
}

impl DayPhase {
    pub const ALL: [DayPhase; 4] =
        [DayPhase::Sunrise, DayPhase::Day, DayPhase::Sunset, DayPhase::Night];

    /// The phase that follows this one
    pub fn next(&self) -> DayPhase {
        match self {
            DayPhase::Sunrise => DayPhase::Day,
            DayPhase::Day => DayPhase::Sunset,
            DayPhase::Sunset => DayPhase::Night,
            DayPhase::Night => DayPhase::Sunrise,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayPhase::Sunrise => "sunrise",
            DayPhase::Day => "day",
            DayPhase::Sunset => "sunset",
            DayPhase::Night => "night",
        }
    }
}

/// Where a time of day sits between two phases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBlend {
    pub current: DayPhase,
    pub next: DayPhase,
    /// 0 at the start of the current interval, 1 at its end
    pub t: f32,
}

/// Four increasing thresholds that split the cycle into phases
///
/// `[b0, b1)` is sunrise, `[b1, b2)` day, `[b2, b3)` sunset and the
/// wrapped interval `[b3, 1) ∪ [0, b0)` night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 4]", into = "[f32; 4]")]
pub struct PhaseBoundaries([f32; 4]);

impl PhaseBoundaries {
    /// Validate and wrap a boundary set
    pub fn new(boundaries: [f32; 4]) -> ConfigResult<Self> {
        let in_range = boundaries.iter().all(|b| b.is_finite() && *b > 0.0 && *b < 1.0);
        let increasing = boundaries.windows(2).all(|w| w[0] < w[1]);
        if !in_range || !increasing {
            return Err(ConfigError::InvalidBoundaries { boundaries });
        }
        Ok(Self(boundaries))
    }

    /// Evenly spaced quarters
    pub fn even() -> Self {
        Self(EVEN_BOUNDARIES)
    }

    /// Short sunset, long night
    pub fn legacy() -> Self {
        Self(LEGACY_BOUNDARIES)
    }

    pub fn as_array(&self) -> [f32; 4] {
        self.0
    }

    /// Resolve the active phase pair and blend fraction
    pub fn resolve(&self, time: TimeOfDay) -> PhaseBlend {
        let [b0, b1, b2, b3] = self.0;
        let x = time.normalized();

        let (current, start, end) = if x >= b0 && x < b1 {
            (DayPhase::Sunrise, b0, b1)
        } else if x >= b1 && x < b2 {
            (DayPhase::Day, b1, b2)
        } else if x >= b2 && x < b3 {
            (DayPhase::Sunset, b2, b3)
        } else if x >= b3 {
            (DayPhase::Night, b3, 1.0)
        } else {
            // Past the wrap point the night blend has already completed
            return PhaseBlend {
                current: DayPhase::Night,
                next: DayPhase::Sunrise,
                t: 1.0,
            };
        };

        PhaseBlend {
            current,
            next: current.next(),
            t: inverse_lerp(start, end, x),
        }
    }

    /// Phase active at the given time
    pub fn phase_at(&self, time: TimeOfDay) -> DayPhase {
        self.resolve(time).current
    }
}

impl Default for PhaseBoundaries {
    fn default() -> Self {
        Self::even()
    }
}

impl TryFrom<[f32; 4]> for PhaseBoundaries {
    type Error = ConfigError;

    fn try_from(boundaries: [f32; 4]) -> ConfigResult<Self> {
        Self::new(boundaries)
    }
}

impl From<PhaseBoundaries> for [f32; 4] {
    fn from(boundaries: PhaseBoundaries) -> Self {
        boundaries.0
    }
}
