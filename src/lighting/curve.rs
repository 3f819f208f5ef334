use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A single curve keyframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Time in cycle (0.0 - 1.0)
    pub time: f32,
    pub value: f32,
    /// Slope entering this key (Hermite mode only)
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving this key (Hermite mode only)
    #[serde(default)]
    pub out_tangent: f32,
}

impl CurveKey {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }
}

/// Interpolation mode between curve keyframes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveInterpolation {
    #[default]
    Linear,
    /// Cubic Hermite using the key tangents
    Hermite,
}

/// Time to scalar curve
///
/// Outside the key range the curve holds its first/last value. When a
/// `range` is declared every sample is clamped into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    #[serde(default)]
    pub interpolation: CurveInterpolation,
    #[serde(default)]
    pub range: Option<[f32; 2]>,
    pub keys: Vec<CurveKey>,
}

impl Curve {
    pub fn linear(keys: Vec<CurveKey>) -> Self {
        Self {
            keys,
            interpolation: CurveInterpolation::Linear,
            range: None,
        }
    }

    pub fn hermite(keys: Vec<CurveKey>) -> Self {
        Self {
            keys,
            interpolation: CurveInterpolation::Hermite,
            range: None,
        }
    }

    /// Flat curve with one key
    pub fn constant(value: f32) -> Self {
        Self::linear(vec![CurveKey::new(0.0, value)])
    }

    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.range = Some([min, max]);
        self
    }

    /// Check that the curve can be sampled
    pub fn validate(&self, name: &str) -> ConfigResult<()> {
        if self.keys.is_empty() {
            return Err(ConfigError::EmptyCurve { name: name.to_string() });
        }

        let finite = self.keys.iter().all(|k| {
            k.time.is_finite()
                && k.value.is_finite()
                && k.in_tangent.is_finite()
                && k.out_tangent.is_finite()
        });
        if !finite {
            return Err(ConfigError::non_finite(name));
        }
        if !self.keys.windows(2).all(|w| w[0].time < w[1].time) {
            return Err(ConfigError::UnsortedCurve { name: name.to_string() });
        }

        if let Some([min, max]) = self.range {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ConfigError::InvalidCurveRange {
                    name: name.to_string(),
                    min,
                    max,
                });
            }
        }

        Ok(())
    }

    /// Sample the curve, clamped to the declared range
    pub fn sample(&self, time: f32) -> f32 {
        let value = self.sample_raw(time);
        match self.range {
            Some([min, max]) => value.clamp(min, max),
            None => value,
        }
    }

    /// Sample and clamp into [0, 1]
    pub fn sample_unit(&self, time: f32) -> f32 {
        self.sample(time).clamp(0.0, 1.0)
    }

    fn sample_raw(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        // NaN falls through both comparisons below, so hold the first key
        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // First key strictly after `time`; never 0 because time > first.time
        let next_idx = self.keys.partition_point(|k| k.time <= time);
        let prev = &self.keys[next_idx - 1];
        let next = &self.keys[next_idx];

        let span = next.time - prev.time;
        let t = (time - prev.time) / span;

        match self.interpolation {
            CurveInterpolation::Linear => prev.value + (next.value - prev.value) * t,
            CurveInterpolation::Hermite => {
                let t2 = t * t;
                let t3 = t2 * t;
                let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
                let h10 = t3 - 2.0 * t2 + t;
                let h01 = -2.0 * t3 + 3.0 * t2;
                let h11 = t3 - t2;
                h00 * prev.value
                    + h10 * span * prev.out_tangent
                    + h01 * next.value
                    + h11 * span * next.in_tangent
            }
        }
    }
}
