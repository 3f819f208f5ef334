use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::utils::lerp_color;

/// A color stop on a gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub time: f32,
    /// Linear RGBA, HDR values allowed
    pub color: Vec4,
}

impl ColorKey {
    pub fn new(time: f32, color: Vec4) -> Self {
        Self { time, color }
    }
}

/// How colors are mixed between stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    #[default]
    Blend,
    /// Hold each stop until the next one
    Fixed,
}

/// Time to color mapping used for light tints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGradient {
    #[serde(default)]
    pub mode: GradientMode,
    pub keys: Vec<ColorKey>,
}

impl ColorGradient {
    pub fn new(keys: Vec<ColorKey>) -> Self {
        Self {
            keys,
            mode: GradientMode::Blend,
        }
    }

    pub fn solid(color: Vec4) -> Self {
        Self::new(vec![ColorKey::new(0.0, color)])
    }

    pub fn validate(&self, name: &str) -> ConfigResult<()> {
        if self.keys.is_empty() {
            return Err(ConfigError::EmptyGradient { name: name.to_string() });
        }
        if !self.keys.iter().all(|k| k.time.is_finite() && k.color.is_finite()) {
            return Err(ConfigError::non_finite(name));
        }
        if !self.keys.windows(2).all(|w| w[0].time < w[1].time) {
            return Err(ConfigError::UnsortedGradient { name: name.to_string() });
        }
        Ok(())
    }

    /// Color at `time`, holding the end stops outside their range
    pub fn evaluate(&self, time: f32) -> Vec4 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec4::ZERO,
        };

        if time.is_nan() || time <= first.time {
            return first.color;
        }
        if time >= last.time {
            return last.color;
        }

        let next_idx = self.keys.partition_point(|k| k.time <= time);
        let prev = &self.keys[next_idx - 1];
        let next = &self.keys[next_idx];

        match self.mode {
            GradientMode::Fixed => prev.color,
            GradientMode::Blend => {
                let t = (time - prev.time) / (next.time - prev.time);
                lerp_color(prev.color, next.color, t)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warm_to_cool() -> ColorGradient {
        ColorGradient::new(vec![
            ColorKey::new(0.0, Vec4::new(1.0, 0.5, 0.0, 1.0)),
            ColorKey::new(1.0, Vec4::new(0.0, 0.5, 1.0, 1.0)),
        ])
    }

    #[test]
    fn test_blend() {
        let gradient = warm_to_cool();
        assert_eq!(gradient.evaluate(0.5), Vec4::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(gradient.evaluate(0.0), Vec4::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(gradient.evaluate(1.0), Vec4::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn test_fixed_mode() {
        let mut gradient = warm_to_cool();
        gradient.mode = GradientMode::Fixed;
        assert_eq!(gradient.evaluate(0.9), Vec4::new(1.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn test_validation() {
        assert!(warm_to_cool().validate("sun").is_ok());
        assert!(matches!(
            ColorGradient::new(vec![]).validate("sun"),
            Err(ConfigError::EmptyGradient { .. })
        ));
        let tinted = ColorGradient::solid(Vec4::new(f32::NAN, 0.0, 0.0, 1.0));
        assert!(matches!(tinted.validate("sun"), Err(ConfigError::NonFinite { .. })));
        let unsorted = ColorGradient::new(vec![
            ColorKey::new(0.6, Vec4::ONE),
            ColorKey::new(0.3, Vec4::ZERO),
        ]);
        assert!(matches!(unsorted.validate("sun"), Err(ConfigError::UnsortedGradient { .. })));
    }

    #[test]
    fn test_nan_time_holds_first_stop() {
        assert_eq!(warm_to_cool().evaluate(f32::NAN), Vec4::new(1.0, 0.5, 0.0, 1.0));
    }
}
