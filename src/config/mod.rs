//! Day cycle configuration
//!
//! Configuration is authored data: curves, gradients, palettes and phase
//! boundaries. It is loaded from TOML or JSON, validated once, and then
//! treated as read-only by the model.

use std::path::Path;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::constants::ambient::DEFAULT_ENV_UPDATE_INTERVAL;
use crate::constants::celestial::{
    DEFAULT_MOON_OFFSET, DEFAULT_SHARED_MULTIPLIER, DEFAULT_SUN_OFFSET,
};
use crate::constants::cycle::{DEFAULT_DAY_LENGTH_MINUTES, SECONDS_PER_MINUTE};
use crate::error::{ConfigError, ConfigResult};
use crate::environment::SkyMaterialSource;
use crate::lighting::{ColorGradient, ColorKey, Curve, CurveKey, PhasePalette};
use crate::time::{AmbientLightSettings, CelestialTilt, MoonAngleMode, PhaseBoundaries, TimeOfDay};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Full configuration of the day/night model
///
/// Scalar tunables fall back to their defaults when omitted. Curves,
/// gradients and palettes are authored data and must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCycleConfig {
    /// Real-time minutes for one full cycle
    #[serde(default = "default_day_length")]
    pub day_length_minutes: f32,
    #[serde(default)]
    pub start_time: TimeOfDay,
    /// Advance time automatically on each update
    #[serde(default = "default_auto_run")]
    pub auto_run: bool,

    #[serde(default)]
    pub boundaries: PhaseBoundaries,
    #[serde(default)]
    pub moon_mode: MoonAngleMode,

    /// Applied to both sun and moon curve samples
    #[serde(default = "default_multiplier")]
    pub shared_intensity_multiplier: f32,
    #[serde(default = "default_sun_offset")]
    pub sun_offset: f32,
    #[serde(default = "default_moon_offset")]
    pub moon_offset: f32,

    /// Minimum seconds between environment color pushes
    #[serde(default = "default_env_interval")]
    pub env_update_interval: f32,

    #[serde(default)]
    pub tilt: CelestialTilt,

    pub sun_intensity: Curve,
    pub moon_intensity: Curve,
    pub sun_blend: Curve,
    pub moon_blend: Curve,

    pub sun_color: ColorGradient,
    pub moon_color: ColorGradient,

    pub sky_palette: PhasePalette,
    pub ambient_palette: PhasePalette,
    #[serde(default)]
    pub ambient: AmbientLightSettings,
}

fn default_day_length() -> f32 {
    DEFAULT_DAY_LENGTH_MINUTES
}

fn default_auto_run() -> bool {
    true
}

fn default_multiplier() -> f32 {
    DEFAULT_SHARED_MULTIPLIER
}

fn default_sun_offset() -> f32 {
    DEFAULT_SUN_OFFSET
}

fn default_moon_offset() -> f32 {
    DEFAULT_MOON_OFFSET
}

fn default_env_interval() -> f32 {
    DEFAULT_ENV_UPDATE_INTERVAL
}

impl Default for DayCycleConfig {
    fn default() -> Self {
        Self {
            day_length_minutes: default_day_length(),
            start_time: TimeOfDay::default(),
            auto_run: default_auto_run(),
            boundaries: PhaseBoundaries::default(),
            tilt: CelestialTilt::default(),
            moon_mode: MoonAngleMode::default(),
            shared_intensity_multiplier: default_multiplier(),
            sun_offset: default_sun_offset(),
            moon_offset: default_moon_offset(),
            sun_intensity: Curve::linear(vec![
                CurveKey::new(0.2, 0.0),
                CurveKey::new(0.5, 1.0),
                CurveKey::new(0.8, 0.0),
            ])
            .with_range(0.0, 1.0),
            moon_intensity: Curve::linear(vec![
                CurveKey::new(0.0, 0.3),
                CurveKey::new(0.25, 0.0),
                CurveKey::new(0.75, 0.0),
                CurveKey::new(1.0, 0.3),
            ])
            .with_range(0.0, 1.0),
            sun_blend: Curve::linear(vec![
                CurveKey::new(0.2, 0.0),
                CurveKey::new(0.3, 1.0),
                CurveKey::new(0.7, 1.0),
                CurveKey::new(0.8, 0.0),
            ]),
            moon_blend: Curve::constant(0.6),
            sun_color: ColorGradient::new(vec![
                ColorKey::new(0.25, Vec4::new(1.0, 0.6, 0.35, 1.0)),
                ColorKey::new(0.5, Vec4::new(1.0, 0.95, 0.85, 1.0)),
                ColorKey::new(0.75, Vec4::new(1.0, 0.5, 0.3, 1.0)),
            ]),
            moon_color: ColorGradient::solid(Vec4::new(0.7, 0.75, 0.95, 1.0)),
            sky_palette: PhasePalette::sky(),
            ambient_palette: PhasePalette::ambient(),
            ambient: AmbientLightSettings::default(),
            env_update_interval: default_env_interval(),
        }
    }
}

impl DayCycleConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        })?;
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&raw, format)?;
        log::info!("Loaded day cycle config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text
    pub fn parse(raw: &str, format: ConfigFormat) -> ConfigResult<Self> {
        let config: Self = match format {
            ConfigFormat::Toml => toml::from_str(raw).map_err(ConfigError::parse)?,
            ConfigFormat::Json => serde_json::from_str(raw).map_err(ConfigError::parse)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(ConfigError::parse)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::parse)
    }

    /// Reject every malformed setting up front
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.day_length_minutes.is_finite() && self.day_length_minutes > 0.0) {
            return Err(ConfigError::NonPositiveDayLength {
                minutes: self.day_length_minutes,
            });
        }
        let multiplier = self.shared_intensity_multiplier;
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(ConfigError::NonPositiveMultiplier { value: multiplier });
        }

        PhaseBoundaries::new(self.boundaries.as_array())?;

        let start = self.start_time.normalized();
        if !(0.0..1.0).contains(&start) {
            return Err(ConfigError::invalid_value("start_time", start));
        }

        for (field, value) in [
            ("tilt.min", self.tilt.min),
            ("tilt.max", self.tilt.max),
            ("sun_offset", self.sun_offset),
            ("moon_offset", self.moon_offset),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid_value(field, value));
            }
        }

        for (field, value) in [
            ("env_update_interval", self.env_update_interval),
            ("ambient.fill_intensity", self.ambient.fill_intensity),
            ("ambient.zenith_multiplier", self.ambient.zenith_multiplier),
            ("ambient.mid_multiplier", self.ambient.mid_multiplier),
            ("ambient.horizon_multiplier", self.ambient.horizon_multiplier),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid_value(field, value));
            }
        }

        self.sun_intensity.validate("sun_intensity")?;
        self.moon_intensity.validate("moon_intensity")?;
        self.sun_blend.validate("sun_blend")?;
        self.moon_blend.validate("moon_blend")?;
        self.sun_color.validate("sun_color")?;
        self.moon_color.validate("moon_color")?;
        self.sky_palette.validate("sky_palette")?;
        self.ambient_palette.validate("ambient_palette")?;

        Ok(())
    }

    /// Cycle length in seconds
    pub fn cycle_length_secs(&self) -> f32 {
        self.day_length_minutes * SECONDS_PER_MINUTE
    }

    /// Replace the sky palette with the colors authored on a sky material
    ///
    /// Leaves the config untouched when any of the colors is missing.
    pub fn copy_sky_from_material(&mut self, source: &dyn SkyMaterialSource) -> ConfigResult<()> {
        self.sky_palette = PhasePalette::from_material(source)?;
        Ok(())
    }

    /// Reuse the sky palette for ambient lighting
    pub fn copy_sky_to_ambient(&mut self) {
        self.ambient_palette = self.sky_palette;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::SkyColorSlot;
    use crate::time::DayPhase;

    #[test]
    fn test_default_is_valid() {
        assert!(DayCycleConfig::default().validate().is_ok());
        assert_eq!(DayCycleConfig::default().cycle_length_secs(), 120.0);
    }

    #[test]
    fn test_rejects_zero_day_length() {
        let config = DayCycleConfig {
            day_length_minutes: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonPositiveDayLength { .. })));
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let config = DayCycleConfig {
            shared_intensity_multiplier: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonPositiveMultiplier { .. })));
    }

    #[test]
    fn test_rejects_missing_curve_data() {
        let config = DayCycleConfig {
            moon_blend: Curve::linear(vec![]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyCurve { .. })));

        let config = DayCycleConfig {
            sun_color: ColorGradient::new(vec![]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGradient { .. })));
    }

    #[test]
    fn test_rejects_negative_interval() {
        let config = DayCycleConfig {
            env_update_interval: -0.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DayCycleConfig::default();
        let text = config.to_toml_string().expect("serialize");
        let parsed = DayCycleConfig::parse(&text, ConfigFormat::Toml).expect("parse");
        assert_eq!(parsed, config);
    }

    /// Default config as TOML with the named top-level tables removed
    fn toml_without(tables: &[&str]) -> String {
        let text = DayCycleConfig::default().to_toml_string().expect("serialize");
        let mut value: toml::Table = toml::from_str(&text).expect("reparse");
        for table in tables {
            value.remove(*table);
        }
        toml::to_string(&value).expect("serialize table")
    }

    #[test]
    fn test_omitted_scalars_use_defaults() {
        let raw =
            toml_without(&["day_length_minutes", "moon_mode", "env_update_interval", "ambient"]);
        let config = DayCycleConfig::parse(&raw, ConfigFormat::Toml).expect("parse");
        assert_eq!(config.cycle_length_secs(), 120.0);
        assert_eq!(config.moon_mode, MoonAngleMode::Opposed);
        assert_eq!(config.env_update_interval, DEFAULT_ENV_UPDATE_INTERVAL);
        assert_eq!(config.ambient, AmbientLightSettings::default());
    }

    #[test]
    fn test_rejects_missing_authored_data() {
        assert!(matches!(
            DayCycleConfig::parse("day_length_minutes = 2.0\n", ConfigFormat::Toml),
            Err(ConfigError::Parse { .. })
        ));

        for field in [
            "sun_intensity",
            "moon_intensity",
            "sun_blend",
            "moon_blend",
            "sun_color",
            "moon_color",
            "sky_palette",
            "ambient_palette",
        ] {
            match DayCycleConfig::parse(&toml_without(&[field]), ConfigFormat::Toml) {
                Err(ConfigError::Parse { message }) => {
                    assert!(message.contains(field), "{}", message)
                }
                other => panic!("config without {} was accepted: {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_unsorted_boundaries_fail_to_parse() {
        let text = DayCycleConfig::default().to_json_string().expect("serialize");
        let mut value: serde_json::Value = serde_json::from_str(&text).expect("reparse");
        value["boundaries"] = serde_json::json!([0.5, 0.375, 0.62, 0.80]);
        assert!(matches!(
            DayCycleConfig::parse(&value.to_string(), ConfigFormat::Json),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("sky.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("sky.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("sky.yaml")), None);
    }

    #[test]
    fn test_copy_sky_from_material() {
        struct FlatMaterial(Option<Vec4>);

        impl SkyMaterialSource for FlatMaterial {
            fn phase_color(&self, _phase: DayPhase, _slot: SkyColorSlot) -> Option<Vec4> {
                self.0
            }
        }

        let mut config = DayCycleConfig::default();
        assert!(config.copy_sky_from_material(&FlatMaterial(None)).is_err());
        assert_eq!(config.sky_palette, PhasePalette::sky());

        let grey = Vec4::new(0.5, 0.5, 0.5, 1.0);
        config.copy_sky_from_material(&FlatMaterial(Some(grey))).expect("copy");
        assert_eq!(config.sky_palette.night.zenith, grey);
        assert_eq!(config.sky_palette.sunrise.horizon, grey);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_copy_sky_to_ambient() {
        let mut config = DayCycleConfig::default();
        config.copy_sky_to_ambient();
        assert_eq!(config.ambient_palette, config.sky_palette);
    }
}
