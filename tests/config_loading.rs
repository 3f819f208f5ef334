//! Config files on disk: format detection, defaults and eager validation

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use day_cycle::{
    ConfigError, DayCycleConfig, DayNightCycle, DayPhase, MoonAngleMode, PhaseBoundaries,
};

/// Default config as a JSON value, for tests that edit individual fields
fn default_json() -> serde_json::Value {
    let text = DayCycleConfig::default().to_json_string().expect("serialize");
    serde_json::from_str(&text).expect("reparse")
}

#[test]
fn loads_toml_written_by_the_crate() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("day_cycle.toml");

    let mut config = DayCycleConfig::default();
    config.day_length_minutes = 24.0;
    config.moon_mode = MoonAngleMode::CoLocated;
    fs::write(&path, config.to_toml_string().expect("serialize")).expect("write config");

    let loaded = DayCycleConfig::load(&path).expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn loads_json() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("day_cycle.json");

    let mut value = default_json();
    value["day_length_minutes"] = json!(5.0);
    value["start_time"] = json!(0.9);
    value["boundaries"] = json!([0.125, 0.375, 0.62, 0.80]);
    value["sun_intensity"] = json!({ "keys": [{ "time": 0.0, "value": 0.5 }] });
    fs::write(&path, value.to_string()).expect("write config");

    let config = DayCycleConfig::load(&path).expect("load config");
    assert_eq!(config.boundaries, PhaseBoundaries::legacy());
    assert_eq!(config.sun_intensity.sample(0.7), 0.5);

    let cycle = DayNightCycle::new(config).expect("valid config");
    assert_eq!(cycle.phase(), DayPhase::Night);
}

#[test]
fn rejects_files_without_authored_data() {
    let dir = TempDir::new().expect("temp dir");

    let scalars_only = dir.path().join("scalars.toml");
    fs::write(&scalars_only, "day_length_minutes = 2.0\n").expect("write config");
    assert!(matches!(
        DayCycleConfig::load(&scalars_only),
        Err(ConfigError::Parse { .. })
    ));

    let mut value = default_json();
    if let Some(fields) = value.as_object_mut() {
        fields.remove("ambient_palette");
    }
    let no_palette = dir.path().join("no_palette.json");
    fs::write(&no_palette, value.to_string()).expect("write config");
    match DayCycleConfig::load(&no_palette) {
        Err(ConfigError::Parse { message }) => assert!(message.contains("ambient_palette")),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn rejects_invalid_files() {
    let dir = TempDir::new().expect("temp dir");

    let zero_length = dir.path().join("zero.toml");
    let config = DayCycleConfig {
        day_length_minutes: 0.0,
        ..Default::default()
    };
    fs::write(&zero_length, config.to_toml_string().expect("serialize")).expect("write config");
    assert!(matches!(
        DayCycleConfig::load(&zero_length),
        Err(ConfigError::NonPositiveDayLength { .. })
    ));

    let mut value = default_json();
    value["moon_intensity"] = json!({ "keys": [] });
    let empty_curve = dir.path().join("empty.json");
    fs::write(&empty_curve, value.to_string()).expect("write config");
    assert!(matches!(
        DayCycleConfig::load(&empty_curve),
        Err(ConfigError::EmptyCurve { .. })
    ));

    let yaml = dir.path().join("config.yaml");
    fs::write(&yaml, "day_length_minutes: 2").expect("write config");
    assert!(matches!(DayCycleConfig::load(&yaml), Err(ConfigError::UnknownFormat { .. })));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(DayCycleConfig::load(&missing), Err(ConfigError::Io { .. })));
}
