use std::time::Duration;

use glam::Vec3;

use crate::config::DayCycleConfig;
use crate::error::ConfigResult;
use crate::lighting::PhaseColors;
use crate::time::{
    AmbientEnvironment, CelestialAngles, CelestialBody, CelestialLight, DayPhase, FillLight,
    PhaseBlend, TimeOfDay,
};

/// Everything the renderer needs for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingFrame {
    pub time_of_day: TimeOfDay,
    pub phase: PhaseBlend,
    /// Light with the higher scaled intensity
    pub dominant: CelestialLight,
    pub secondary: CelestialLight,
    /// Sky material directions
    pub sun_direction: Vec3,
    pub moon_direction: Vec3,
    pub sky: PhaseColors,
    pub ambient: PhaseColors,
    pub ambient_environment: AmbientEnvironment,
    pub fill: FillLight,
}

impl LightingFrame {
    pub fn light(&self, body: CelestialBody) -> &CelestialLight {
        if self.dominant.body == body {
            &self.dominant
        } else {
            &self.secondary
        }
    }
}

/// Stateless evaluator over a validated configuration
#[derive(Debug, Clone)]
pub struct DayPhaseModel {
    config: DayCycleConfig,
}

impl DayPhaseModel {
    /// Build a model, validating the configuration first
    pub fn new(config: DayCycleConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DayCycleConfig {
        &self.config
    }

    /// Cycle length in seconds
    pub fn cycle_length(&self) -> f32 {
        self.config.cycle_length_secs()
    }

    /// Advance `time` by `dt` seconds of real time
    pub fn advance(&self, time: &mut TimeOfDay, dt: f32) -> TimeOfDay {
        time.advance(dt, self.cycle_length())
    }

    pub fn resolve_phase(&self, time: TimeOfDay) -> PhaseBlend {
        self.config.boundaries.resolve(time)
    }

    /// Evaluate all lighting outputs for a time of day
    pub fn evaluate(&self, time: TimeOfDay) -> LightingFrame {
        let cfg = &self.config;
        let x = time.normalized();

        let sun_eval = cfg.sun_intensity.sample(x);
        let moon_eval = cfg.moon_intensity.sample(x);
        let sun_blend = cfg.sun_blend.sample_unit(x);
        let moon_blend = cfg.moon_blend.sample_unit(x);

        let angles = CelestialAngles::at(x, cfg.tilt, cfg.moon_mode);

        let sun = CelestialLight::new(
            CelestialBody::Sun,
            angles.sun,
            sun_eval,
            cfg.sun_offset,
            sun_eval * cfg.shared_intensity_multiplier,
            cfg.sun_color.evaluate(x),
            sun_blend,
        );
        let moon = CelestialLight::new(
            CelestialBody::Moon,
            angles.moon,
            moon_eval,
            cfg.moon_offset,
            moon_eval * cfg.shared_intensity_multiplier,
            cfg.moon_color.evaluate(x),
            moon_blend,
        );

        // Sun wins ties
        let (dominant, secondary) = if sun.intensity >= moon.intensity {
            (sun, moon)
        } else {
            (moon, sun)
        };

        let phase = self.resolve_phase(time);
        let sky = cfg.sky_palette.blend(&phase);
        let ambient = cfg.ambient_palette.blend(&phase);

        let fill = cfg
            .ambient
            .fill_light(angles.of(dominant.body), dominant.intensity, &ambient);

        LightingFrame {
            time_of_day: time,
            phase,
            dominant,
            secondary,
            sun_direction: sun.direction(),
            moon_direction: moon.direction(),
            sky,
            ambient,
            ambient_environment: cfg.ambient.environment(&ambient),
            fill,
        }
    }
}

/// Driver that owns the time of day and ticks the model
pub struct DayNightCycle {
    model: DayPhaseModel,
    time_of_day: TimeOfDay,
    auto_run: bool,
    /// Completed cycles
    day_count: u32,
    /// Real seconds since the driver started
    elapsed: f64,
    last_phase: Option<DayPhase>,
}

impl DayNightCycle {
    pub fn new(config: DayCycleConfig) -> ConfigResult<Self> {
        let time_of_day = config.start_time;
        let auto_run = config.auto_run;
        Ok(Self::with_model(DayPhaseModel::new(config)?, time_of_day, auto_run))
    }

    pub fn with_model(model: DayPhaseModel, start_time: TimeOfDay, auto_run: bool) -> Self {
        Self {
            model,
            time_of_day: start_time,
            auto_run,
            day_count: 0,
            elapsed: 0.0,
            last_phase: None,
        }
    }

    /// Advance time (when running) and evaluate the new frame
    pub fn update(&mut self, dt: Duration) -> LightingFrame {
        let dt_secs = dt.as_secs_f32();
        self.elapsed += dt.as_secs_f64();

        if self.auto_run {
            let wraps = self.time_of_day.wraps_in(dt_secs, self.model.cycle_length());
            self.model.advance(&mut self.time_of_day, dt_secs);
            if wraps > 0 {
                self.day_count = self.day_count.wrapping_add(wraps);
                log::debug!("Day cycle wrapped, day count {}", self.day_count);
            }
        }

        let frame = self.model.evaluate(self.time_of_day);

        if self.last_phase != Some(frame.phase.current) {
            log::debug!(
                "Entering {} at {} (dominant {:?})",
                frame.phase.current.name(),
                self.time_of_day.format(),
                frame.dominant.body
            );
            self.last_phase = Some(frame.phase.current);
        }

        frame
    }

    /// Evaluate without advancing
    pub fn current_frame(&self) -> LightingFrame {
        self.model.evaluate(self.time_of_day)
    }

    pub fn model(&self) -> &DayPhaseModel {
        &self.model
    }

    pub fn get_time(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn set_time(&mut self, time: TimeOfDay) {
        self.time_of_day = time;
    }

    pub fn phase(&self) -> DayPhase {
        self.model.resolve_phase(self.time_of_day).current
    }

    pub fn set_auto_run(&mut self, auto_run: bool) {
        self.auto_run = auto_run;
    }

    pub fn is_auto_running(&self) -> bool {
        self.auto_run
    }

    pub fn get_day_count(&self) -> u32 {
        self.day_count
    }

    /// Real seconds fed into the driver so far
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Jump to the start of the next phase
    pub fn skip_to_next_phase(&mut self) {
        let [b0, b1, b2, b3] = self.model.config().boundaries.as_array();
        let start = match self.phase().next() {
            DayPhase::Sunrise => b0,
            DayPhase::Day => b1,
            DayPhase::Sunset => b2,
            DayPhase::Night => b3,
        };
        if start < self.time_of_day.normalized() {
            self.day_count = self.day_count.wrapping_add(1);
        }
        self.time_of_day = TimeOfDay::new(start);
    }
}
