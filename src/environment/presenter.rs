use glam::Vec4;

use crate::environment::{AmbientSink, LightSink, SkyColorSlot, SkyMaterialSink};
use crate::time::{AmbientEnvironment, LightingFrame};

/// Counters for what actually reached the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentStats {
    pub frames: u64,
    pub environment_updates: u64,
    pub sky_colors_sent: u64,
    pub sky_colors_skipped: u64,
}

/// Pushes lighting frames into host sinks
///
/// Light orientation, intensity and sky directions go out every frame.
/// Ambient environment, fill light and sky colors are pushed at most once
/// per `interval` seconds, and a color slot is only re-sent when its value
/// changed.
pub struct EnvironmentPresenter {
    interval: f64,
    last_env_update: Option<f64>,
    last_sky: [Option<Vec4>; 3],
    last_ambient: Option<AmbientEnvironment>,
    stats: PresentStats,
}

impl EnvironmentPresenter {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval: interval_secs.max(0.0) as f64,
            last_env_update: None,
            last_sky: [None; 3],
            last_ambient: None,
            stats: PresentStats::default(),
        }
    }

    pub fn stats(&self) -> PresentStats {
        self.stats
    }

    /// Forget cached colors so the next environment update resends all
    pub fn invalidate(&mut self) {
        self.last_env_update = None;
        self.last_sky = [None; 3];
        self.last_ambient = None;
    }

    /// Present a frame at host time `now` (seconds)
    pub fn present(
        &mut self,
        frame: &LightingFrame,
        now: f64,
        lights: &mut dyn LightSink,
        sky: &mut dyn SkyMaterialSink,
        ambient: &mut dyn AmbientSink,
    ) {
        self.stats.frames += 1;

        lights.apply_main_light(&frame.dominant);
        sky.set_time_of_day(frame.time_of_day.normalized());
        sky.set_celestial_directions(frame.sun_direction, frame.moon_direction);

        let due = match self.last_env_update {
            None => true,
            Some(last) => now - last > self.interval,
        };
        if !due {
            return;
        }
        self.last_env_update = Some(now);
        self.stats.environment_updates += 1;

        if self.last_ambient != Some(frame.ambient_environment) {
            ambient.set_ambient(&frame.ambient_environment);
            self.last_ambient = Some(frame.ambient_environment);
        }
        lights.apply_fill_light(&frame.fill);

        for slot in SkyColorSlot::ALL {
            let color = match slot {
                SkyColorSlot::Zenith => frame.sky.zenith,
                SkyColorSlot::Mid => frame.sky.mid,
                SkyColorSlot::Horizon => frame.sky.horizon,
            };
            let cached = &mut self.last_sky[slot.index()];
            if *cached == Some(color) {
                self.stats.sky_colors_skipped += 1;
                continue;
            }
            sky.set_color(slot, color);
            *cached = Some(color);
            self.stats.sky_colors_sent += 1;
        }

        log::trace!(
            "Environment update at {:.3}s ({} sky colors sent, {} skipped)",
            now,
            self.stats.sky_colors_sent,
            self.stats.sky_colors_skipped
        );
    }
}
