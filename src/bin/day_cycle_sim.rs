/// Headless day cycle driver
/// Runs the model for a number of ticks and prints what a renderer would receive
///
/// Usage: day_cycle_sim [config.toml|config.json] [ticks] [dt_seconds]

use std::time::Duration;

use anyhow::Context;
use day_cycle::environment::{
    AmbientSink, EnvironmentPresenter, LightSink, SkyColorSlot, SkyMaterialSink,
};
use day_cycle::time::{AmbientEnvironment, CelestialLight, FillLight};
use day_cycle::{DayCycleConfig, DayNightCycle};
use glam::{Vec3, Vec4};

/// Sink that logs everything it is handed
struct LogSink;

impl LightSink for LogSink {
    fn apply_main_light(&mut self, light: &CelestialLight) {
        log::trace!(
            "main light {:?} angle {:.2} intensity {:.3}",
            light.body,
            light.angle,
            light.intensity
        );
    }

    fn apply_fill_light(&mut self, fill: &FillLight) {
        log::debug!("fill light intensity {:.3}", fill.intensity);
    }
}

impl SkyMaterialSink for LogSink {
    fn set_time_of_day(&mut self, time: f32) {
        log::trace!("sky time {:.4}", time);
    }

    fn set_celestial_directions(&mut self, sun: Vec3, moon: Vec3) {
        log::trace!("sun dir {:?} moon dir {:?}", sun, moon);
    }

    fn set_color(&mut self, slot: SkyColorSlot, color: Vec4) {
        log::debug!("sky {:?} color {:?}", slot, color);
    }
}

impl AmbientSink for LogSink {
    fn set_ambient(&mut self, environment: &AmbientEnvironment) {
        log::debug!(
            "ambient sky {:?} equator {:?} ground {:?}",
            environment.sky,
            environment.equator,
            environment.ground
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first() {
        Some(path) => DayCycleConfig::load(path).with_context(|| format!("loading {}", path))?,
        None => {
            log::info!("No config given, using defaults");
            DayCycleConfig::default()
        }
    };
    let ticks: u32 = match args.get(1) {
        Some(raw) => raw.parse().context("ticks must be a whole number")?,
        None => 48,
    };
    let dt: f32 = match args.get(2) {
        Some(raw) => raw.parse().context("dt must be a number of seconds")?,
        None => config.cycle_length_secs() / ticks.max(1) as f32,
    };

    let mut presenter = EnvironmentPresenter::new(config.env_update_interval);
    let mut cycle = DayNightCycle::new(config)?;
    let (mut lights, mut sky, mut ambient) = (LogSink, LogSink, LogSink);

    log::info!("Simulating {} ticks of {:.3}s", ticks, dt);

    for _ in 0..ticks {
        let frame = cycle.update(Duration::from_secs_f32(dt.max(0.0)));
        presenter.present(&frame, cycle.elapsed_secs(), &mut lights, &mut sky, &mut ambient);

        println!(
            "{} {:>7} -> {:<7} t={:.3} {:?} intensity={:.3} fill={:.3} zenith=[{:.3}, {:.3}, {:.3}]",
            frame.time_of_day.format(),
            frame.phase.current.name(),
            frame.phase.next.name(),
            frame.phase.t,
            frame.dominant.body,
            frame.dominant.intensity,
            frame.fill.intensity,
            frame.sky.zenith.x,
            frame.sky.zenith.y,
            frame.sky.zenith.z,
        );
    }

    let stats = presenter.stats();
    log::info!(
        "Done after {} days: {} environment updates, {} sky colors sent, {} skipped",
        cycle.get_day_count(),
        stats.environment_updates,
        stats.sky_colors_sent,
        stats.sky_colors_skipped
    );

    Ok(())
}
