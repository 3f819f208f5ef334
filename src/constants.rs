// Day Cycle Constants - SINGLE SOURCE OF TRUTH
//
// Default values for the day/night model live here. Configuration files
// override them; nothing else in the crate hardcodes these numbers.

/// Cycle timing defaults
pub mod cycle {
    /// Length of a full day in real-time minutes
    pub const DEFAULT_DAY_LENGTH_MINUTES: f32 = 2.0;

    /// Seconds per minute, used to turn the day length into a cycle rate
    pub const SECONDS_PER_MINUTE: f32 = 60.0;

    /// Starting time of day (normalized)
    pub const DEFAULT_START_TIME: f32 = 0.25;
}

/// Phase boundary presets
pub mod phases {
    /// Evenly spaced quarter boundaries
    pub const EVEN_BOUNDARIES: [f32; 4] = [0.125, 0.375, 0.625, 0.875];

    /// Boundaries with a shortened sunset and a long night
    pub const LEGACY_BOUNDARIES: [f32; 4] = [0.125, 0.375, 0.62, 0.80];
}

/// Celestial light defaults
pub mod celestial {
    /// Tilt angle (degrees) at time 0 and time 1
    pub const DEFAULT_TILT_MIN: f32 = -90.0;
    pub const DEFAULT_TILT_MAX: f32 = 270.0;

    /// Moon sits half a turn behind the sun in opposed mode
    pub const MOON_OPPOSITION_DEGREES: f32 = 180.0;

    /// Intensity multiplier applied to both sun and moon
    pub const DEFAULT_SHARED_MULTIPLIER: f32 = 2.5;

    /// Orientation offset per unit of curve intensity
    pub const DEFAULT_SUN_OFFSET: f32 = 1.0;
    pub const DEFAULT_MOON_OFFSET: f32 = 1.0;
}

/// Ambient lighting defaults
pub mod ambient {
    /// Upper bound on the fill light intensity
    pub const DEFAULT_FILL_INTENSITY: f32 = 0.25;

    /// Fill light stays this far below the dominant light
    pub const FILL_HEADROOM: f32 = 0.1;

    pub const DEFAULT_ZENITH_MULTIPLIER: f32 = 1.2;
    pub const DEFAULT_MID_MULTIPLIER: f32 = 0.95;
    pub const DEFAULT_HORIZON_MULTIPLIER: f32 = 0.8;

    /// Minimum seconds between environment color pushes
    pub const DEFAULT_ENV_UPDATE_INTERVAL: f32 = 0.1;
}
