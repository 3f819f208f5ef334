use serde::{Deserialize, Serialize};

/// Normalized time of day in [0, 1)
///
/// 0 is the start of the cycle, 0.5 is half a cycle later. The value wraps
/// instead of growing past 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(f32);

impl TimeOfDay {
    /// Create a new time of day, wrapping into [0, 1)
    pub fn new(value: f32) -> Self {
        Self(wrap_unit(value))
    }

    /// Create from a 24-hour clock reading
    pub fn from_hours(hours: f32) -> Self {
        Self::new(hours / 24.0)
    }

    /// Normalized value in [0, 1)
    pub fn normalized(&self) -> f32 {
        self.0
    }

    /// Advance by `dt` seconds on a cycle lasting `cycle_length` seconds
    ///
    /// `cycle_length` is validated positive when the config is loaded.
    /// Negative `dt` is treated as zero.
    pub fn advance(&mut self, dt: f32, cycle_length: f32) -> Self {
        let step = dt.max(0.0) / cycle_length;
        self.0 = wrap_unit(self.0 + step);
        *self
    }

    /// Whole cycles crossed when advancing from `self` by `dt`
    pub fn wraps_in(&self, dt: f32, cycle_length: f32) -> u32 {
        ((self.0 + dt.max(0.0) / cycle_length).floor()) as u32
    }

    /// Equivalent reading on a 24-hour clock
    pub fn hours(&self) -> f32 {
        self.0 * 24.0
    }

    /// Format as HH:MM
    pub fn format(&self) -> String {
        let total_minutes = (self.0 * 24.0 * 60.0) as u32;
        format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::new(crate::constants::cycle::DEFAULT_START_TIME)
    }
}

impl From<TimeOfDay> for f32 {
    fn from(time: TimeOfDay) -> Self {
        time.0
    }
}

/// Reduce modulo 1 into [0, 1)
fn wrap_unit(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
