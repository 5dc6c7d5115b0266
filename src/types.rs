//! Core constants and the simulation clock resource.

use bevy::prelude::*;

use crate::time::scale_from_control;

/// Scene units per astronomical unit.
pub const AU_TO_SCENE: f64 = 50.0;

/// Scene units per Earth radius (reference body for display sizes).
pub const EARTH_RADIUS_TO_SCENE: f64 = 1.0;

/// Scene units per kilometer of Earth-Moon distance.
/// Maps the 384,400 km lunar orbit to roughly 5 scene units.
pub const MOON_DISTANCE_TO_SCENE: f64 = 5.0 / 384_400.0;

/// Earth's mean radius in kilometers (reference for radius ratios).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Seconds per Earth day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Hours per Earth day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Simulation clock resource tracking elapsed simulated time.
///
/// `days` accumulates simulated Earth days since start. It decreases when
/// the time-control input is negative (time running backward); the Kepler
/// solver is valid for negative mean anomalies without modification.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Cumulative simulated days since start (signed)
    pub days: f64,
    /// Scale factor currently in effect, derived from the control input
    pub scale: f64,
    /// Simulated days elapsed during the last tick; consumed by spin accumulation
    pub delta_days: f64,
    /// Whether simulation is paused (a paused tick is a no-op)
    pub paused: bool,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            days: 0.0,
            scale: 1.0,
            delta_days: 0.0,
            paused: false,
        }
    }
}

impl SimulationTime {
    /// Advance the clock by `delta_real_secs` of wall-clock time under the
    /// given time-control input.
    ///
    /// Zero or negative real-time deltas are tolerated as no-ops; reverse
    /// time is expressed through a negative control input, not a negative
    /// real-time delta.
    pub fn advance(&mut self, delta_real_secs: f64, control: f64) {
        self.scale = scale_from_control(control);
        if self.paused || delta_real_secs <= 0.0 {
            self.delta_days = 0.0;
            return;
        }
        self.delta_days = delta_real_secs / SECONDS_PER_DAY * self.scale;
        self.days += self.delta_days;
    }

    /// Reset to simulated day 0.
    pub fn reset(&mut self) {
        self.days = 0.0;
        self.delta_days = 0.0;
        self.paused = true;
    }
}
