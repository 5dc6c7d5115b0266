//! Externally-owned simulation configuration.
//!
//! The presentation layer owns these values; the core reads them once per
//! tick. Invalid values are rejected at this boundary and the prior value
//! retained, so a bad UI input can never corrupt a tick in progress.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::scaling::SizeMode;

/// Bound of the symmetric time-control input range.
///
/// At the limit the simulation runs at 10^6 days per real day in either
/// direction, enough to watch Neptune complete an orbit in minutes.
pub const TIME_CONTROL_LIMIT: f64 = 6.0;

/// Errors from rejected configuration updates.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("orbit scale factor must be positive, got {0}")]
    NonPositiveOrbitScale(f64),

    #[error("unknown size mode {0:?} (expected \"real\" or \"log\")")]
    UnknownSizeMode(String),
}

/// Configuration resource read by the core each tick.
#[derive(Resource, Clone, Debug)]
pub struct SimulationConfig {
    /// Uniform multiplier on all displayed orbital distances (> 0)
    orbit_scale: f64,
    /// Bounded control input for the time scale, clamped to ±[`TIME_CONTROL_LIMIT`]
    time_control: f64,
    /// Display-radius mapping strategy
    pub size_mode: SizeMode,
    /// Viewpoint position in scene space, used for detail-tier selection
    pub viewpoint: DVec3,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            orbit_scale: 1.0,
            time_control: 0.0,
            size_mode: SizeMode::LogCompressed,
            viewpoint: DVec3::new(0.0, 120.0, 260.0),
        }
    }
}

impl SimulationConfig {
    /// Current orbit-scale factor (always positive).
    pub fn orbit_scale(&self) -> f64 {
        self.orbit_scale
    }

    /// Set the orbit-scale factor. Non-positive (or non-finite) values are
    /// rejected and the prior value is retained.
    pub fn set_orbit_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ConfigError::NonPositiveOrbitScale(scale));
        }
        self.orbit_scale = scale;
        Ok(())
    }

    /// Current time-control input.
    pub fn time_control(&self) -> f64 {
        self.time_control
    }

    /// Set the time-control input, clamped to the fixed symmetric range.
    pub fn set_time_control(&mut self, control: f64) {
        self.time_control = control.clamp(-TIME_CONTROL_LIMIT, TIME_CONTROL_LIMIT);
    }
}
