//! Time advancement for the solar system simulation.
//!
//! Converts elapsed real time into simulated days under an exponential
//! time-scale control, and keeps the [`SimulationTime`] clock current.

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::types::SimulationTime;

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_time);
    }
}

/// Derive the time-scale factor from the bounded control input.
///
/// The mapping is exponential: `scale = sign(v) * 10^|v|`, with `v = 0`
/// mapping to exactly 1.0 (pure real time). A linear slider therefore gives
/// fine control near real-time and coarse control at extreme speeds.
/// Negative inputs run simulated time backward.
pub fn scale_from_control(v: f64) -> f64 {
    if v == 0.0 {
        return 1.0;
    }
    v.signum() * 10f64.powf(v.abs())
}

/// Advance simulated time based on the frame's real-time delta and the
/// current time-control input.
pub fn advance_time(
    mut sim_time: ResMut<SimulationTime>,
    config: Res<SimulationConfig>,
    time: Res<Time>,
) {
    let control = config.time_control();
    sim_time.advance(time.delta_secs_f64(), control);
}
