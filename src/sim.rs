//! Per-tick body state computation.
//!
//! Once per tick, every body's position, spin angle, display-radius
//! multiplier, and detail tier are recomputed from the immutable element
//! table, the simulation clock, and the current configuration. States are
//! computed into a fresh map and published wholesale, so readers never
//! observe a partially updated body set.

use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::elements::{BodyData, BodyId, ElementsError, all_bodies};
use crate::kepler;
use crate::lod::{self, DetailTier};
use crate::scaling::map_radius;
use crate::time::{TimePlugin, advance_time};
use crate::types::{EARTH_RADIUS_KM, HOURS_PER_DAY, SimulationTime};

/// Plugin wiring the per-tick state update after time advancement.
pub struct SolarSystemPlugin;

impl Plugin for SolarSystemPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<TimePlugin>() {
            app.add_plugins(TimePlugin);
        }
        app.init_resource::<BodyStates>()
            .add_systems(Update, update_body_states.after(advance_time));
    }
}

/// Derived per-tick state of one body. Never persisted; fully recomputed
/// each tick except for the spin angle, which is a running total.
#[derive(Clone, Debug)]
pub struct BodyState {
    /// Position in scene space. For the Moon this is relative to Earth's
    /// local frame; compose with [`BodyStates::world_position`].
    pub position: DVec3,
    /// Accumulated spin angle in radians, unbounded. Wrap modulo 2π at the
    /// presentation boundary, not here.
    pub spin_angle: f64,
    /// Display-radius multiplier in effect for the current size mode
    pub radius_scale: f64,
    /// Detail tier for the current viewpoint
    pub tier: DetailTier,
}

/// Published outputs of the last completed tick.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyStates {
    /// Simulated days the states were computed at
    pub days: f64,
    states: HashMap<BodyId, BodyState>,
}

impl BodyStates {
    /// State of a body as of the last completed tick.
    pub fn get(&self, id: BodyId) -> Option<&BodyState> {
        self.states.get(&id)
    }

    /// Iterate over all published states.
    pub fn iter(&self) -> impl Iterator<Item = (&BodyId, &BodyState)> {
        self.states.iter()
    }

    /// Scene-space position with parent-local frames composed (the Moon's
    /// position added to Earth's).
    pub fn world_position(&self, id: BodyId) -> Option<DVec3> {
        let state = self.states.get(&id)?;
        match id.parent() {
            Some(parent) if parent != BodyId::Sun => {
                Some(self.world_position(parent)? + state.position)
            }
            _ => Some(state.position),
        }
    }
}

/// The immutable element table, loaded once at startup.
#[derive(Resource, Clone, Debug)]
pub struct SolarSystem {
    bodies: Vec<BodyData>,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            bodies: all_bodies(),
        }
    }

    /// Build from an explicit element table (tests, alternate datasets).
    pub fn from_bodies(bodies: Vec<BodyData>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[BodyData] {
        &self.bodies
    }

    /// Compute and publish all body states for the current tick.
    ///
    /// On invalid elements the error is returned, nothing is published,
    /// and the previously published states remain readable.
    pub fn compute_states(
        &self,
        clock: &SimulationTime,
        config: &SimulationConfig,
        out: &mut BodyStates,
    ) -> Result<(), ElementsError> {
        let mut next = HashMap::with_capacity(self.bodies.len() + 1);

        for body in &self.bodies {
            body.validate()?;

            let position = match &body.orbit {
                // The central star has no orbital motion
                None => DVec3::ZERO,
                Some(orbit) => {
                    let mean_anomaly = TAU * clock.days / orbit.period_days;
                    kepler::position_at(orbit, mean_anomaly, config.orbit_scale())
                }
            };
            next.insert(
                body.id,
                self.body_state(body, position, position, clock, config, &out.states),
            );

            // validate() above guarantees a nested moon carries an orbit
            if let Some(moon) = &body.moon
                && let Some(orbit) = &moon.orbit
            {
                let mean_anomaly = TAU * clock.days / orbit.period_days;
                let local = kepler::position_at(orbit, mean_anomaly, config.orbit_scale());
                next.insert(
                    moon.id,
                    self.body_state(moon, local, position + local, clock, config, &out.states),
                );
            }
        }

        out.days = clock.days;
        out.states = next;
        Ok(())
    }

    fn body_state(
        &self,
        body: &BodyData,
        position: DVec3,
        world_position: DVec3,
        clock: &SimulationTime,
        config: &SimulationConfig,
        previous: &HashMap<BodyId, BodyState>,
    ) -> BodyState {
        let prev_spin = previous.get(&body.id).map_or(0.0, |s| s.spin_angle);
        BodyState {
            position,
            spin_angle: accumulate_spin(prev_spin, body.rotation_period_hours, clock.delta_days),
            radius_scale: map_radius(config.size_mode, body.radius_km / EARTH_RADIUS_KM),
            tier: lod::classify((world_position - config.viewpoint).length()),
        }
    }
}

/// Advance a spin angle by one tick.
///
/// A rotation period of exactly 0 means the body does not spin; it is
/// skipped rather than divided by. Negative periods spin retrograde.
fn accumulate_spin(prev: f64, rotation_period_hours: f64, delta_days: f64) -> f64 {
    if rotation_period_hours == 0.0 {
        return prev;
    }
    let angular_speed = TAU / (rotation_period_hours / HOURS_PER_DAY);
    prev + angular_speed * delta_days
}

/// Recompute all body states after the clock has advanced.
pub fn update_body_states(
    system: Res<SolarSystem>,
    clock: Res<SimulationTime>,
    config: Res<SimulationConfig>,
    mut states: ResMut<BodyStates>,
) {
    if let Err(e) = system.compute_states(&clock, &config, &mut states) {
        error!("body state computation failed: {e}");
    }
}
