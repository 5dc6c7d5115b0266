//! Shared fixtures for integration tests.

use bevy::prelude::*;

use orrery::config::SimulationConfig;
use orrery::sim::{SolarSystem, SolarSystemPlugin};
use orrery::types::SimulationTime;

/// Build a headless app with the full simulation wired up.
pub fn create_sim_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SolarSystem::new())
        .insert_resource(SimulationTime::default())
        .insert_resource(SimulationConfig::default())
        .add_plugins(SolarSystemPlugin);
    app
}
