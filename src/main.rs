//! Orrery - Solar System Simulation Core
//!
//! Headless demo driver: verifies the element table, then advances the
//! simulation at an accelerated time scale for a fixed number of frames
//! and logs where everything ended up.

use bevy::prelude::*;

mod config;
mod elements;
mod kepler;
mod lod;
mod scaling;
mod selfcheck;
mod sim;
mod time;
mod types;

use config::SimulationConfig;
use sim::{BodyStates, SolarSystem, SolarSystemPlugin};
use types::SimulationTime;

/// Frames to run before reporting.
const DEMO_FRAMES: usize = 240;

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::log::LogPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SolarSystem::new())
        .insert_resource(SimulationTime::default())
        .insert_resource(demo_config())
        .add_plugins(SolarSystemPlugin);

    let system = app.world().resource::<SolarSystem>();
    if let Err(e) = selfcheck::run_all(system) {
        error!("element table self-check failed: {e}");
        std::process::exit(1);
    }

    for _ in 0..DEMO_FRAMES {
        app.update();
    }

    let clock = app.world().resource::<SimulationTime>();
    let states = app.world().resource::<BodyStates>();
    info!(
        "simulated {:.2} days at scale {:.0}",
        clock.days, clock.scale
    );
    for body in app.world().resource::<SolarSystem>().bodies() {
        report(states, body);
        if let Some(moon) = &body.moon {
            report(states, moon);
        }
    }
}

/// Run the demo at 10^4 days per real day so the inner planets visibly move.
fn demo_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.set_time_control(4.0);
    config
}

fn report(states: &BodyStates, body: &elements::BodyData) {
    if let (Some(state), Some(world)) = (states.get(body.id), states.world_position(body.id)) {
        info!(
            "{:>8}: pos ({:8.2}, {:6.2}, {:8.2})  spin {:9.2} rad  radius x{:.3}  {:?}",
            body.id.name(),
            world.x,
            world.y,
            world.z,
            state.spin_angle,
            state.radius_scale,
            state.tier,
        );
    }
}
