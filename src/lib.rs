//! Orrery - Solar System Simulation Core
//!
//! Keplerian orbital mechanics and time integration for a star, eight
//! planets, and one moon: orbital elements, a fixed-iteration Kepler
//! solver, the orbital-plane-to-scene transform, variable time scaling,
//! and the display radius / detail-tier mapping policies. Presentation
//! (meshes, textures, lighting, cameras, UI) consumes the per-tick
//! [`sim::BodyStates`] output and owns the [`config::SimulationConfig`]
//! this core reads.

pub mod config;
pub mod elements;
pub mod kepler;
pub mod lod;
pub mod scaling;
pub mod selfcheck;
pub mod sim;
pub mod time;
pub mod types;

#[cfg(test)]
mod proptest_orbits;
