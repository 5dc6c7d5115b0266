//! Offline verification of the element table.
//!
//! Not part of the runtime tick loop: run it from a test, a debug console,
//! or at binary startup to confirm the dataset still satisfies the
//! invariants the updater relies on.

use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::elements::{BodyId, ElementsError};
use crate::kepler;
use crate::sim::SolarSystem;

/// Scene-unit tolerance for the periodicity drift check.
///
/// With the fixed three-iteration solver the return-to-start error after
/// one full period is pure floating-point noise (the relaxation is exact
/// at M = 2π), so the bound can be tight.
const PERIODICITY_TOLERANCE: f64 = 1e-6;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SelfCheckError {
    #[error(transparent)]
    InvalidElements(#[from] ElementsError),

    #[error("expected exactly one non-orbiting body, found {0}")]
    WrongStarCount(usize),

    #[error("semi-major axes not strictly increasing: {prev} ({prev_axis}) >= {next} ({next_axis})")]
    NonMonotonicAxes {
        prev: BodyId,
        prev_axis: f64,
        next: BodyId,
        next_axis: f64,
    },

    #[error("{id}: position drifted {drift} scene units after one orbital period")]
    PeriodicityDrift { id: BodyId, drift: f64 },
}

/// Validate every body's element set and the exactly-one-star rule.
pub fn check_elements(system: &SolarSystem) -> Result<(), SelfCheckError> {
    for body in system.bodies() {
        body.validate()?;
    }
    let star_count = system.bodies().iter().filter(|b| b.orbit.is_none()).count();
    if star_count != 1 {
        return Err(SelfCheckError::WrongStarCount(star_count));
    }
    Ok(())
}

/// Verify planet semi-major axes strictly increase in orbit order.
pub fn check_semi_major_axes_monotonic(system: &SolarSystem) -> Result<(), SelfCheckError> {
    let mut prev: Option<(BodyId, f64)> = None;
    for &id in BodyId::PLANETS {
        let Some(body) = system.bodies().iter().find(|b| b.id == id) else {
            continue;
        };
        let Some(orbit) = &body.orbit else { continue };
        if let Some((prev_id, prev_axis)) = prev
            && orbit.semi_major_axis <= prev_axis
        {
            return Err(SelfCheckError::NonMonotonicAxes {
                prev: prev_id,
                prev_axis,
                next: id,
                next_axis: orbit.semi_major_axis,
            });
        }
        prev = Some((id, orbit.semi_major_axis));
    }
    Ok(())
}

/// Verify each orbiting body returns to its day-0 position after exactly
/// one orbital period.
pub fn check_periodicity(system: &SolarSystem) -> Result<(), SelfCheckError> {
    for body in system.bodies() {
        let Some(orbit) = &body.orbit else { continue };
        let start = kepler::position_at(orbit, 0.0, 1.0);
        let after_period = kepler::position_at(orbit, TAU, 1.0);
        let drift = (after_period - start).length();
        if drift > PERIODICITY_TOLERANCE {
            return Err(SelfCheckError::PeriodicityDrift { id: body.id, drift });
        }
    }
    Ok(())
}

/// Run every check, logging progress, and return the first failure.
pub fn run_all(system: &SolarSystem) -> Result<(), SelfCheckError> {
    check_elements(system)?;
    check_semi_major_axes_monotonic(system)?;
    check_periodicity(system)?;
    info!(
        "self-check passed for {} top-level bodies",
        system.bodies().len()
    );
    Ok(())
}
