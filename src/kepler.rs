//! Kepler orbit solver and the orbital-plane-to-scene transform.
//!
//! The solver is a fixed three-iteration relaxation of Kepler's equation,
//! not Newton's method: the iteration count is the contract. For the
//! eccentricities in this system (<= ~0.21) three iterations keep the
//! residual well below visual tolerance, and a fixed count makes
//! trajectories exactly reproducible across runs.

use bevy::math::{DQuat, DVec3};

use crate::types::{AU_TO_SCENE, DEG_TO_RAD, MOON_DISTANCE_TO_SCENE};

/// Fixed relaxation iteration count. Changing this changes every simulated
/// trajectory, measurably so for Mercury; it is part of the contract.
pub const KEPLER_ITERATIONS: usize = 3;

/// Keplerian orbital elements, converted to scene units and radians.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Semi-major axis in scene units, before the orbit-scale factor
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 <= e < 1)
    pub eccentricity: f64,
    /// Orbital inclination in radians
    pub inclination: f64,
    /// Orbital period in Earth days
    pub period_days: f64,
}

impl Orbit {
    /// Heliocentric orbit from a semi-major axis in astronomical units.
    pub fn from_au(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        period_days: f64,
    ) -> Self {
        Self {
            semi_major_axis: semi_major_axis_au * AU_TO_SCENE,
            eccentricity,
            inclination: inclination_deg * DEG_TO_RAD,
            period_days,
        }
    }

    /// Parent-relative orbit from a semi-major axis in kilometers
    /// (the Earth-Moon distance mapping).
    pub fn from_km(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_deg: f64,
        period_days: f64,
    ) -> Self {
        Self {
            semi_major_axis: semi_major_axis_km * MOON_DISTANCE_TO_SCENE,
            eccentricity,
            inclination: inclination_deg * DEG_TO_RAD,
            period_days,
        }
    }
}

/// Solve Kepler's equation `E = M + e*sin(E)` for the eccentric anomaly.
///
/// Runs exactly [`KEPLER_ITERATIONS`] relaxation steps from `E = M`. Total
/// over all real `M` (including negative values for reverse time) and all
/// `e` in [0, 1); no normalization, no convergence check.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anomaly = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        e_anomaly = mean_anomaly + eccentricity * e_anomaly.sin();
    }
    e_anomaly
}

/// Position in the orbital plane before the inclination tilt.
///
/// The perifocal x-axis points toward perihelion: `x = a*(cos E - e)`,
/// `z = a*sqrt(1 - e^2)*sin E`, `y = 0`. Argument of periapsis and
/// longitude of ascending node are ignored; all orbits are coplanar except
/// for the single inclination rotation.
pub fn plane_position(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> DVec3 {
    let a = semi_major_axis;
    let e = eccentricity;
    let b = a * (1.0 - e * e).sqrt();
    DVec3::new(
        a * (eccentric_anomaly.cos() - e),
        0.0,
        b * eccentric_anomaly.sin(),
    )
}

/// Tilt an orbital-plane position into scene space by rotating about the
/// scene x-axis.
pub fn inclined_position(plane: DVec3, inclination: f64) -> DVec3 {
    DQuat::from_rotation_x(inclination) * plane
}

/// Scene-space position on an orbit at the given mean anomaly, with the
/// semi-major axis scaled by `orbit_scale`.
pub fn position_at(orbit: &Orbit, mean_anomaly: f64, orbit_scale: f64) -> DVec3 {
    let e_anomaly = solve_eccentric_anomaly(mean_anomaly, orbit.eccentricity);
    let plane = plane_position(
        orbit.semi_major_axis * orbit_scale,
        orbit.eccentricity,
        e_anomaly,
    );
    inclined_position(plane, orbit.inclination)
}
