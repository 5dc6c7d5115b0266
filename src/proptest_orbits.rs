//! Property-based tests for the orbital core using proptest.

use proptest::prelude::*;
use std::f64::consts::TAU;

use crate::kepler::{plane_position, position_at, solve_eccentric_anomaly, Orbit};
use crate::scaling::{map_radius, SizeMode};
use crate::time::scale_from_control;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The fixed three-iteration solver keeps the Kepler-equation residual
    /// bounded across the system's eccentricity range and several orbits of
    /// mean anomaly in both directions.
    ///
    /// The bound is empirical, not exact: with contraction factor e per
    /// relaxation step the residual after three steps is below e^4 * (1+e),
    /// which for e = 0.25 is under 5e-3.
    #[test]
    fn prop_kepler_residual_bounded(
        mean_anomaly in (-2.0 * TAU)..(2.0 * TAU),
        eccentricity in 0.0f64..0.25,
    ) {
        let e_anom = solve_eccentric_anomaly(mean_anomaly, eccentricity);
        let residual = (e_anom - eccentricity * e_anom.sin() - mean_anomaly).abs();
        prop_assert!(
            residual < 1e-2,
            "residual {} for M={}, e={}",
            residual, mean_anomaly, eccentricity
        );
    }

    /// Plane positions stay on the orbit's bounding ellipse: |x| <= a(1+e),
    /// |z| <= b.
    #[test]
    fn prop_plane_position_within_ellipse_bounds(
        eccentric_anomaly in (-2.0 * TAU)..(2.0 * TAU),
        eccentricity in 0.0f64..0.25,
    ) {
        let a = 50.0;
        let pos = plane_position(a, eccentricity, eccentric_anomaly);
        prop_assert!(pos.x.abs() <= a * (1.0 + eccentricity) + 1e-9);
        prop_assert!(pos.z.abs() <= a * (1.0 - eccentricity * eccentricity).sqrt() + 1e-9);
        prop_assert_eq!(pos.y, 0.0);
    }

    /// The inclination tilt is a rotation: it preserves distance from the
    /// origin.
    #[test]
    fn prop_tilt_preserves_radius(
        mean_anomaly in (-TAU)..TAU,
        inclination_deg in 0.0f64..30.0,
        eccentricity in 0.0f64..0.25,
    ) {
        let flat = Orbit::from_au(1.0, eccentricity, 0.0, 365.256);
        let tilted = Orbit::from_au(1.0, eccentricity, inclination_deg, 365.256);
        let r_flat = position_at(&flat, mean_anomaly, 1.0).length();
        let r_tilted = position_at(&tilted, mean_anomaly, 1.0).length();
        prop_assert!((r_flat - r_tilted).abs() < 1e-9);
    }

    /// Log-compressed radius mapping is strictly monotonic.
    #[test]
    fn prop_log_mapping_monotonic(
        ratio in 0.01f64..150.0,
        bump in 0.001f64..10.0,
    ) {
        let lo = map_radius(SizeMode::LogCompressed, ratio);
        let hi = map_radius(SizeMode::LogCompressed, ratio + bump);
        prop_assert!(lo < hi);
    }

    /// Time-scale control is antisymmetric: scale(-v) == -scale(v) for
    /// nonzero v.
    #[test]
    fn prop_time_scale_antisymmetric(v in 0.001f64..6.0) {
        prop_assert_eq!(scale_from_control(-v), -scale_from_control(v));
    }

    /// Orbit-scale factor scales positions linearly.
    #[test]
    fn prop_orbit_scale_linear(
        mean_anomaly in (-TAU)..TAU,
        scale in 0.1f64..5.0,
    ) {
        let orbit = Orbit::from_au(1.524, 0.0934, 1.85, 686.98);
        let base = position_at(&orbit, mean_anomaly, 1.0);
        let scaled = position_at(&orbit, mean_anomaly, scale);
        prop_assert!((scaled.length() - scale * base.length()).abs() < 1e-9);
    }
}
