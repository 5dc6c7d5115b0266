//! Display-radius mapping policies.
//!
//! Physical radii in this system span three orders of magnitude (Sun to
//! Moon), so the default display mapping compresses them logarithmically
//! while keeping the ordering. The `real` mode keeps proportions
//! physically faithful.

use std::str::FromStr;

use crate::config::ConfigError;
use crate::types::{EARTH_RADIUS_KM, EARTH_RADIUS_TO_SCENE};

/// Strategy for mapping a physical radius ratio to a display multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// Display multiplier equals the radius ratio; proportions are faithful
    Real,
    /// `log2(1 + ratio)`: compressed but order-preserving, with the
    /// reference body (ratio = 1) mapping to exactly 1
    #[default]
    LogCompressed,
}

impl FromStr for SizeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(SizeMode::Real),
            "log" => Ok(SizeMode::LogCompressed),
            other => Err(ConfigError::UnknownSizeMode(other.to_string())),
        }
    }
}

/// Map a radius ratio (body radius / Earth radius, > 0) to a display-size
/// multiplier under the given mode.
pub fn map_radius(mode: SizeMode, earth_ratio: f64) -> f64 {
    match mode {
        SizeMode::Real => earth_ratio,
        SizeMode::LogCompressed => (1.0 + earth_ratio).ln() / std::f64::consts::LN_2,
    }
}

/// Display radius in scene units for a body of the given physical radius.
pub fn display_radius(mode: SizeMode, radius_km: f64) -> f64 {
    map_radius(mode, radius_km / EARTH_RADIUS_KM) * EARTH_RADIUS_TO_SCENE
}

/// Uniform scale factor that takes a body built at `original_radius` to
/// `target_radius`.
///
/// Switching size modes applies this as a geometry-preserving uniform scale
/// on the existing shape rather than rebuilding its detail.
pub fn rescale_factor(target_radius: f64, original_radius: f64) -> f64 {
    target_radius / original_radius
}
