//! Orbital elements data for solar system bodies.
//! Source: NASA NSSDCA planetary fact sheet, simplified for visualization.
//! Semi-major axes in AU (km for the Moon), periods in Earth days,
//! rotation periods in hours (negative = retrograde).

use crate::kepler::Orbit;

/// Identifier for celestial bodies in the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Moon,
}

impl BodyId {
    /// All planets in orbit order, innermost to outermost.
    pub const PLANETS: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Get the parent body whose local frame this body orbits in.
    /// Planets orbit the Sun; the Moon orbits Earth.
    pub fn parent(&self) -> Option<BodyId> {
        match self {
            BodyId::Sun => None,
            BodyId::Moon => Some(BodyId::Earth),
            _ => Some(BodyId::Sun),
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Moon => "Moon",
        }
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from an invalid element set, detected at first use.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ElementsError {
    #[error("{id}: eccentricity {value} outside [0, 1)")]
    EccentricityOutOfRange { id: BodyId, value: f64 },

    #[error("{id}: orbital period {period} days must be positive for an orbiting body")]
    NonPositivePeriod { id: BodyId, period: f64 },

    #[error("{id}: semi-major axis {value} must be positive")]
    NonPositiveSemiMajorAxis { id: BodyId, value: f64 },
}

/// Static physical and orbital data for one body, immutable after load.
#[derive(Clone, Debug)]
pub struct BodyData {
    pub id: BodyId,
    /// Physical radius in kilometers
    pub radius_km: f64,
    /// Rotation period in hours; negative = retrograde, 0 = does not spin
    pub rotation_period_hours: f64,
    /// Axial tilt in degrees (rendering hint, not used by the orbit solver)
    pub axial_tilt_deg: f64,
    /// Dataset rendering-size hint, carried through untouched
    pub radius_scale: f32,
    /// Emissive luminosity hint (central star only)
    pub emissive: Option<f32>,
    /// Keplerian orbit; None exactly for the central star
    pub orbit: Option<Orbit>,
    /// Satellite whose orbit is expressed in this body's local frame
    pub moon: Option<Box<BodyData>>,
}

impl BodyData {
    /// Check the element-set invariants this body must satisfy before its
    /// state can be computed.
    ///
    /// The central star legitimately has no orbit; any other body without a
    /// positive orbital period is a configuration error. A rotation period
    /// of exactly 0 is valid and means "does not spin".
    pub fn validate(&self) -> Result<(), ElementsError> {
        if let Some(orbit) = &self.orbit {
            if !(0.0..1.0).contains(&orbit.eccentricity) {
                return Err(ElementsError::EccentricityOutOfRange {
                    id: self.id,
                    value: orbit.eccentricity,
                });
            }
            if orbit.period_days <= 0.0 {
                return Err(ElementsError::NonPositivePeriod {
                    id: self.id,
                    period: orbit.period_days,
                });
            }
            if orbit.semi_major_axis <= 0.0 {
                return Err(ElementsError::NonPositiveSemiMajorAxis {
                    id: self.id,
                    value: orbit.semi_major_axis,
                });
            }
        } else if self.id != BodyId::Sun {
            return Err(ElementsError::NonPositivePeriod {
                id: self.id,
                period: 0.0,
            });
        }
        if let Some(moon) = &self.moon {
            moon.validate()?;
        }
        Ok(())
    }
}

/// The full element table: Sun plus eight planets, with the Moon nested
/// under Earth. The Moon is never a top-level entry.
pub fn all_bodies() -> Vec<BodyData> {
    vec![
        BodyData {
            id: BodyId::Sun,
            radius_km: 696_340.0,
            rotation_period_hours: 609.12, // ~25.38 Earth days
            axial_tilt_deg: 0.0,
            radius_scale: 25.0,
            emissive: Some(1.4),
            orbit: None,
            moon: None,
        },
        BodyData {
            id: BodyId::Mercury,
            radius_km: 2439.7,
            rotation_period_hours: 1407.6,
            axial_tilt_deg: 0.03,
            radius_scale: 0.7,
            emissive: None,
            orbit: Some(Orbit::from_au(0.387, 0.206, 7.005, 87.969)),
            moon: None,
        },
        BodyData {
            id: BodyId::Venus,
            radius_km: 6051.8,
            rotation_period_hours: -5832.5, // retrograde
            axial_tilt_deg: 177.4,
            radius_scale: 1.0,
            emissive: None,
            orbit: Some(Orbit::from_au(0.723, 0.007, 3.394, 224.701)),
            moon: None,
        },
        BodyData {
            id: BodyId::Earth,
            radius_km: 6371.0,
            rotation_period_hours: 23.934,
            axial_tilt_deg: 23.44,
            radius_scale: 1.05,
            emissive: None,
            orbit: Some(Orbit::from_au(1.0, 0.017, 0.0, 365.256)),
            moon: Some(Box::new(BodyData {
                id: BodyId::Moon,
                radius_km: 1737.4,
                rotation_period_hours: 655.7,
                axial_tilt_deg: 0.0,
                radius_scale: 0.3,
                emissive: None,
                orbit: Some(Orbit::from_km(384_400.0, 0.055, 5.145, 27.322)),
                moon: None,
            })),
        },
        BodyData {
            id: BodyId::Mars,
            radius_km: 3389.5,
            rotation_period_hours: 24.623,
            axial_tilt_deg: 25.19,
            radius_scale: 0.9,
            emissive: None,
            orbit: Some(Orbit::from_au(1.524, 0.0934, 1.850, 686.980)),
            moon: None,
        },
        BodyData {
            id: BodyId::Jupiter,
            radius_km: 69_911.0,
            rotation_period_hours: 9.925,
            axial_tilt_deg: 3.13,
            radius_scale: 11.21,
            emissive: None,
            orbit: Some(Orbit::from_au(5.203, 0.0484, 1.305, 4332.59)),
            moon: None,
        },
        BodyData {
            id: BodyId::Saturn,
            radius_km: 58_232.0,
            rotation_period_hours: 10.656,
            axial_tilt_deg: 26.73,
            radius_scale: 9.45,
            emissive: None,
            orbit: Some(Orbit::from_au(9.537, 0.0541, 2.485, 10759.22)),
            moon: None,
        },
        BodyData {
            id: BodyId::Uranus,
            radius_km: 25_362.0,
            rotation_period_hours: -17.24, // retrograde
            axial_tilt_deg: 97.77,
            radius_scale: 4.01,
            emissive: None,
            orbit: Some(Orbit::from_au(19.191, 0.0472, 0.773, 30685.4)),
            moon: None,
        },
        BodyData {
            id: BodyId::Neptune,
            radius_km: 24_622.0,
            rotation_period_hours: 16.11,
            axial_tilt_deg: 28.32,
            radius_scale: 3.88,
            emissive: None,
            orbit: Some(Orbit::from_au(30.07, 0.0086, 1.770, 60189.0)),
            moon: None,
        },
    ]
}
