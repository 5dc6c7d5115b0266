//! Detail-tier selection by viewing distance.

/// Distance below which a body renders at full detail (scene units).
pub const LOD_NEAR: f64 = 25.0;

/// Distance above which a body renders at minimum detail (scene units).
pub const LOD_FAR: f64 = 200.0;

/// Discrete level-of-detail tier for a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTier {
    High,
    Medium,
    Low,
}

impl DetailTier {
    /// Sphere subdivision count the renderer should use for this tier.
    pub fn sphere_segments(&self) -> u32 {
        match self {
            DetailTier::High => 64,
            DetailTier::Medium => 32,
            DetailTier::Low => 16,
        }
    }
}

/// Classify a viewpoint-to-body distance into a detail tier.
///
/// Pure and stable: no hysteresis, so repeated calls at the same distance
/// always return the same tier.
pub fn classify(distance: f64) -> DetailTier {
    if distance < LOD_NEAR {
        DetailTier::High
    } else if distance > LOD_FAR {
        DetailTier::Low
    } else {
        DetailTier::Medium
    }
}
