//! Core 3D value types and the polyhedron volume configuration.
//!
//! - Points are plain nalgebra column vectors; no wrapper types.
//! - `Tetra` and `Triangle` are fixed-size arrays so callers can build them
//!   inline without allocation.

use nalgebra::{SVector, Vector2, Vector3};

use super::cfg::HULL_EPS;

/// Point in R².
pub type Point2 = Vector2<f64>;
/// Point in R³.
pub type Point3 = Vector3<f64>;
/// Tetrahedron as its four corners.
pub type Tetra = [Point3; 4];
/// Triangle of a fan in R^D: `(v0, vk, vk+1)`.
pub type Triangle<const D: usize> = [SVector<f64, D>; 3];

/// Configuration for `polyhedron_volume_with`.
///
/// Invariants:
/// - `eps_hull >= 0`; it is scaled by the cube of the polyhedron's extent.
#[derive(Clone, Copy, Debug)]
pub struct VolumeCfg {
    /// Reject facet sets whose reference centroid is not on the inner side of
    /// every facet.
    pub hull_check: bool,
    pub eps_hull: f64,
}

impl Default for VolumeCfg {
    fn default() -> Self {
        Self {
            hull_check: false,
            eps_hull: HULL_EPS,
        }
    }
}

impl VolumeCfg {
    /// Default tolerances with the hull check enabled.
    #[inline]
    pub fn checked() -> Self {
        Self {
            hull_check: true,
            ..Self::default()
        }
    }
}
