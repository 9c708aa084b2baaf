//! Tetrahedron volume from the determinant of its edge matrix.

use nalgebra::Matrix3;

use super::types::{Point3, Tetra};
use crate::error::GeomError;

/// Signed volume `det[p1-p0; p2-p0; p3-p0] / 6`.
///
/// Positive when the edge vectors from `p0` form a right-handed frame. Swapping
/// any two corners flips the sign.
#[inline]
pub fn tetra_signed_volume(t: &Tetra) -> f64 {
    let [p0, p1, p2, p3] = *t;
    let m = Matrix3::from_rows(&[
        (p1 - p0).transpose(),
        (p2 - p0).transpose(),
        (p3 - p0).transpose(),
    ]);
    m.determinant() / 6.0
}

/// Unsigned volume. Coplanar corners give exactly `0.0`.
#[inline]
pub fn tetra_volume(t: &Tetra) -> f64 {
    tetra_signed_volume(t).abs()
}

/// `tetra_volume` for callers holding a slice; the slice must have 4 points.
pub fn tetra_volume_from_slice(points: &[Point3]) -> Result<f64, GeomError> {
    let t: &Tetra = points
        .try_into()
        .map_err(|_| GeomError::shape("tetrahedron", "4 vertices", points.len()))?;
    Ok(tetra_volume(t))
}
