//! Fan triangulation of ordered convex polygons (2D or 3D boundaries).
//!
//! Only index triples are selected, so the same code serves planar 3D
//! facets. Convexity and planarity are assumed, not checked.

use nalgebra::SVector;

use super::types::Triangle;
use crate::error::GeomError;

/// Index triples `(0, k+1, k+2)` for `k = 0..n-2`. Empty for `n < 3`.
pub fn fan_indices(n: usize) -> Vec<[usize; 3]> {
    (1..n.saturating_sub(1)).map(|i| [0, i, i + 1]).collect()
}

/// Split a convex polygon into `n - 2` triangles sharing vertex 0.
pub fn triangulate<const D: usize>(
    boundary: &[SVector<f64, D>],
) -> Result<Vec<Triangle<D>>, GeomError> {
    if boundary.len() < 3 {
        return Err(GeomError::shape(
            "polygon boundary",
            "at least 3 vertices",
            boundary.len(),
        ));
    }
    Ok(fan_indices(boundary.len())
        .into_iter()
        .map(|[a, b, c]| [boundary[a], boundary[b], boundary[c]])
        .collect())
}
