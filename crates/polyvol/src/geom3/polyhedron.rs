//! Convex polyhedron volume via facet fans anchored at the reference centroid.
//!
//! Algorithm
//! - Merge all facet vertices exactly (bitwise after folding `-0.0` into
//!   `0.0`) and average the distinct ones into the reference centroid.
//! - Fan-triangulate every facet and cone each triangle to the centroid.
//! - Sum the unsigned tetrahedron volumes.
//!
//! The unsigned sum is exact only while the centroid lies inside the hull of
//! a convex, outward-wound, gap-free facet set. Merging duplicates matters:
//! vertices shared by several facets would otherwise pull the centroid toward
//! themselves and, for skewed inputs, out of the hull. `VolumeCfg::hull_check`
//! turns that silent failure into `GeometryInconsistency`.

use std::cmp::Ordering;

use super::fan::fan_indices;
use super::formulas::centroid;
use super::simplex::{tetra_signed_volume, tetra_volume};
use super::types::{Point3, Tetra, VolumeCfg};
use crate::error::GeomError;

fn check_facets<F: AsRef<[Point3]>>(facets: &[F]) -> Result<(), GeomError> {
    if facets.is_empty() {
        return Err(GeomError::shape("facet set", "at least 1 facet", 0));
    }
    for f in facets {
        let n = f.as_ref().len();
        if n < 3 {
            return Err(GeomError::shape("facet", "at least 3 vertices", n));
        }
    }
    Ok(())
}

#[inline]
fn fold_negative_zero(p: Point3) -> Point3 {
    p.map(|x| x + 0.0)
}

fn lex_cmp(a: &Point3, b: &Point3) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}

/// Distinct vertices across all facets, sorted lexicographically.
///
/// Equality is exact: `0.1 + 0.2` and `0.3` stay two vertices.
pub fn distinct_vertices<F: AsRef<[Point3]>>(facets: &[F]) -> Vec<Point3> {
    let mut pts: Vec<Point3> = facets
        .iter()
        .flat_map(|f| f.as_ref().iter().copied())
        .map(fold_negative_zero)
        .collect();
    pts.sort_by(lex_cmp);
    pts.dedup_by(|a, b| a == b);
    pts
}

/// Mean of `distinct_vertices(facets)`.
pub fn reference_centroid<F: AsRef<[Point3]>>(facets: &[F]) -> Result<Point3, GeomError> {
    check_facets(facets)?;
    centroid(&distinct_vertices(facets))
}

/// Iterate `(facet index, tetrahedron)` for every fan triangle coned to `apex`.
fn cone_tetras<'a, F: AsRef<[Point3]>>(
    facets: &'a [F],
    apex: Point3,
) -> impl Iterator<Item = (usize, Tetra)> + 'a {
    facets.iter().enumerate().flat_map(move |(fi, f)| {
        let pts = f.as_ref();
        fan_indices(pts.len())
            .into_iter()
            .map(move |[a, b, c]| (fi, [apex, pts[a], pts[b], pts[c]]))
    })
}

/// Volume of a convex polyhedron given by its outward-wound facets.
///
/// Equivalent to `polyhedron_volume_with(facets, VolumeCfg::default())`: no
/// hull check, so a malformed facet set yields a wrong number without error.
pub fn polyhedron_volume<F: AsRef<[Point3]>>(facets: &[F]) -> Result<f64, GeomError> {
    polyhedron_volume_with(facets, VolumeCfg::default())
}

/// Volume of a convex polyhedron with explicit configuration.
pub fn polyhedron_volume_with<F: AsRef<[Point3]>>(
    facets: &[F],
    cfg: VolumeCfg,
) -> Result<f64, GeomError> {
    check_facets(facets)?;
    let distinct = distinct_vertices(facets);
    let center = centroid(&distinct)?;
    // Signed volumes scale with extent^3; compare against a matching slack.
    let tol = if cfg.hull_check {
        let radius = distinct
            .iter()
            .map(|p| (p - center).amax())
            .fold(0.0_f64, f64::max);
        cfg.eps_hull * radius.powi(3)
    } else {
        0.0
    };

    let mut total = 0.0;
    for (facet, tetra) in cone_tetras(facets, center) {
        if cfg.hull_check {
            let signed = tetra_signed_volume(&tetra);
            if signed < -tol {
                return Err(GeomError::GeometryInconsistency { facet });
            }
            total += signed.abs();
        } else {
            total += tetra_volume(&tetra);
        }
    }
    Ok(total)
}

/// Sum of signed cone volumes from the reference centroid.
///
/// Positive for outward winding and negative for inward winding. For a
/// closed, consistently wound boundary the result does not depend on the
/// apex, so it stays exact for non-convex solids where the unsigned sum does
/// not.
pub fn polyhedron_signed_volume<F: AsRef<[Point3]>>(facets: &[F]) -> Result<f64, GeomError> {
    let center = reference_centroid(facets)?;
    Ok(cone_tetras(facets, center)
        .map(|(_, t)| tetra_signed_volume(&t))
        .sum())
}
