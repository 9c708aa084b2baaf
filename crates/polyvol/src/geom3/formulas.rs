//! Closed-form helpers: centroid, shoelace area, and unit normals.

use nalgebra::SVector;

use super::cfg::NORMAL_EPS;
use super::types::{Point2, Point3};
use crate::error::GeomError;

/// Arithmetic mean of a point set in R^D.
pub fn centroid<const D: usize>(points: &[SVector<f64, D>]) -> Result<SVector<f64, D>, GeomError> {
    if points.is_empty() {
        return Err(GeomError::shape("point set", "at least 1 point", 0));
    }
    let mut acc = SVector::<f64, D>::zeros();
    for p in points {
        acc += p;
    }
    Ok(acc / (points.len() as f64))
}

/// Area of a simple polygon by the shoelace formula (either winding).
pub fn polygon_area(points: &[Point2]) -> Result<f64, GeomError> {
    let n = points.len();
    if n < 3 {
        return Err(GeomError::shape("polygon", "at least 3 vertices", n));
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        twice += p.x * q.y - p.y * q.x;
    }
    Ok(0.5 * twice.abs())
}

/// Outward unit normal of the edge `a → b` of a counter-clockwise polygon.
///
/// For CCW order the outside is on the right: `(b.y - a.y, a.x - b.x) / |b - a|`.
/// `None` when the edge has zero length.
pub fn edge_normal(a: Point2, b: Point2) -> Option<Point2> {
    let n = Point2::new(b.y - a.y, a.x - b.x);
    let len = n.norm();
    if !len.is_finite() || len <= NORMAL_EPS {
        return None;
    }
    Some(n / len)
}

/// Outward unit normal of a 3D facet wound counter-clockwise seen from outside.
///
/// Sums the fan cross products `(v_k - v_0) × (v_{k+1} - v_0)`, which is twice
/// the vector area and robust to nearly collinear leading vertices. `Ok(None)`
/// for zero-area facets.
pub fn facet_normal(points: &[Point3]) -> Result<Option<Point3>, GeomError> {
    let n = points.len();
    if n < 3 {
        return Err(GeomError::shape("facet", "at least 3 vertices", n));
    }
    let p0 = points[0];
    let mut sum = Point3::zeros();
    for w in points[1..].windows(2) {
        sum += (w[0] - p0).cross(&(w[1] - p0));
    }
    let len = sum.norm();
    if !len.is_finite() || len <= NORMAL_EPS {
        return Ok(None);
    }
    Ok(Some(sum / len))
}
