//! Special 3D solids used in tests, benchmarks and the CLI demo.
//!
//! Purpose
//! - Canonical, outward-wound facet sets with known volumes.
//! - Keep constructors explicit so tests can rely on them deterministically.
//!
//! Volume formulas
//! - Box with edge lengths (a,b,c): a·b·c.
//! - Octahedron {‖x‖₁ ≤ r}: 4 r³ / 3.
//! - Right triangular prism with legs (a,b) and height h: a·b·h / 2.
//! - Image of the unit cube under `x ↦ M x + t`: |det M|.

use nalgebra::{Matrix3, Vector3};
use rand::Rng;

use super::types::Point3;

/// Facets of a hexahedron in terms of its vertex roles, each wound
/// counter-clockwise seen from outside (bottom, top, front, right, back, left).
pub const HEXA_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

/// Unit cube corners in hexahedron vertex order.
pub fn unit_cube_vertices() -> [Point3; 8] {
    [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(0.0, 1.0, 1.0),
    ]
}

/// Unit cube pushed forward by `x ↦ M x + t`.
pub fn affine_hexahedron(m: &Matrix3<f64>, t: &Vector3<f64>) -> [Point3; 8] {
    unit_cube_vertices().map(|p| m * p + t)
}

/// Facets of an 8-vertex hexahedron with the usual vertex roles.
///
/// Winding is outward only if `M` preserves orientation (det > 0) for
/// hexahedra built by `affine_hexahedron`.
pub fn hexa_facets(v: &[Point3; 8]) -> Vec<Vec<Point3>> {
    HEXA_FACES
        .iter()
        .map(|face| face.iter().map(|&i| v[i]).collect())
        .collect()
}

/// Axis-aligned cube `[0, side]^3` as six quad facets.
pub fn cube_facets(side: f64) -> Vec<Vec<Point3>> {
    box_facets(Vector3::zeros(), Vector3::new(side, side, side))
}

/// Axis-aligned box with minimum corner `origin` and edge lengths `size`.
pub fn box_facets(origin: Point3, size: Vector3<f64>) -> Vec<Vec<Point3>> {
    let m = Matrix3::from_diagonal(&size);
    hexa_facets(&affine_hexahedron(&m, &origin))
}

/// Octahedron `{x : |x₁|+|x₂|+|x₃| ≤ r}` as eight triangles.
pub fn regular_octahedron_facets(r: f64) -> Vec<Vec<Point3>> {
    let mut facets = Vec::with_capacity(8);
    for &sx in &[-1.0, 1.0] {
        for &sy in &[-1.0, 1.0] {
            for &sz in &[-1.0, 1.0] {
                let a = Vector3::new(sx * r, 0.0, 0.0);
                let b = Vector3::new(0.0, sy * r, 0.0);
                let c = Vector3::new(0.0, 0.0, sz * r);
                // (a,b,c) is outward exactly when the octant has an even number of minus signs.
                if sx * sy * sz > 0.0 {
                    facets.push(vec![a, b, c]);
                } else {
                    facets.push(vec![a, c, b]);
                }
            }
        }
    }
    facets
}

/// Right prism over the triangle `(0,0), (a,0), (0,b)` with height `h`.
///
/// Mixes triangle and quad facets.
pub fn right_prism_facets(a: f64, b: f64, h: f64) -> Vec<Vec<Point3>> {
    let p = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(a, 0.0, 0.0),
        Vector3::new(0.0, b, 0.0),
    ];
    let q = p.map(|v| v + Vector3::new(0.0, 0.0, h));
    vec![
        vec![p[0], p[2], p[1]],
        vec![q[0], q[1], q[2]],
        vec![p[0], p[1], q[1], q[0]],
        vec![p[1], p[2], q[2], q[1]],
        vec![p[2], p[0], q[0], q[2]],
    ]
}

/// Apply `x ↦ M x + t` to every facet vertex.
pub fn map_facets(facets: &[Vec<Point3>], m: &Matrix3<f64>, t: &Vector3<f64>) -> Vec<Vec<Point3>> {
    facets
        .iter()
        .map(|f| f.iter().map(|p| m * p + t).collect())
        .collect()
}

/// Random orientation-preserving affine map near the identity.
///
/// `M = I + 0.5·U` with `U` uniform in `[-1,1]^{3×3}`, redrawn until
/// `det M >= 0.1`; `t` uniform in `[-2,2]^3`.
pub fn random_affine3<R: Rng>(rng: &mut R) -> (Matrix3<f64>, Vector3<f64>) {
    loop {
        let u = Matrix3::<f64>::from_fn(|_, _| rng.gen_range(-1.0..1.0));
        let m = Matrix3::identity() + u * 0.5;
        if m.determinant() >= 0.1 {
            let t = Vector3::<f64>::from_fn(|_, _| rng.gen_range(-2.0..2.0));
            return (m, t);
        }
    }
}
