//! Hexahedron and voxel volumes for 8-vertex elements.
//!
//! Vertex roles are a caller contract: `0,1,2,3` is the bottom quad, `4,5,6,7`
//! the top quad, and vertex `i` is joined by an edge to vertex `i + 4`.

use super::simplex::tetra_volume;
use super::types::{Point3, Tetra};
use crate::error::GeomError;

/// Five-tetrahedron partition of a hexahedron with the vertex roles above.
///
/// Four corner tetrahedra cut off vertices 0, 2, 5 and 7; the remaining
/// central tetrahedron `(1, 3, 4, 6)` joins the opposite corners of the
/// bottom, top and side diagonals. On the unit cube the pieces measure
/// `1/6, 1/6, 1/6, 1/6, 1/3`. Any other grouping must tile the same solid;
/// an arbitrary choice silently breaks skewed hexahedra.
pub const HEXA_TETRAS: [[usize; 4]; 5] = [
    [0, 1, 3, 4],
    [1, 2, 3, 6],
    [1, 4, 5, 6],
    [3, 4, 6, 7],
    [1, 3, 4, 6],
];

fn as_hexa(points: &[Point3]) -> Result<&[Point3; 8], GeomError> {
    points
        .try_into()
        .map_err(|_| GeomError::shape("hexahedron", "8 vertices", points.len()))
}

/// Volume of an 8-vertex hexahedron as the sum over `HEXA_TETRAS`.
pub fn hexa_volume(points: &[Point3]) -> Result<f64, GeomError> {
    let p = as_hexa(points)?;
    Ok(HEXA_TETRAS
        .iter()
        .map(|&[a, b, c, d]| {
            let t: Tetra = [p[a], p[b], p[c], p[d]];
            tetra_volume(&t)
        })
        .sum())
}

/// Volume of an axis-aligned voxel: `|x1-x0| * |y3-y0| * |z4-z0|`.
///
/// Only the three edges leaving vertex 0 are read; the box shape is assumed.
pub fn voxel_volume(points: &[Point3]) -> Result<f64, GeomError> {
    let p = as_hexa(points)?;
    let width = (p[1].x - p[0].x).abs();
    let height = (p[3].y - p[0].y).abs();
    let depth = (p[4].z - p[0].z).abs();
    Ok(width * height * depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom3::special::{affine_hexahedron, unit_cube_vertices};
    use crate::geom3::tetra_signed_volume;
    use nalgebra::{Matrix3, Vector3};

    #[test]
    fn unit_cube_is_one() {
        let cube = unit_cube_vertices();
        assert!((hexa_volume(&cube).unwrap() - 1.0).abs() < 1e-15);
        assert_eq!(voxel_volume(&cube).unwrap(), 1.0);
    }

    #[test]
    fn table_pieces_tile_the_unit_cube() {
        let cube = unit_cube_vertices();
        let pieces: Vec<f64> = HEXA_TETRAS
            .iter()
            .map(|&[a, b, c, d]| tetra_volume(&[cube[a], cube[b], cube[c], cube[d]]))
            .collect();
        let expected = [1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 3.0];
        for (got, want) in pieces.iter().zip(expected) {
            assert!((got - want).abs() < 1e-15, "piece {got} != {want}");
        }
        // Every piece is non-degenerate and every vertex is used.
        let mut used = [false; 8];
        for tet in HEXA_TETRAS {
            for i in tet {
                used[i] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn sheared_hexahedron_matches_determinant() {
        let m = Matrix3::new(2.0, 0.5, 0.0, 0.0, 1.5, 0.3, 0.1, 0.0, 0.8);
        let t = Vector3::new(-1.0, 4.0, 0.25);
        let hexa = affine_hexahedron(&m, &t);
        let vol = hexa_volume(&hexa).unwrap();
        assert!((vol - m.determinant().abs()).abs() < 1e-12, "vol {vol}");
    }

    #[test]
    fn frustum_with_non_parallel_sides() {
        // Square pyramid frustum: bottom 2x2 at z=0, top 1x1 at z=1.
        let pts = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(2.0, 2.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.5, 0.5, 1.0),
            Vector3::new(1.5, 0.5, 1.0),
            Vector3::new(1.5, 1.5, 1.0),
            Vector3::new(0.5, 1.5, 1.0),
        ];
        // h/3 * (A1 + A2 + sqrt(A1 A2)) = (4 + 1 + 2) / 3
        let vol = hexa_volume(&pts).unwrap();
        assert!((vol - 7.0 / 3.0).abs() < 1e-12, "vol {vol}");
    }

    #[test]
    fn pieces_share_orientation_on_unit_cube() {
        let cube = unit_cube_vertices();
        for [a, b, c, d] in HEXA_TETRAS {
            let signed = tetra_signed_volume(&[cube[a], cube[b], cube[c], cube[d]]);
            assert!(signed > 0.0, "piece {:?} has signed volume {signed}", [a, b, c, d]);
        }
    }

    #[test]
    fn wrong_vertex_count_is_invalid_shape() {
        let cube = unit_cube_vertices();
        assert_eq!(
            hexa_volume(&cube[..7]),
            Err(GeomError::shape("hexahedron", "8 vertices", 7))
        );
        let mut nine = cube.to_vec();
        nine.push(Vector3::zeros());
        assert!(voxel_volume(&nine).is_err());
    }
}
