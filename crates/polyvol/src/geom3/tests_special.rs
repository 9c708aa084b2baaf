//! Fixture sanity: every special facet set is closed and outward-wound.
//!
//! Cross-checks the hexahedron table against the centroid-fan volume so the
//! two independent decompositions agree on skewed inputs.

use nalgebra::{Matrix3, Vector3};
use rand::{rngs::StdRng, SeedableRng};

use super::special::{
    affine_hexahedron, cube_facets, hexa_facets, map_facets, random_affine3,
    regular_octahedron_facets, right_prism_facets, unit_cube_vertices,
};
use super::{facet_normal, hexa_volume, polyhedron_volume, polyhedron_volume_with, reference_centroid, VolumeCfg};

#[test]
fn fixture_normals_point_away_from_centroid() {
    for facets in [
        cube_facets(2.0),
        regular_octahedron_facets(1.0),
        right_prism_facets(1.0, 2.0, 3.0),
    ] {
        let c = reference_centroid(&facets).unwrap();
        for f in &facets {
            let n = facet_normal(f).unwrap().unwrap();
            assert!(n.dot(&(f[0] - c)) > 0.0);
        }
    }
}

#[test]
fn prism_matches_closed_form() {
    let vol = polyhedron_volume_with(&right_prism_facets(1.0, 2.0, 3.0), VolumeCfg::checked()).unwrap();
    assert!((vol - 3.0).abs() < 1e-12, "vol {vol}");
}

#[test]
fn unit_cube_hexa_facets_match_cube_facets() {
    let from_roles = hexa_facets(&unit_cube_vertices());
    assert_eq!(from_roles, cube_facets(1.0));
}

#[test]
fn hexa_table_agrees_with_centroid_fan_on_random_affine_cubes() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (m, t) = random_affine3(&mut rng);
        let hexa = affine_hexahedron(&m, &t);
        let a = hexa_volume(&hexa).unwrap();
        let b = polyhedron_volume_with(&hexa_facets(&hexa), VolumeCfg::checked()).unwrap();
        assert!((a - m.determinant()).abs() < 1e-10, "hexa {a} vs det {}", m.determinant());
        assert!((a - b).abs() < 1e-10, "hexa {a} vs fan {b}");
    }
}

#[test]
fn affine_maps_scale_octahedron_by_determinant() {
    let base = regular_octahedron_facets(1.0);
    let m = Matrix3::new(1.0, 0.2, 0.0, 0.0, 2.0, 0.1, 0.3, 0.0, 0.5);
    let mapped = map_facets(&base, &m, &Vector3::new(5.0, -3.0, 1.0));
    let vol = polyhedron_volume(&mapped).unwrap();
    let expected = 4.0 / 3.0 * m.determinant();
    assert!((vol - expected).abs() < 1e-12, "vol {vol} vs {expected}");
}
