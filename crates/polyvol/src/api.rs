//! Curated API for callers.
//!
//! Prefer these re-exports over deep module paths; the module layout under
//! `geom3` is free to change.

// Measurement chain
pub use crate::geom3::{
    fan_indices, hexa_volume, polyhedron_signed_volume, polyhedron_volume,
    polyhedron_volume_with, tetra_signed_volume, tetra_volume, tetra_volume_from_slice,
    triangulate, voxel_volume, HEXA_TETRAS,
};
// Helpers the chain rests on
pub use crate::geom3::{
    centroid, distinct_vertices, edge_normal, facet_normal, polygon_area, reference_centroid,
};
// Types and configuration
pub use crate::error::GeomError;
pub use crate::geom3::{Point2, Point3, Tetra, Triangle, VolumeCfg};
// Fixtures
pub use crate::geom3::special::{
    affine_hexahedron, box_facets, cube_facets, hexa_facets, regular_octahedron_facets,
    right_prism_facets, unit_cube_vertices,
};
// Graph degrees
pub use crate::graph::{degree, in_out_degree, CooAdjacency};
