//! 3D measurement: tetrahedra, hexahedra and convex polyhedra.
//!
//! Purpose
//! - Volumes of elementary solids and of convex polyhedra given by facets,
//!   plus the small closed-form helpers they rest on.
//!
//! Layering (leaf first)
//! - `simplex`: tetrahedron volume from a 3×3 determinant.
//! - `fan`: fan triangulation of ordered convex polygons (2D or 3D).
//! - `hexa`: 8-vertex hexahedra via a fixed five-tetrahedron table.
//! - `polyhedron`: facet fans coned to the centroid of distinct vertices.
//!
//! Assumptions and conventions
//! - Facets are wound counter-clockwise seen from outside.
//! - Convexity, planarity and winding are assumed, never repaired. The
//!   optional hull check in `VolumeCfg` only detects a centroid on the wrong
//!   side of a facet.
//! - Degenerate input measures zero; only contract violations are errors.

mod cfg;
mod fan;
mod formulas;
mod hexa;
mod polyhedron;
mod simplex;
pub mod special;
mod types;

pub use fan::{fan_indices, triangulate};
pub use formulas::{centroid, edge_normal, facet_normal, polygon_area};
pub use hexa::{hexa_volume, voxel_volume, HEXA_TETRAS};
pub use polyhedron::{
    distinct_vertices, polyhedron_signed_volume, polyhedron_volume, polyhedron_volume_with,
    reference_centroid,
};
pub use simplex::{tetra_signed_volume, tetra_volume, tetra_volume_from_slice};
pub use types::{Point2, Point3, Tetra, Triangle, VolumeCfg};

#[cfg(test)]
mod tests_special;
