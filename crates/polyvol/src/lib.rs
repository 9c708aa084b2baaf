//! Volume measurement for tetrahedra, hexahedra and convex polyhedra.
//!
//! The measurement chain is `triangulate → tetra_volume → hexa_volume /
//! polyhedron_volume`; see `geom3` for conventions. `graph` holds small
//! degree counters over COO adjacency lists.
//!
//! API Policy
//! - `api` is the curated surface for callers (CLI, benches). Module paths
//!   below it may move.

pub mod api;
pub mod error;
pub mod geom3;
pub mod graph;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom3::{
        hexa_volume, polyhedron_volume, polyhedron_volume_with, tetra_volume, triangulate,
        Point2, Point3, Tetra, VolumeCfg,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

/// Signed volume of the parallelepiped spanned by `a`, `b`, `c`.
///
/// Six times the signed volume of the tetrahedron `(0, a, b, c)`.
#[inline]
pub fn parallelepiped_volume(a: Vec3<f64>, b: Vec3<f64>, c: Vec3<f64>) -> f64 {
    a.dot(&b.cross(&c))
}
