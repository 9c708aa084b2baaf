//! Measure the unit cube three ways: hexahedron table, voxel formula, and
//! centroid-fan over its six facets.
//!
//! Usage:
//!   cargo run -p polyvol --example unit_cube -- [side]

use polyvol::api::{cube_facets, hexa_volume, polyhedron_volume, unit_cube_vertices, voxel_volume};

fn main() {
    let side: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);
    let cube = unit_cube_vertices().map(|p| p * side);
    println!("hexa_volume       = {}", hexa_volume(&cube).unwrap_or(f64::NAN));
    println!("voxel_volume      = {}", voxel_volume(&cube).unwrap_or(f64::NAN));
    println!(
        "polyhedron_volume = {}",
        polyhedron_volume(&cube_facets(side)).unwrap_or(f64::NAN)
    );
}
