//! JSON inputs and outputs for the volume commands.

use anyhow::{ensure, Context, Result};
use nalgebra::Vector3;
use polyvol::api::Point3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `{"vertices": [[x, y, z], ...]}` with the hexahedron vertex roles.
#[derive(Debug, Deserialize)]
pub struct HexaInput {
    pub vertices: Vec<[f64; 3]>,
}

/// `{"facets": [[[x, y, z], ...], ...]}`, each facet wound outward.
#[derive(Debug, Deserialize)]
pub struct PolyhedronInput {
    pub facets: Vec<Vec<[f64; 3]>>,
}

/// Result document written by `--out`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VolumeOutput {
    pub kind: String,
    pub volume: f64,
}

#[inline]
fn to_point(p: [f64; 3]) -> Point3 {
    Vector3::from(p)
}

impl HexaInput {
    pub fn points(&self) -> Vec<Point3> {
        self.vertices.iter().copied().map(to_point).collect()
    }
}

impl PolyhedronInput {
    pub fn facets(&self) -> Vec<Vec<Point3>> {
        self.facets
            .iter()
            .map(|f| f.iter().copied().map(to_point).collect())
            .collect()
    }
}

/// Read and parse a JSON document from `path`.
pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    ensure!(!bytes.is_empty(), "{} is empty", path.display());
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
