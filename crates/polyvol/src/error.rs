//! Errors shared by the geometry and graph modules.
//!
//! Degenerate input (coplanar tetrahedra, zero-area facets) is not an error:
//! it measures zero. Errors are reserved for broken caller contracts and for
//! inconsistencies detected by the optional hull check.

use std::fmt;

/// Errors surfaced by the volume, formula and graph functions.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Point count or structure does not match the operation's contract.
    InvalidShape {
        what: &'static str,
        expected: &'static str,
        got: usize,
    },
    /// The reference centroid lies outside facet `facet` (wrong winding,
    /// gaps, or a non-convex facet set).
    GeometryInconsistency { facet: usize },
}

impl GeomError {
    #[inline]
    pub(crate) fn shape(what: &'static str, expected: &'static str, got: usize) -> Self {
        GeomError::InvalidShape {
            what,
            expected,
            got,
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidShape {
                what,
                expected,
                got,
            } => write!(f, "invalid {what}: expected {expected}, got {got}"),
            GeomError::GeometryInconsistency { facet } => write!(
                f,
                "reference centroid lies outside facet {facet} (facet set is not a consistently wound convex boundary)"
            ),
        }
    }
}

impl std::error::Error for GeomError {}
