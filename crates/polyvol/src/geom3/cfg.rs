//! Tolerance defaults for 3D geometry (internal).
//!
//! Policy
//! - Volumes themselves are computed without tolerances. Epsilons only gate
//!   the optional hull check and normal normalization.

/// Relative slack for the hull check: a facet triangle may have signed volume
/// down to `-HULL_EPS * scale^3` against the centroid before it is rejected.
pub(crate) const HULL_EPS: f64 = 1e-9;
/// Below this length a normal is treated as undefined.
pub(crate) const NORMAL_EPS: f64 = 1e-15;
