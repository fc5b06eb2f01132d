//! Constants and utilities pertaining to properties of earthquakes.
//!
//! Depths follow the positive-down convention of seismology. Magnitude limits
//! are used for range checking only and are not bound to a magnitude scale.

use serde::{Deserialize, Serialize};

use crate::errors::GmmError;
use crate::range::Range;

/// Minimum supported earthquake depth in km.
pub const MIN_DEPTH: f64 = -5.0;

/// Maximum supported earthquake depth in km.
pub const MAX_DEPTH: f64 = 700.0;

/// Supported earthquake depths: `[-5..700]` km.
pub const DEPTH_RANGE: Range = Range::closed(MIN_DEPTH, MAX_DEPTH);

/// Valid crustal rupture depths: `[0..40]` km.
pub const CRUSTAL_DEPTH_RANGE: Range = Range::closed(0.0, 40.0);

/// Valid crustal rupture widths: `(0..60]` km.
pub const CRUSTAL_WIDTH_RANGE: Range = Range::open_closed(0.0, 60.0);

/// Valid intraslab rupture depths: `[20..700]` km.
pub const SLAB_DEPTH_RANGE: Range = Range::closed(20.0, 700.0);

/// Valid interface rupture depths: `[0..60]` km.
pub const INTERFACE_DEPTH_RANGE: Range = Range::closed(0.0, 60.0);

/// Valid interface rupture widths: `(0..200]` km.
pub const INTERFACE_WIDTH_RANGE: Range = Range::open_closed(0.0, 200.0);

/// Minimum supported magnitude.
pub const MIN_MAG: f64 = -2.0;

/// Maximum supported magnitude.
pub const MAX_MAG: f64 = 9.7;

/// Supported magnitudes: `[-2.0..9.7]`.
pub const MAG_RANGE: Range = Range::closed(MIN_MAG, MAX_MAG);

// Hanks & Kanamori scale offset for moment in N·m (16.05 in dyn·cm).
const SCALE_N_M: f64 = 9.05;

/// Verifies that a crustal rupture depth is within [`CRUSTAL_DEPTH_RANGE`].
pub fn validate_depth(depth: f64) -> Result<f64, GmmError> {
    CRUSTAL_DEPTH_RANGE.check("Depth", depth)
}

/// Verifies that an intraslab depth is within [`SLAB_DEPTH_RANGE`].
pub fn validate_slab_depth(depth: f64) -> Result<f64, GmmError> {
    SLAB_DEPTH_RANGE.check("Subduction Slab Depth", depth)
}

/// Verifies that an interface depth is within [`INTERFACE_DEPTH_RANGE`].
pub fn validate_interface_depth(depth: f64) -> Result<f64, GmmError> {
    INTERFACE_DEPTH_RANGE.check("Subduction Interface Depth", depth)
}

/// Verifies that a crustal rupture width is within [`CRUSTAL_WIDTH_RANGE`].
pub fn validate_width(width: f64) -> Result<f64, GmmError> {
    CRUSTAL_WIDTH_RANGE.check("Width", width)
}

/// Verifies that an interface width is within [`INTERFACE_WIDTH_RANGE`].
pub fn validate_interface_width(width: f64) -> Result<f64, GmmError> {
    INTERFACE_WIDTH_RANGE.check("Subduction Interface Width", width)
}

/// Ensures `-5 ≤ depth ≤ 700` km.
pub fn check_depth(depth: f64) -> Result<f64, GmmError> {
    DEPTH_RANGE.check("Depth", depth)
}

/// Ensures `-2.0 ≤ magnitude ≤ 9.7`.
pub fn check_magnitude(magnitude: f64) -> Result<f64, GmmError> {
    MAG_RANGE.check("Magnitude", magnitude)
}

/// Converts moment magnitude to seismic moment in N·m (Hanks & Kanamori).
pub fn magnitude_to_moment(magnitude: f64) -> f64 {
    10f64.powf(1.5 * magnitude + SCALE_N_M)
}

/// Converts seismic moment in N·m to moment magnitude (Hanks & Kanamori).
pub fn moment_to_magnitude(moment: f64) -> f64 {
    (moment.log10() - SCALE_N_M) / 1.5
}

/// Shear modulus (rigidity) used to relate moment, area and slip.
///
/// Passing a slip rate to [`ShearModulus::moment`] yields a moment rate, and
/// a moment rate passed to [`ShearModulus::slip`] yields a slip rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearModulus(f64);

impl ShearModulus {
    /// Typical crustal rigidity, `μ = 3·10¹⁰ N·m⁻²`.
    pub const CRUSTAL: ShearModulus = ShearModulus(3e10);

    /// Creates a shear modulus from a value in N·m⁻².
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the modulus in N·m⁻².
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Seismic moment in N·m of a fault `area` (m²) with average `slip` (m).
    pub fn moment(&self, area: f64, slip: f64) -> f64 {
        self.0 * area * slip
    }

    /// Average slip in m across a fault `area` (m²) releasing `moment` (N·m).
    pub fn slip(&self, area: f64, moment: f64) -> f64 {
        moment / (area * self.0)
    }
}

impl Default for ShearModulus {
    fn default() -> Self {
        Self::CRUSTAL
    }
}
