//! Fault style classification from rake.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::range::Range;

/// Valid rake angles in degrees.
pub const RAKE_RANGE: Range = Range::closed(-180.0, 180.0);

/// Valid dip angles in degrees.
pub const DIP_RANGE: Range = Range::closed(0.0, 90.0);

/// Style of faulting implied by a rupture's rake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultStyle {
    /// Horizontal motion, rake near 0° or ±180°.
    StrikeSlip,
    /// Hanging wall moves down, rake near -90°.
    Normal,
    /// Hanging wall moves up, rake near 90°.
    Reverse,
    /// Rake is undefined or outside `[-180, 180]`.
    Unknown,
}

impl FaultStyle {
    /// Classifies `rake` (degrees) using the NSHMP bands: reverse on
    /// `(45, 135)`, normal on `(-135, -45)`, strike-slip elsewhere in
    /// `[-180, 180]`.
    pub fn from_rake(rake: f64) -> Self {
        if !RAKE_RANGE.contains(rake) {
            FaultStyle::Unknown
        } else if rake > 45.0 && rake < 135.0 {
            FaultStyle::Reverse
        } else if rake < -45.0 && rake > -135.0 {
            FaultStyle::Normal
        } else {
            FaultStyle::StrikeSlip
        }
    }
}

impl Display for FaultStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FaultStyle::StrikeSlip => "Strike-Slip",
            FaultStyle::Normal => "Normal",
            FaultStyle::Reverse => "Reverse",
            FaultStyle::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
