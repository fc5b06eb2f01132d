//! Numeric intervals with explicit boundary semantics.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::GmmError;

/// Which ends of a [`Range`] are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// `[lower, upper]`
    Closed,
    /// `(lower, upper]`
    OpenClosed,
    /// `[lower, upper)`
    ClosedOpen,
}

/// A bounded interval of `f64` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Boundary semantics.
    pub kind: BoundKind,
}

impl Range {
    /// Creates `[lower, upper]`.
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            kind: BoundKind::Closed,
        }
    }

    /// Creates `(lower, upper]`.
    pub const fn open_closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            kind: BoundKind::OpenClosed,
        }
    }

    /// Creates `[lower, upper)`.
    pub const fn closed_open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            kind: BoundKind::ClosedOpen,
        }
    }

    /// Returns `true` if `value` lies inside the interval. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        match self.kind {
            BoundKind::Closed => value >= self.lower && value <= self.upper,
            BoundKind::OpenClosed => value > self.lower && value <= self.upper,
            BoundKind::ClosedOpen => value >= self.lower && value < self.upper,
        }
    }

    /// Returns `value` unchanged if it is contained, otherwise an
    /// [`GmmError::OutOfRange`] labelled with `field`.
    pub fn check(&self, field: &str, value: f64) -> Result<f64, GmmError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(GmmError::OutOfRange {
                field: field.to_string(),
                value,
                range: *self,
            })
        }
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.kind {
            BoundKind::Closed => ('[', ']'),
            BoundKind::OpenClosed => ('(', ']'),
            BoundKind::ClosedOpen => ('[', ')'),
        };
        write!(f, "{open}{}..{}{close}", self.lower, self.upper)
    }
}
