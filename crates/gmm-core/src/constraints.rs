//! Per-model declarations of valid input ranges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GmmError;
use crate::input::{Field, GmmInput};
use crate::range::Range;

/// Valid ranges for the [`GmmInput`] fields a model supports.
///
/// Fields without a declared range are not constrained by the model and are
/// never checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    ranges: BTreeMap<Field, Range>,
}

impl Constraints {
    /// Starts an empty builder.
    pub fn builder() -> ConstraintsBuilder {
        ConstraintsBuilder::default()
    }

    /// Returns the declared range for `field`.
    pub fn get(&self, field: Field) -> Option<&Range> {
        self.ranges.get(&field)
    }

    /// Iterates declared ranges in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &Range)> {
        self.ranges.iter()
    }

    /// Checks a single value against the range declared for `field`.
    pub fn check(&self, field: Field, value: f64) -> Result<f64, GmmError> {
        match self.ranges.get(&field) {
            Some(range) => range.check(field.label(), value),
            None => Ok(value),
        }
    }

    /// Checks the listed fields of `input`, stopping at the first violation.
    pub fn check_fields(&self, input: &GmmInput, fields: &[Field]) -> Result<(), GmmError> {
        for field in fields {
            if let Some(value) = field.value(input) {
                self.check(*field, value)?;
            }
        }
        Ok(())
    }
}

/// Builder for [`Constraints`].
#[derive(Debug, Clone, Default)]
pub struct ConstraintsBuilder {
    ranges: BTreeMap<Field, Range>,
}

impl ConstraintsBuilder {
    /// Declares the valid range for `field`, replacing any previous one.
    pub fn set(mut self, field: Field, range: Range) -> Self {
        self.ranges.insert(field, range);
        self
    }

    /// Declares `r_jb` and `r_rup` on `[0, r_max]` and `r_x` on
    /// `[-r_max, r_max]`.
    pub fn set_distances(self, r_max: f64) -> Self {
        self.set(Field::Rjb, Range::closed(0.0, r_max))
            .set(Field::Rrup, Range::closed(0.0, r_max))
            .set(Field::Rx, Range::closed(-r_max, r_max))
    }

    /// Finishes the builder.
    pub fn build(self) -> Constraints {
        Constraints {
            ranges: self.ranges,
        }
    }
}
