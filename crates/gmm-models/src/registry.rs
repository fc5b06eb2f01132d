use std::fmt::{self, Display};
use std::str::FromStr;

use gmm_core::errors::{ErrorInfo, GmmError};
use gmm_core::{Constraints, GroundMotionModel, Imt};
use serde::{Deserialize, Serialize};

use crate::idriss14::{self, Idriss14};

/// Identifiers of the available ground motion models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gmm {
    /// Idriss (2014), active crustal regions.
    #[serde(rename = "IDRISS_14")]
    Idriss14,
}

impl Gmm {
    /// Every registered model.
    pub fn all() -> impl Iterator<Item = Gmm> {
        [Gmm::Idriss14].into_iter()
    }

    /// Stable identifier used for lookup.
    pub fn id(&self) -> &'static str {
        match self {
            Gmm::Idriss14 => idriss14::ID,
        }
    }

    /// Display name including the publication year.
    pub fn name(&self) -> &'static str {
        match self {
            Gmm::Idriss14 => idriss14::NAME,
        }
    }

    /// Declared input ranges.
    pub fn constraints(&self) -> &'static Constraints {
        match self {
            Gmm::Idriss14 => idriss14::constraints(),
        }
    }

    /// Intensity measures the model has coefficients for.
    pub fn supported_imts(&self) -> Result<Vec<Imt>, GmmError> {
        match self {
            Gmm::Idriss14 => Ok(idriss14::coefficients()?.imts().collect()),
        }
    }

    /// Builds an instance for `imt` with the published constants.
    pub fn instance(&self, imt: Imt) -> Result<Box<dyn GroundMotionModel>, GmmError> {
        match self {
            Gmm::Idriss14 => Ok(Box::new(Idriss14::new(imt)?)),
        }
    }
}

impl Display for Gmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gmm {
    type Err = GmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gmm::all()
            .find(|gmm| gmm.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                GmmError::Config(
                    ErrorInfo::new("unknown-model", "no model registered under this id")
                        .with_context("id", s),
                )
            })
    }
}
