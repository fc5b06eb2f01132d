#![deny(missing_docs)]
#![doc = "Tabulated empirical ground motion models, their coefficient tables and the model registry."]

/// Period-indexed coefficient tables.
pub mod coefficients;
/// Idriss (2014) active crustal model.
pub mod idriss14;
/// Model lookup by identifier.
pub mod registry;
/// Configuration document helpers.
pub mod serde;

pub use coefficients::{CoefficientRow, CoefficientTable};
pub use idriss14::{Idriss14, Idriss14Config, MagnitudeRegime};
pub use registry::Gmm;
