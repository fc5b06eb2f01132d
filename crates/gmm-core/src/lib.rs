#![deny(missing_docs)]
#![doc = "Core traits, input validation and earthquake utilities shared by ground motion models."]

pub mod constraints;
pub mod earthquakes;
pub mod errors;
pub mod fault;
pub mod imt;
pub mod input;
pub mod range;
mod types;

pub use constraints::{Constraints, ConstraintsBuilder};
pub use earthquakes::ShearModulus;
pub use errors::{ErrorInfo, GmmError};
pub use fault::FaultStyle;
pub use imt::Imt;
pub use input::{Field, GmmInput, GmmInputBuilder};
pub use range::{BoundKind, Range};
pub use types::ScalarGroundMotion;

/// Contract shared by every ground motion model.
///
/// An instance is bound to a single [`Imt`] at construction and holds only
/// immutable coefficients, so evaluation is pure and instances may be shared
/// freely across threads.
pub trait GroundMotionModel: Send + Sync {
    /// Stable model identifier, e.g. `IDRISS_14`.
    fn id(&self) -> &'static str;

    /// Intensity measure the instance was built for.
    fn imt(&self) -> Imt;

    /// Valid input ranges declared by the model.
    fn constraints(&self) -> &Constraints;

    /// Validates the fields the equation reads and evaluates it.
    fn calc(&self, input: &GmmInput) -> Result<ScalarGroundMotion, GmmError>;
}
