use serde::{Deserialize, Serialize};

/// Natural-log mean and standard deviation of a log-normally distributed
/// ground motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarGroundMotion {
    mean: f64,
    sigma: f64,
}

impl ScalarGroundMotion {
    /// Creates a result from its ln-space mean and standard deviation.
    pub const fn new(mean: f64, sigma: f64) -> Self {
        Self { mean, sigma }
    }

    /// Mean of ln(ground motion).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of ln(ground motion).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Median ground motion, `exp(mean)`.
    pub fn median(&self) -> f64 {
        self.mean.exp()
    }
}
