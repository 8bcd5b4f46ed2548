use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when none is supplied.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Settings for a [`Comparator`](crate::Comparator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Largest absolute difference at which two numeric leaves still match.
    pub tolerance: f64,
    /// Deepest nesting level that is compared. Anything below it is a
    /// mismatch. `None` leaves recursion bounded only by the input.
    pub max_depth: Option<usize>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_depth: None,
        }
    }
}

impl CompareConfig {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() {
            return Err(ConfigError::NonFiniteTolerance(self.tolerance));
        }
        if self.tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(self.tolerance));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("tolerance must be finite, got {0}")]
    NonFiniteTolerance(f64),
    #[error("tolerance must not be negative, got {0}")]
    NegativeTolerance(f64),
}
