use thiserror::Error;

/// Configuration for the adaptive solver.
///
/// The defaults (`abs_tol = 1e-10`, `rel_tol = 1e-8`) are tight enough for
/// the solution to serve as ground truth when measuring fixed-step error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    abs_tol: f64,
    rel_tol: f64,
    max_steps: usize,
}

/// Errors that can occur when validating an adaptive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol and rel_tol cannot both be zero")]
    ZeroTolerance,

    #[error("max_steps must be positive")]
    MaxSteps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            abs_tol: 1e-10,
            rel_tol: 1e-8,
            max_steps: 100_000,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Config {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            abs_tol: f64,
            rel_tol: f64,
            max_steps: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.abs_tol, raw.rel_tol, raw.max_steps).map_err(serde::de::Error::custom)
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, if both
    /// tolerances are zero, or if `max_steps` is zero.
    pub fn new(abs_tol: f64, rel_tol: f64, max_steps: usize) -> Result<Self, ConfigError> {
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }

        Ok(Self {
            abs_tol,
            rel_tol,
            max_steps,
        })
    }

    /// Returns the absolute error tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative error tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the maximum number of attempted steps.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the error scale `abs_tol + rel_tol * magnitude`.
    pub(super) fn scale(&self, magnitude: f64) -> f64 {
        self.abs_tol + self.rel_tol * magnitude
    }
}
