use thiserror::Error;

use crate::VectorField;

/// Errors raised when a problem or time span is misconfigured.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("time span bounds must be finite: start = {start}, end = {end}")]
    NonFiniteSpan { start: f64, end: f64 },

    #[error("time span must have end > start: start = {start}, end = {end}")]
    EmptySpan { start: f64, end: f64 },

    #[error("initial state has {actual} components but the field expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("vector field must have at least one component")]
    ZeroDimension,

    #[error("initial state component {index} is not finite: {value}")]
    NonFiniteInitial { index: usize, value: f64 },
}

/// A validated integration interval `[start, end]` with `end > start`.
///
/// Deserialization goes through [`TimeSpan::new`], so a decoded span upholds
/// the same invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeSpan {
    start: f64,
    end: f64,
}

impl TimeSpan {
    /// Creates a time span.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or if `end <= start`.
    pub fn new(start: f64, end: f64) -> Result<Self, ProblemError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ProblemError::NonFiniteSpan { start, end });
        }
        if end <= start {
            return Err(ProblemError::EmptySpan { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`, always positive.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true if `time` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        (self.start..=self.end).contains(&time)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeSpan {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let Raw { start, end } = Raw::deserialize(deserializer)?;
        Self::new(start, end).map_err(serde::de::Error::custom)
    }
}

/// An initial value problem without its time span: a vector field, the
/// parameters it is evaluated with, and the state at the start of integration.
///
/// The span is supplied per solve so the same problem can be integrated over
/// different horizons (the comparator extends it when a fixed-step grid
/// overruns the requested end).
#[derive(Debug, Clone)]
pub struct OdeProblem<F: VectorField> {
    field: F,
    params: F::Params,
    initial: Vec<f64>,
}

impl<F: VectorField> OdeProblem<F> {
    /// Creates a problem after checking the initial state against the field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field has zero dimension, if the initial state
    /// length does not match it, or if any initial component is non-finite.
    pub fn new(
        field: F,
        params: F::Params,
        initial: impl Into<Vec<f64>>,
    ) -> Result<Self, ProblemError> {
        let initial = initial.into();
        let expected = field.dimension();

        if expected == 0 {
            return Err(ProblemError::ZeroDimension);
        }
        if initial.len() != expected {
            return Err(ProblemError::DimensionMismatch {
                expected,
                actual: initial.len(),
            });
        }
        if let Some((index, &value)) = initial.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ProblemError::NonFiniteInitial { index, value });
        }

        Ok(Self {
            field,
            params,
            initial,
        })
    }

    #[must_use]
    pub fn field(&self) -> &F {
        &self.field
    }

    #[must_use]
    pub fn params(&self) -> &F::Params {
        &self.params
    }

    #[must_use]
    pub fn initial(&self) -> &[f64] {
        &self.initial
    }

    /// Returns the number of state components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.initial.len()
    }
}
