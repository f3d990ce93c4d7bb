use std::time::Duration;

use epiflow_core::Trajectory;

use crate::fixed_step::Method;

/// Cost and accuracy of one fixed-step method against the reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodResult {
    pub method: Method,

    /// Wall-clock time of the fixed-step solve alone.
    pub elapsed: Duration,

    /// Euclidean norm of the difference from the reference, taken over every
    /// grid sample of the selected quantity.
    pub error: f64,

    /// Number of grid samples the error was taken over.
    pub samples: usize,

    /// Number of vector field evaluations the method made.
    pub evaluations: usize,
}

impl MethodResult {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.method.name()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Returns the root-mean-square error per sample.
    ///
    /// The raw [`error`](Self::error) grows with the number of samples, so
    /// errors at different step sizes are only comparable in this form.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let samples = self.samples.max(1) as f64;
        self.error / samples.sqrt()
    }
}

/// The outcome of comparing every fixed-step method at one step size.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    pub dt: f64,

    /// One result per method, in [`Method::ALL`] order.
    pub results: Vec<MethodResult>,

    /// The reference trajectory on its evenly spaced grid.
    pub reference: Trajectory,
}

impl Comparison {
    /// Returns the result for `method`.
    #[must_use]
    pub fn result(&self, method: Method) -> Option<&MethodResult> {
        self.results.iter().find(|result| result.method == method)
    }
}
