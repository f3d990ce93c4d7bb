use std::error::Error as StdError;

use epiflow_core::TrajectoryError;

use crate::EvalError;

use super::Method;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {dt}")]
    InvalidStepSize { dt: f64 },

    #[error("step size {dt} needs {steps} steps to cover a span of {duration}")]
    GridTooLarge { dt: f64, duration: f64, steps: f64 },

    #[error("{method} failed to evaluate the vector field at t = {time}")]
    Field {
        method: Method,
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("time grid stopped increasing")]
    Trajectory(#[from] TrajectoryError),
}

impl Error {
    pub(crate) fn field<E: StdError + Send + Sync + 'static>(
        method: Method,
        time: f64,
        err: EvalError<E>,
    ) -> Self {
        Self::Field {
            method,
            time,
            source: Box::new(err),
        }
    }
}
