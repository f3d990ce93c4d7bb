use std::error::Error as StdError;

use epiflow_core::TrajectoryError;

use crate::EvalError;

/// Errors that can occur during adaptive integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid evaluation times: {reason}")]
    InvalidEvalTimes { reason: &'static str },

    #[error("failed to evaluate the vector field at t = {time}")]
    Field {
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("exceeded {max_steps} steps at t = {time} without reaching the last evaluation time")]
    MaxStepsExceeded { time: f64, max_steps: usize },

    #[error("step size {step} fell below the resolution of t = {time}")]
    StepSizeTooSmall { time: f64, step: f64 },

    #[error("failed to record the solution")]
    Trajectory(#[from] TrajectoryError),
}

impl Error {
    pub(crate) fn field<E: StdError + Send + Sync + 'static>(time: f64, err: EvalError<E>) -> Self {
        Self::Field {
            time,
            source: Box::new(err),
        }
    }
}
