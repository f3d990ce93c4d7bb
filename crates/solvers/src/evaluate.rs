use thiserror::Error;

use epiflow_core::{OdeProblem, VectorField, numeric};

/// Errors that can occur when evaluating a problem's vector field.
#[derive(Debug, Error)]
pub enum EvalError<FE> {
    /// The vector field returned an error.
    #[error("vector field failed")]
    Field(#[source] FE),

    /// The vector field returned a NaN or infinite component.
    #[error("derivative component {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Evaluates the problem's vector field at `(time, state)` into `out`.
///
/// # Errors
///
/// Returns an error if the field fails or produces a non-finite derivative.
pub fn evaluate<F: VectorField>(
    problem: &OdeProblem<F>,
    time: f64,
    state: &[f64],
    out: &mut [f64],
) -> Result<(), EvalError<F::Error>> {
    problem
        .field()
        .derivative(time, state, problem.params(), out)
        .map_err(EvalError::Field)?;

    match numeric::first_non_finite(out) {
        Some((index, value)) => Err(EvalError::NonFinite { index, value }),
        None => Ok(()),
    }
}
