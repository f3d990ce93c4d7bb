use ndarray::Array1;
use ninterp::{
    error::{InterpolateError, ValidateError},
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};
use thiserror::Error;

use epiflow_core::Trajectory;

#[derive(Debug, Error)]
pub enum InterpError {
    #[error(transparent)]
    Validation(#[from] ValidateError),
    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}

/// Piecewise-linear view of one component of a reference trajectory.
///
/// Times before the first sample or after the last one clamp to the nearest
/// endpoint, which covers fixed-step grids that overrun the span.
pub(super) struct LinearReference {
    component: usize,
    interp: Interp1DOwned<f64, Linear>,
}

impl LinearReference {
    pub(super) fn new(reference: &Trajectory, component: usize) -> Result<Self, InterpError> {
        let x = Array1::from(reference.times().to_vec());
        let f_x: Array1<f64> = reference.states().map(|state| state[component]).collect();

        let interp = Interp1DOwned::new(x, f_x, Linear, Extrapolate::Clamp)?;

        Ok(Self { component, interp })
    }

    pub(super) fn component(&self) -> usize {
        self.component
    }

    pub(super) fn at(&self, time: f64) -> Result<f64, InterpError> {
        Ok(self.interp.interpolate(&[time])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use epiflow_core::TrajectoryBuilder;

    fn reference() -> Trajectory {
        let mut builder = TrajectoryBuilder::new(2);
        builder.push(0.0, &[1.0, 0.0]).unwrap();
        builder.push(1.0, &[0.5, 2.0]).unwrap();
        builder.push(2.0, &[0.0, 3.0]).unwrap();
        builder.finish()
    }

    #[test]
    fn interpolates_between_samples() {
        let interp = LinearReference::new(&reference(), 1).unwrap();

        assert_eq!(interp.component(), 1);
        assert_relative_eq!(interp.at(0.25).unwrap(), 0.5);
        assert_relative_eq!(interp.at(1.5).unwrap(), 2.5);
    }

    #[test]
    fn reproduces_samples_exactly() {
        let interp = LinearReference::new(&reference(), 0).unwrap();

        assert_eq!(interp.at(1.0).unwrap(), 0.5);
    }

    #[test]
    fn clamps_past_the_last_sample() {
        let interp = LinearReference::new(&reference(), 1).unwrap();

        assert_relative_eq!(interp.at(2.7).unwrap(), 3.0);
    }
}
