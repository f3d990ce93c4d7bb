use epiflow_core::{OdeProblem, VectorField};

use super::{Config, Error, dopri5::Stages};

const SAFETY: f64 = 0.9;
const BETA: f64 = 0.04;
const EXPONENT: f64 = 0.2 - BETA * 0.75;

/// Bounds on `h_new / h` for one step-size update.
const MIN_RATIO: f64 = 0.2;
const MAX_RATIO: f64 = 10.0;

/// Error-per-step PI controller with Lund stabilization.
#[derive(Debug, Clone, Copy)]
pub(super) struct Controller {
    previous_error: f64,
    max_step: f64,
}

impl Controller {
    pub(super) fn new(max_step: f64) -> Self {
        Self {
            previous_error: 1e-4,
            max_step,
        }
    }

    /// Returns the next step size after accepting a step of size `h`.
    pub(super) fn accept(&mut self, err: f64, h: f64, after_rejection: bool) -> f64 {
        let fac = (err.powf(EXPONENT) / self.previous_error.powf(BETA) / SAFETY)
            .clamp(1.0 / MAX_RATIO, 1.0 / MIN_RATIO);
        self.previous_error = err.max(1e-4);

        let next = (h / fac).min(self.max_step);
        if after_rejection { next.min(h) } else { next }
    }

    /// Returns the retry step size after rejecting a step of size `h`.
    pub(super) fn reject(err: f64, h: f64) -> f64 {
        h / (err.powf(EXPONENT) / SAFETY).min(1.0 / MIN_RATIO)
    }
}

/// Guesses a first step size from the local behaviour of the field.
///
/// Takes an explicit Euler step of a trial size, measures how fast the slope
/// changes, and picks the step that would give a local error near the
/// tolerance for a fifth-order method. Costs one field evaluation.
pub(super) fn initial_step<F: VectorField>(
    problem: &OdeProblem<F>,
    config: &Config,
    stages: &mut Stages,
    time: f64,
    state: &[f64],
    max_step: f64,
) -> Result<f64, Error> {
    let slope = stages.slope().to_vec();

    let mut slope_norm = 0.0;
    let mut state_norm = 0.0;
    for (y, f) in state.iter().zip(&slope) {
        let scale = config.scale(y.abs());
        slope_norm += (f / scale).powi(2);
        state_norm += (y / scale).powi(2);
    }

    let mut h = if slope_norm <= 1e-10 || state_norm <= 1e-10 {
        1e-6
    } else {
        0.01 * (state_norm / slope_norm).sqrt()
    };
    h = h.min(max_step);

    let trial: Vec<f64> = state.iter().zip(&slope).map(|(y, f)| y + h * f).collect();
    let trial_slope = stages.probe(problem, time + h, &trial)?;

    let mut curvature = 0.0;
    for ((y, f0), f1) in state.iter().zip(&slope).zip(trial_slope) {
        curvature += ((f1 - f0) / config.scale(y.abs())).powi(2);
    }
    let curvature = curvature.sqrt() / h;
    let derivative = curvature.max(slope_norm.sqrt());

    let guess = if derivative <= 1e-15 {
        (h * 1e-3).max(1e-6)
    } else {
        (0.01 / derivative).powf(0.2)
    };

    Ok((100.0 * h).min(guess).min(max_step))
}
