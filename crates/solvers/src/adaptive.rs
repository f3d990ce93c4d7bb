//! Adaptive high-accuracy integration.
//!
//! [`solve`] integrates with the Dormand–Prince 5(4) pair, choosing each step
//! so that the estimated local error stays within the tolerances of a
//! [`Config`]. Between accepted steps the solution is available through a
//! fourth-order continuous extension, so the trajectory is reported exactly
//! at the caller's evaluation times regardless of where the steps land.
//!
//! The comparator uses this solver as ground truth, so the defaults are tight:
//! `abs_tol = 1e-10` and `rel_tol = 1e-8`.

mod config;
mod dopri5;
mod error;
mod solution;
mod step_size;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Stats};

use epiflow_core::{OdeProblem, TimeSpan, TrajectoryBuilder, VectorField};

use dopri5::Stages;
use step_size::{Controller, initial_step};

/// Unit roundoff used to detect a collapsed step size.
const UROUND: f64 = 2.3e-16;

/// Integrates an ODE problem over `span`, sampling at `t_eval`.
///
/// `t_eval` must be non-empty, finite, strictly increasing and contained in
/// `span`. The returned trajectory has exactly one row per requested time,
/// with the time column equal to `t_eval`. A request at `span.start()`
/// yields the initial state unchanged.
///
/// Integration stops as soon as the last requested time is covered, so a
/// `t_eval` ending before `span.end()` does no work past it.
///
/// # Errors
///
/// Returns an error if `t_eval` is invalid, if the vector field fails or
/// returns a non-finite value, if the step budget of `config` is exhausted,
/// or if the step size collapses below floating-point resolution.
pub fn solve<F: VectorField>(
    problem: &OdeProblem<F>,
    span: TimeSpan,
    t_eval: &[f64],
    config: &Config,
) -> Result<Solution, Error> {
    validate_eval_times(span, t_eval)?;

    let dimension = problem.dimension();
    let end = span.end();
    let max_step = span.duration();

    let mut output = TrajectoryBuilder::with_capacity(dimension, t_eval.len());
    let mut requests = t_eval.iter().copied().peekable();

    let mut x = span.start();
    let mut y = problem.initial().to_vec();

    while let Some(t) = requests.next_if(|&t| t <= x) {
        output.push(t, &y)?;
    }
    if requests.peek().is_none() {
        return Ok(Solution {
            trajectory: output.finish(),
            stats: Stats::default(),
        });
    }

    let mut stages = Stages::new(problem, x, &y)?;
    let mut h = initial_step(problem, config, &mut stages, x, &y, max_step)?;
    let mut controller = Controller::new(max_step);
    let mut stats = Stats::default();
    let mut sample = vec![0.0; dimension];

    let mut attempts = 0;
    let mut rejected_last = false;

    while requests.peek().is_some() {
        if attempts == config.max_steps() {
            return Err(Error::MaxStepsExceeded {
                time: x,
                max_steps: config.max_steps(),
            });
        }
        attempts += 1;

        if 0.1 * h.abs() <= x.abs() * UROUND {
            return Err(Error::StepSizeTooSmall { time: x, step: h });
        }

        let last = x + 1.01 * h >= end;
        if last {
            h = end - x;
        }

        let err = stages.attempt(problem, config, x, &y, h)?;

        if err <= 1.0 {
            stats.accepted += 1;
            let x_new = if last { end } else { x + h };

            if requests.peek().is_some_and(|&t| t <= x_new) {
                let dense = stages.dense_output(x, &y, h);
                while let Some(t) = requests.next_if(|&t| t <= x_new) {
                    if t == x_new {
                        output.push(t, stages.next_state())?;
                    } else {
                        dense.interpolate(t, &mut sample);
                        output.push(t, &sample)?;
                    }
                }
            }

            stages.advance(&mut y);
            x = x_new;
            h = controller.accept(err, h, rejected_last);
            rejected_last = false;

            if last {
                break;
            }
        } else {
            stats.rejected += 1;
            log::trace!("rejected step of {h:e} at t = {x} (error ratio {err:.3})");

            h = Controller::reject(err, h);
            rejected_last = true;
        }
    }

    stats.evaluations = stages.evaluations();
    log::debug!(
        "adaptive solve reached t = {x}: {} accepted, {} rejected, {} evaluations",
        stats.accepted,
        stats.rejected,
        stats.evaluations,
    );

    Ok(Solution {
        trajectory: output.finish(),
        stats,
    })
}

fn validate_eval_times(span: TimeSpan, t_eval: &[f64]) -> Result<(), Error> {
    let invalid = |reason: &'static str| -> Result<(), Error> {
        Err(Error::InvalidEvalTimes { reason })
    };

    if t_eval.is_empty() {
        return invalid("no evaluation times given");
    }
    if t_eval.iter().any(|t| !t.is_finite()) {
        return invalid("evaluation times must be finite");
    }
    if t_eval.windows(2).any(|pair| pair[1] <= pair[0]) {
        return invalid("evaluation times must be strictly increasing");
    }
    if !t_eval.iter().all(|&t| span.contains(t)) {
        return invalid("evaluation times must lie within the time span");
    }

    Ok(())
}
