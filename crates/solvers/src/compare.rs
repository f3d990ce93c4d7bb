//! Accuracy and cost comparison of the fixed-step methods.
//!
//! [`compare`] runs the adaptive solver once to get a reference trajectory,
//! then runs every [`Method`] at the caller's step size and measures:
//!
//! - the wall-clock time of the fixed-step solve alone, excluding reference
//!   and error work;
//! - the Euclidean norm of the difference between the method's trajectory and
//!   the reference, over the quantity chosen by the [`Selector`].
//!
//! By default the reference is sampled on 1001 evenly spaced points and
//! linearly interpolated onto each method's grid. [`ReferenceSampling::Dense`]
//! solves the reference directly on each grid instead, which keeps
//! interpolation error out of convergence studies.
//!
//! [`sweep`] repeats the comparison over several step sizes with a single
//! reference solve, and [`observed_order`] estimates the empirical order of
//! convergence between two of its entries.

mod config;
mod error;
mod interpolate;
mod result;

pub use config::{Config, ConfigError, ReferenceSampling, Selector};
pub use error::Error;
pub use interpolate::InterpError;
pub use result::{Comparison, MethodResult};

use std::{ops::Range, time::Instant};

use epiflow_core::{
    OdeProblem, TimeSpan, Trajectory, VectorField,
    numeric::{euclidean_norm, linspace},
};

use crate::{
    adaptive,
    fixed_step::{self, Method},
};

use interpolate::LinearReference;

/// Compares every fixed-step method against the adaptive reference at `dt`.
///
/// Results come back in [`Method::ALL`] order.
///
/// # Errors
///
/// Returns an error if the selector does not fit the problem, or if the
/// reference or any fixed-step solve fails. Failures are never downgraded:
/// no partial comparison is returned.
pub fn compare<F: VectorField>(
    problem: &OdeProblem<F>,
    span: TimeSpan,
    dt: f64,
    config: &Config,
) -> Result<Comparison, Error> {
    Comparator::new(problem, span, config)?.run(dt)
}

/// Compares every method at each step size in `dts`, in order.
///
/// The reference is solved once and shared by every entry.
///
/// # Errors
///
/// Returns the first error any comparison hits, as for [`compare`].
pub fn sweep<F: VectorField>(
    problem: &OdeProblem<F>,
    span: TimeSpan,
    dts: &[f64],
    config: &Config,
) -> Result<Vec<Comparison>, Error> {
    let comparator = Comparator::new(problem, span, config)?;
    dts.iter().map(|&dt| comparator.run(dt)).collect()
}

/// Estimates the order of convergence of `method` between two comparisons.
///
/// Uses RMS errors, so the comparisons may have different grid lengths:
///
/// ```text
/// p = ln(rms_coarse / rms_fine) / ln(dt_coarse / dt_fine)
/// ```
///
/// Returns `None` if either comparison lacks the method, or if the estimate
/// is not finite (equal step sizes or a zero error).
#[must_use]
pub fn observed_order(coarse: &Comparison, fine: &Comparison, method: Method) -> Option<f64> {
    let coarse_error = coarse.result(method)?.rms_error();
    let fine_error = fine.result(method)?.rms_error();

    let order = (coarse_error / fine_error).ln() / (coarse.dt / fine.dt).ln();
    order.is_finite().then_some(order)
}

/// A problem with its reference solved, ready to measure any step size.
struct Comparator<'a, F: VectorField> {
    problem: &'a OdeProblem<F>,
    span: TimeSpan,
    config: &'a Config,
    components: Range<usize>,
    reference: Trajectory,
    interpolants: Vec<LinearReference>,
}

impl<'a, F: VectorField> Comparator<'a, F> {
    fn new(problem: &'a OdeProblem<F>, span: TimeSpan, config: &'a Config) -> Result<Self, Error> {
        if config.points() < 2 {
            return Err(ConfigError::Points(config.points()).into());
        }
        let components = selected_components(config.selector(), problem.dimension())?;

        let t_eval = linspace(span.start(), span.end(), config.points());
        let reference = adaptive::solve(problem, span, &t_eval, config.adaptive())?.trajectory;

        let interpolants = match config.sampling() {
            ReferenceSampling::Interpolated => components
                .clone()
                .map(|component| LinearReference::new(&reference, component))
                .collect::<Result<Vec<_>, _>>()?,
            ReferenceSampling::Dense => Vec::new(),
        };

        Ok(Self {
            problem,
            span,
            config,
            components,
            reference,
            interpolants,
        })
    }

    fn run(&self, dt: f64) -> Result<Comparison, Error> {
        let results = Method::ALL
            .into_iter()
            .map(|method| self.measure(method, dt))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Comparison {
            dt,
            results,
            reference: self.reference.clone(),
        })
    }

    fn measure(&self, method: Method, dt: f64) -> Result<MethodResult, Error> {
        let start = Instant::now();
        let solution = fixed_step::solve_unobserved(self.problem, self.span, dt, method);
        let elapsed = start.elapsed();

        let solution = solution?;
        let trajectory = &solution.trajectory;

        let error = match self.config.sampling() {
            ReferenceSampling::Interpolated => self.interpolated_error(trajectory)?,
            ReferenceSampling::Dense => self.dense_error(trajectory)?,
        };

        log::debug!(
            "{method} at dt = {dt}: error {error:.3e} over {} samples in {elapsed:?} ({} evaluations)",
            trajectory.len(),
            solution.evaluations,
        );

        Ok(MethodResult {
            method,
            elapsed,
            error,
            samples: trajectory.len(),
            evaluations: solution.evaluations,
        })
    }

    fn interpolated_error(&self, trajectory: &Trajectory) -> Result<f64, Error> {
        let mut diffs = Vec::with_capacity(trajectory.len() * self.interpolants.len());

        for (time, state) in trajectory.iter() {
            for reference in &self.interpolants {
                diffs.push(state[reference.component()] - reference.at(time)?);
            }
        }

        Ok(euclidean_norm(diffs))
    }

    fn dense_error(&self, trajectory: &Trajectory) -> Result<f64, Error> {
        let times = trajectory.times();
        let end = times
            .last()
            .map_or(self.span.end(), |&last| last.max(self.span.end()));
        let span = TimeSpan::new(self.span.start(), end)?;

        let reference = adaptive::solve(self.problem, span, times, self.config.adaptive())?;

        let diffs = trajectory
            .states()
            .zip(reference.trajectory.states())
            .flat_map(|(state, exact)| self.components.clone().map(move |i| state[i] - exact[i]));

        Ok(euclidean_norm(diffs))
    }
}

fn selected_components(selector: Selector, dimension: usize) -> Result<Range<usize>, Error> {
    match selector {
        Selector::Component(index) if index < dimension => Ok(index..index + 1),
        Selector::Component(index) => Err(Error::SelectorOutOfRange { index, dimension }),
        Selector::Norm => Ok(0..dimension),
    }
}
