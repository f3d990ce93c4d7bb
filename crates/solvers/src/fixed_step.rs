//! Fixed-step integrators for ODE problems.
//!
//! The integrator advances a state over the uniform grid
//! `t0, t0 + dt, ..., t0 + (N - 1) dt` with `N = ceil((tf - t0) / dt) + 1`,
//! using one of three explicit stepping rules (see [`Method`]):
//!
//! | Method | Order | Evaluations per step |
//! |---|---|---|
//! | [`Method::Euler`] | 1 | 1 |
//! | [`Method::ImprovedEuler`] | 2 | 2 |
//! | [`Method::Rk4`] | 4 | 4 |
//!
//! When `dt` does not divide the span, the last grid point lies past `tf`.
//! The grid is never shortened to land on `tf`, so that every run with the
//! same `dt` samples the same times.
//!
//! # Example
//!
//! ```ignore
//! use epiflow_solvers::fixed_step::{self, Method};
//!
//! let solution = fixed_step::solve_unobserved(&problem, span, 0.1, Method::Rk4)?;
//!
//! for (t, state) in solution.trajectory.iter() {
//!     println!("t={t}: {state:?}");
//! }
//! ```

mod action;
mod error;
mod event;
mod grid;
mod method;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use method::Method;
pub use solution::{Solution, Status};

use epiflow_core::{Observer, OdeProblem, TimeSpan, TrajectoryBuilder, VectorField};

use grid::Grid;
use method::Stages;

/// Integrates an ODE problem over `span` with a fixed step.
///
/// # Algorithm
///
/// 1. Build the grid from `span` and `dt`.
/// 2. Record the initial state at `t0` and emit step 0 to the observer.
/// 3. For each following grid point:
///    - Advance the state by one step of `method` from the previous point.
///    - Record the new state.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with the full trajectory.
///
/// The result depends only on the inputs: repeated calls produce
/// bit-identical trajectories.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, if the grid would be
/// too large, or if the vector field fails or returns a non-finite value.
/// No trajectory is returned on error.
pub fn solve<F, Obs>(
    problem: &OdeProblem<F>,
    span: TimeSpan,
    dt: f64,
    method: Method,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let grid = Grid::new(span, dt)?;
    let dimension = problem.dimension();

    let mut history = TrajectoryBuilder::with_capacity(dimension, grid.len());
    let mut stages = Stages::new(dimension);
    let mut state = problem.initial().to_vec();
    let mut next = vec![0.0; dimension];
    let mut evaluations = 0;

    history.push(grid.time(0), &state)?;

    let event = Event {
        step: 0,
        time: grid.time(0),
        state: &state,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory: history.finish(),
            steps: 0,
            evaluations,
        });
    }

    for step in 1..grid.len() {
        stages.advance(method, problem, grid.time(step - 1), dt, &state, &mut next)?;
        evaluations += method.evaluations_per_step();
        std::mem::swap(&mut state, &mut next);

        let time = grid.time(step);
        history.push(time, &state)?;

        let event = Event {
            step,
            time,
            state: &state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory: history.finish(),
                steps: step,
                evaluations,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory: history.finish(),
        steps: grid.len() - 1,
        evaluations,
    })
}

/// Integrates an ODE problem with a fixed step, without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: VectorField>(
    problem: &OdeProblem<F>,
    span: TimeSpan,
    dt: f64,
    method: Method,
) -> Result<Solution, Error> {
    solve(problem, span, dt, method, ())
}
