//! Core traits and types for epiflow.
//!
//! This crate defines the shared abstractions that solvers and models build on:
//!
//! - [`VectorField`]: the right-hand side `dy/dt = f(t, y, params)` of an ODE system
//! - [`OdeProblem`]: a vector field paired with its parameters and initial state
//! - [`TimeSpan`]: a validated integration interval
//! - [`Trajectory`]: an immutable sequence of `(time, state)` samples
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! The [`numeric`] module holds the small vector helpers shared by solvers.

mod field;
mod observer;
mod problem;
mod trajectory;

pub mod numeric;

pub use field::VectorField;
pub use observer::Observer;
pub use problem::{OdeProblem, ProblemError, TimeSpan};
pub use trajectory::{Trajectory, TrajectoryBuilder, TrajectoryError};
