//! Numerical integrators for epiflow.
//!
//! # Modules
//!
//! - [`fixed_step`]: explicit Euler, improved Euler and classical RK4 on a
//!   uniform time grid
//! - [`adaptive`]: Dormand–Prince 5(4) with step-size control and dense
//!   output, used as the high-accuracy reference
//! - [`compare`]: runs every fixed-step method against the adaptive
//!   reference and reports cost and error
//!
//! All solvers integrate an [`OdeProblem`] over a [`TimeSpan`].
//!
//! [`OdeProblem`]: epiflow_core::OdeProblem
//! [`TimeSpan`]: epiflow_core::TimeSpan

mod evaluate;

pub use evaluate::{EvalError, evaluate};

pub mod adaptive;
pub mod compare;
pub mod fixed_step;
