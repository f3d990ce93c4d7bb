//! The reference SIR outbreak used across the integration tests.
//!
//! `beta = 0.5`, `gamma = 0.1`, `S0 = 0.99`, `I0 = 0.01`, over `t` in `[0, 60]`.

use epiflow_core::{OdeProblem, TimeSpan};
use epiflow_models::{Sir, SirFull, SirParams};
use epiflow_solvers::{
    adaptive,
    compare::{self, ReferenceSampling},
};

pub fn sir_params() -> SirParams {
    SirParams::new(0.5, 0.1).expect("SIR rates are valid")
}

pub fn sir() -> OdeProblem<Sir> {
    OdeProblem::new(Sir, sir_params(), [0.99, 0.01]).expect("SIR problem is valid")
}

pub fn sir_full() -> OdeProblem<SirFull> {
    OdeProblem::new(SirFull, sir_params(), [0.99, 0.01, 0.0]).expect("SIR problem is valid")
}

pub fn outbreak_span() -> TimeSpan {
    TimeSpan::new(0.0, 60.0).expect("span is valid")
}

/// A comparison config for convergence studies.
///
/// Samples the reference directly on each grid, with tolerances tight enough
/// that reference error stays well below RK4's error at the step sizes used.
pub fn convergence_config() -> compare::Config {
    let adaptive = adaptive::Config::new(1e-13, 1e-12, 1_000_000).expect("tolerances are valid");

    compare::Config::default()
        .with_adaptive(adaptive)
        .with_sampling(ReferenceSampling::Dense)
}
