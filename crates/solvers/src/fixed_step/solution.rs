use epiflow_core::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the last grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Grid times and states, starting with the initial state.
    pub trajectory: Trajectory,

    /// Number of steps taken.
    pub steps: usize,

    /// Number of vector field evaluations.
    pub evaluations: usize,
}
