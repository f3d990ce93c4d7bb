use epiflow_core::Trajectory;

/// Work counters for one adaptive solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of vector field evaluations.
    pub evaluations: usize,

    /// Number of accepted steps.
    pub accepted: usize,

    /// Number of steps rejected by the error test.
    pub rejected: usize,
}

/// The result of an adaptive solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The solution sampled exactly at the requested evaluation times.
    pub trajectory: Trajectory,

    /// Work counters.
    pub stats: Stats,
}
