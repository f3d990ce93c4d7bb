/// Control actions supported by the fixed-step integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the trajectory recorded so far.
    StopEarly,
}
