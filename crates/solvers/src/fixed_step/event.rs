/// Event emitted by the fixed-step integrator for each grid point.
///
/// Step 0 carries the initial state before any integration.
/// Steps `1..N` are emitted after each step, at `t0 + step * dt`.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for the initial state).
    pub step: usize,

    /// The grid time of this state.
    pub time: f64,

    /// The state at `time`.
    pub state: &'a [f64],
}
