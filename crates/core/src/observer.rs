/// Watches an integration as it advances and may steer it.
///
/// Solvers hand every event (one per accepted step, plus the initial state) to
/// the observer. Returning `Some(action)` asks the solver to act on it, for
/// example to stop before the end of the time span; returning `None` keeps
/// the run going. Each solver module defines its own event and action types.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Inspects one solver event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<O: Observer<f64, &'static str>>(mut observer: O, times: &[f64]) -> Option<f64> {
        times
            .iter()
            .find(|t| observer.observe(t).is_some())
            .copied()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(run((), &[0.0, 1.0, 2.0]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let stop_after_one = |t: &f64| (*t > 1.0).then_some("stop");

        assert_eq!(run(stop_after_one, &[0.0, 1.0, 2.0, 3.0]), Some(2.0));
    }
}
