use std::slice::ChunksExact;

use thiserror::Error;

/// Errors that can occur while building a trajectory.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TrajectoryError {
    #[error("state has {actual} components but the trajectory holds {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("sample times must strictly increase: {time} follows {previous}")]
    NonIncreasingTime { previous: f64, time: f64 },
}

/// An ordered sequence of `(time, state)` samples produced by one solver call.
///
/// Times strictly increase and every state has the same number of components.
/// States are stored row-major in a single buffer. Once built, a trajectory
/// is never modified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    dimension: usize,
    times: Vec<f64>,
    states: Vec<f64>,
}

impl Trajectory {
    /// Returns the number of components in each state.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the state at sample `index`, if it exists.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dimension)?;
        self.states.get(start..start.checked_add(self.dimension)?)
    }

    /// Returns an iterator over the states in time order.
    pub fn states(&self) -> ChunksExact<'_, f64> {
        self.states.chunks_exact(self.dimension.max(1))
    }

    /// Returns the values of one component across all samples.
    ///
    /// Returns `None` if `component` is out of range.
    #[must_use]
    pub fn component(&self, component: usize) -> Option<Vec<f64>> {
        (component < self.dimension).then(|| {
            self.states()
                .map(|state| state[component])
                .collect()
        })
    }

    /// Returns an iterator over `(time, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.times.iter().copied().zip(self.states())
    }

    /// Returns the final sample.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &[f64])> {
        let index = self.len().checked_sub(1)?;
        Some((self.times[index], self.state(index)?))
    }
}

/// Accumulates samples into a [`Trajectory`] while enforcing its invariants.
#[derive(Debug, Clone)]
pub struct TrajectoryBuilder {
    inner: Trajectory,
}

impl TrajectoryBuilder {
    /// Creates an empty builder for states with `dimension` components.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    /// Creates an empty builder with room for `samples` samples.
    #[must_use]
    pub fn with_capacity(dimension: usize, samples: usize) -> Self {
        Self {
            inner: Trajectory {
                dimension,
                times: Vec::with_capacity(samples),
                states: Vec::with_capacity(samples.saturating_mul(dimension)),
            },
        }
    }

    /// Appends a sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the state has the wrong number of components or if
    /// `time` does not exceed the previous sample time. The builder is left
    /// unchanged on error.
    pub fn push(&mut self, time: f64, state: &[f64]) -> Result<(), TrajectoryError> {
        let expected = self.inner.dimension;
        if state.len() != expected {
            return Err(TrajectoryError::DimensionMismatch {
                expected,
                actual: state.len(),
            });
        }
        if let Some(&previous) = self.inner.times.last() {
            // Also rejects NaN times.
            if !(time > previous) {
                return Err(TrajectoryError::NonIncreasingTime { previous, time });
            }
        }

        self.inner.times.push(time);
        self.inner.states.extend_from_slice(state);
        Ok(())
    }

    /// Returns the number of samples pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Finishes building and returns the trajectory.
    #[must_use]
    pub fn finish(self) -> Trajectory {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        let mut builder = TrajectoryBuilder::with_capacity(2, 3);
        builder.push(0.0, &[1.0, 0.0]).unwrap();
        builder.push(0.5, &[0.8, 0.2]).unwrap();
        builder.push(1.0, &[0.5, 0.4]).unwrap();
        builder.finish()
    }

    #[test]
    fn accessors_expose_samples() {
        let trajectory = sample();

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.dimension(), 2);
        assert_eq!(trajectory.times(), &[0.0, 0.5, 1.0]);
        assert_eq!(trajectory.state(1), Some(&[0.8, 0.2][..]));
        assert_eq!(trajectory.state(3), None);
        assert_eq!(trajectory.component(1), Some(vec![0.0, 0.2, 0.4]));
        assert_eq!(trajectory.component(2), None);
        assert_eq!(trajectory.last(), Some((1.0, &[0.5, 0.4][..])));
    }

    #[test]
    fn iter_pairs_times_with_states() {
        let trajectory = sample();

        let pairs: Vec<_> = trajectory.iter().map(|(t, y)| (t, y[0])).collect();

        assert_eq!(pairs, vec![(0.0, 1.0), (0.5, 0.8), (1.0, 0.5)]);
    }

    #[test]
    fn rejects_wrong_dimension() {
        let mut builder = TrajectoryBuilder::new(2);

        let err = builder.push(0.0, &[1.0]).unwrap_err();

        assert_eq!(
            err,
            TrajectoryError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn rejects_non_increasing_time() {
        let mut builder = TrajectoryBuilder::new(1);
        builder.push(1.0, &[0.0]).unwrap();

        assert!(matches!(
            builder.push(1.0, &[0.0]),
            Err(TrajectoryError::NonIncreasingTime { .. })
        ));
        assert!(builder.push(f64::NAN, &[0.0]).is_err());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn empty_trajectory_has_no_last_sample() {
        let trajectory = TrajectoryBuilder::new(3).finish();

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.last(), None);
    }
}
