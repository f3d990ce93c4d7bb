use epiflow_core::TimeSpan;

use super::Error;

/// Upper bound on the number of steps a single run may take.
///
/// The trajectory is preallocated, so this also bounds its memory.
pub(super) const MAX_STEPS: f64 = 1e7;

/// The uniform time grid `t0, t0 + dt, ..., t0 + (N - 1) dt`.
///
/// `N = ceil((tf - t0) / dt) + 1`, so the last point reaches `tf` and
/// overshoots it when `dt` does not divide the span.
#[derive(Debug, Clone, Copy)]
pub(super) struct Grid {
    start: f64,
    dt: f64,
    len: usize,
}

impl Grid {
    pub(super) fn new(span: TimeSpan, dt: f64) -> Result<Self, Error> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::InvalidStepSize { dt });
        }

        let duration = span.duration();
        let steps = (duration / dt).ceil();
        if !steps.is_finite() || steps > MAX_STEPS {
            return Err(Error::GridTooLarge {
                dt,
                duration,
                steps,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = steps as usize + 1;

        Ok(Self {
            start: span.start(),
            dt,
            len,
        })
    }

    /// Returns the number of grid points.
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Returns the time of grid point `k`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn time(&self, k: usize) -> f64 {
        self.start + k as f64 * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: f64, end: f64) -> TimeSpan {
        TimeSpan::new(start, end).unwrap()
    }

    #[test]
    fn exact_division_ends_on_span_end() {
        let grid = Grid::new(span(0.0, 10.0), 2.0).unwrap();

        assert_eq!(grid.len(), 6);
        assert_eq!(grid.time(5), 10.0);
    }

    #[test]
    fn inexact_division_overruns_span_end() {
        let grid = Grid::new(span(0.0, 10.0), 3.0).unwrap();

        assert_eq!(grid.len(), 5);
        assert_eq!(grid.time(4), 12.0);
    }

    #[test]
    fn rejects_bad_step_sizes() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Grid::new(span(0.0, 1.0), dt),
                Err(Error::InvalidStepSize { .. })
            ));
        }
    }

    #[test]
    fn rejects_grids_that_are_too_large() {
        assert!(matches!(
            Grid::new(span(0.0, 1.0), 1e-300),
            Err(Error::GridTooLarge { .. })
        ));

        // Within u32 range but far beyond what fits in memory.
        assert!(matches!(
            Grid::new(span(0.0, 60.0), 60.0 / 4e9),
            Err(Error::GridTooLarge { .. })
        ));
    }

    #[test]
    fn accepts_large_grids_below_the_step_limit() {
        let steps = 2_f64.powi(23);
        assert!(steps < MAX_STEPS);

        let grid = Grid::new(span(0.0, 1.0), 1.0 / steps).unwrap();

        assert_eq!(grid.len(), (1 << 23) + 1);
        assert_eq!(grid.time(1 << 23), 1.0);
    }
}
