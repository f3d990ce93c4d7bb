//! Small dense-vector helpers shared by the solvers.

/// Writes `out[i] = y[i] + scale * x[i]`.
///
/// All three slices must have the same length.
pub fn axpy(y: &[f64], scale: f64, x: &[f64], out: &mut [f64]) {
    debug_assert_eq!(y.len(), x.len());
    debug_assert_eq!(y.len(), out.len());

    for ((o, yi), xi) in out.iter_mut().zip(y).zip(x) {
        *o = yi + scale * xi;
    }
}

/// Returns `n` evenly spaced points from `start` to `end`, inclusive.
///
/// The first point is exactly `start` and, for `n >= 2`, the last point is
/// exactly `end`. Returns an empty vector for `n == 0` and `[start]` for `n == 1`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (n - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            let mut points: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Returns the Euclidean norm of the values.
#[must_use]
pub fn euclidean_norm(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Returns the index and value of the first non-finite entry, if any.
#[must_use]
pub fn first_non_finite(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn axpy_combines_vectors() {
        let mut out = [0.0; 3];

        axpy(&[1.0, 2.0, 3.0], 0.5, &[2.0, -2.0, 4.0], &mut out);

        assert_eq!(out, [2.0, 1.0, 5.0]);
    }

    #[test]
    fn linspace_hits_both_ends() {
        let points = linspace(0.0, 60.0, 1001);

        assert_eq!(points.len(), 1001);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[1000], 60.0);
        assert_relative_eq!(points[500], 30.0, epsilon = 1e-12);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(2.0, 5.0, 2), vec![2.0, 5.0]);
    }

    #[test]
    fn norm_of_pythagorean_triple() {
        assert_relative_eq!(euclidean_norm([3.0, 4.0]), 5.0);
        assert_eq!(euclidean_norm(std::iter::empty()), 0.0);
    }

    #[test]
    fn finds_non_finite_entries() {
        assert_eq!(first_non_finite(&[1.0, 2.0]), None);
        assert_eq!(first_non_finite(&[1.0, f64::INFINITY, f64::NAN]), Some((1, f64::INFINITY)));
    }
}
