use std::fmt;

use epiflow_core::{OdeProblem, VectorField, numeric::axpy};

use crate::evaluate;

use super::Error;

/// The stepping rule used by the fixed-step integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Explicit (forward) Euler, first order.
    ///
    /// ```text
    /// y[k+1] = y[k] + dt * f(t[k], y[k])
    /// ```
    Euler,

    /// Improved Euler, second order.
    ///
    /// The predictor slope moves the state to the interval midpoint, and the
    /// slope evaluated there advances the full step:
    ///
    /// ```text
    /// k1 = f(t, y)
    /// k2 = f(t + dt/2, y + dt/2 * k1)
    /// y[k+1] = y[k] + dt * k2
    /// ```
    ImprovedEuler,

    /// Classical fourth-order Runge–Kutta.
    ///
    /// ```text
    /// k1 = f(t, y)
    /// k2 = f(t + dt/2, y + dt/2 * k1)
    /// k3 = f(t + dt/2, y + dt/2 * k2)
    /// k4 = f(t + dt, y + dt * k3)
    /// y[k+1] = y[k] + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
    /// ```
    Rk4,
}

impl Method {
    /// Every method, from cheapest to most accurate.
    ///
    /// The comparator reports results in this order.
    pub const ALL: [Method; 3] = [Method::Euler, Method::ImprovedEuler, Method::Rk4];

    /// Returns the human-readable method name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "Euler",
            Method::ImprovedEuler => "Improved Euler",
            Method::Rk4 => "RK4",
        }
    }

    /// Returns the order of the global error, `p` in `O(dt^p)`.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::ImprovedEuler => 2,
            Method::Rk4 => 4,
        }
    }

    /// Returns the number of vector field evaluations per step.
    #[must_use]
    pub fn evaluations_per_step(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::ImprovedEuler => 2,
            Method::Rk4 => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stage buffers reused across steps.
pub(super) struct Stages {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    scratch: Vec<f64>,
}

impl Stages {
    pub(super) fn new(dimension: usize) -> Self {
        Self {
            k1: vec![0.0; dimension],
            k2: vec![0.0; dimension],
            k3: vec![0.0; dimension],
            k4: vec![0.0; dimension],
            scratch: vec![0.0; dimension],
        }
    }

    /// Advances `state` from `time` by one step of size `dt` into `next`.
    pub(super) fn advance<F: VectorField>(
        &mut self,
        method: Method,
        problem: &OdeProblem<F>,
        time: f64,
        dt: f64,
        state: &[f64],
        next: &mut [f64],
    ) -> Result<(), Error> {
        let eval = |t: f64, y: &[f64], out: &mut [f64]| {
            evaluate(problem, t, y, out).map_err(|err| Error::field(method, t, err))
        };

        let half = 0.5 * dt;
        let k1 = self.k1.as_mut_slice();
        let k2 = self.k2.as_mut_slice();
        let k3 = self.k3.as_mut_slice();
        let k4 = self.k4.as_mut_slice();
        let scratch = self.scratch.as_mut_slice();

        match method {
            Method::Euler => {
                eval(time, state, k1)?;
                axpy(state, dt, k1, next);
            }
            Method::ImprovedEuler => {
                eval(time, state, k1)?;
                axpy(state, half, k1, scratch);
                eval(time + half, scratch, k2)?;
                axpy(state, dt, k2, next);
            }
            Method::Rk4 => {
                eval(time, state, k1)?;
                axpy(state, half, k1, scratch);
                eval(time + half, scratch, k2)?;
                axpy(state, half, k2, scratch);
                eval(time + half, scratch, k3)?;
                axpy(state, dt, k3, scratch);
                eval(time + dt, scratch, k4)?;

                let sixth = dt / 6.0;
                for (i, out) in next.iter_mut().enumerate() {
                    *out = state[i] + sixth * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
                }
            }
        }

        Ok(())
    }
}
