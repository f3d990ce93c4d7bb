//! Dormand–Prince 5(4) stages, error estimate and continuous extension.
//!
//! Coefficients follow Hairer, Nørsett & Wanner, "Solving Ordinary
//! Differential Equations I", 2nd ed., Springer (1993).

use epiflow_core::{OdeProblem, VectorField};

use crate::evaluate;

use super::{Config, Error};

const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order weights, also the last row of the tableau (FSAL).
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Difference between the fifth- and fourth-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

// Dense output.
const D1: f64 = -12715105075.0 / 11282082432.0;
const D3: f64 = 87487479700.0 / 32700410799.0;
const D4: f64 = -10690763975.0 / 1880347072.0;
const D5: f64 = 701980252875.0 / 199316789632.0;
const D6: f64 = -1453857185.0 / 822651844.0;
const D7: f64 = 69997945.0 / 29380423.0;

/// Stage derivatives and work buffers for one Dormand–Prince step.
///
/// `k1` holds `f(x, y)` at the start of the step. After an accepted step,
/// `k7` holds `f(x + h, y_next)` and becomes the next step's `k1`.
pub(super) struct Stages {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    k5: Vec<f64>,
    k6: Vec<f64>,
    k7: Vec<f64>,
    stage: Vec<f64>,
    next: Vec<f64>,
    evaluations: usize,
}

impl Stages {
    /// Creates the buffers and evaluates `k1 = f(x, y)`.
    pub(super) fn new<F: VectorField>(
        problem: &OdeProblem<F>,
        x: f64,
        y: &[f64],
    ) -> Result<Self, Error> {
        let n = y.len();
        let mut stages = Self {
            k1: vec![0.0; n],
            k2: vec![0.0; n],
            k3: vec![0.0; n],
            k4: vec![0.0; n],
            k5: vec![0.0; n],
            k6: vec![0.0; n],
            k7: vec![0.0; n],
            stage: vec![0.0; n],
            next: vec![0.0; n],
            evaluations: 0,
        };
        stages.eval(problem, x, StageSlot::K1, Source::State(y))?;
        Ok(stages)
    }

    /// Returns `f(x, y)` at the start of the current step.
    pub(super) fn slope(&self) -> &[f64] {
        &self.k1
    }

    /// Returns the fifth-order solution at the end of the last attempted step.
    pub(super) fn next_state(&self) -> &[f64] {
        &self.next
    }

    /// Returns the number of vector field evaluations so far.
    pub(super) fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Evaluates the field at `time` into one of the stage slots.
    ///
    /// Used by the initial step heuristic, which needs one extra evaluation.
    pub(super) fn probe<F: VectorField>(
        &mut self,
        problem: &OdeProblem<F>,
        time: f64,
        state: &[f64],
    ) -> Result<&[f64], Error> {
        self.eval(problem, time, StageSlot::K2, Source::State(state))?;
        Ok(&self.k2)
    }

    /// Attempts a step of size `h` from `(x, y)`.
    ///
    /// Leaves the fifth-order solution in [`next_state`](Self::next_state)
    /// and returns the scaled RMS error estimate; the step is acceptable when
    /// it is at most 1.
    pub(super) fn attempt<F: VectorField>(
        &mut self,
        problem: &OdeProblem<F>,
        config: &Config,
        x: f64,
        y: &[f64],
        h: f64,
    ) -> Result<f64, Error> {
        for i in 0..y.len() {
            self.stage[i] = y[i] + h * A21 * self.k1[i];
        }
        self.eval(problem, x + C2 * h, StageSlot::K2, Source::Stage)?;

        for i in 0..y.len() {
            self.stage[i] = y[i] + h * (A31 * self.k1[i] + A32 * self.k2[i]);
        }
        self.eval(problem, x + C3 * h, StageSlot::K3, Source::Stage)?;

        for i in 0..y.len() {
            self.stage[i] = y[i] + h * (A41 * self.k1[i] + A42 * self.k2[i] + A43 * self.k3[i]);
        }
        self.eval(problem, x + C4 * h, StageSlot::K4, Source::Stage)?;

        for i in 0..y.len() {
            self.stage[i] = y[i]
                + h * (A51 * self.k1[i] + A52 * self.k2[i] + A53 * self.k3[i] + A54 * self.k4[i]);
        }
        self.eval(problem, x + C5 * h, StageSlot::K5, Source::Stage)?;

        for i in 0..y.len() {
            self.stage[i] = y[i]
                + h * (A61 * self.k1[i]
                    + A62 * self.k2[i]
                    + A63 * self.k3[i]
                    + A64 * self.k4[i]
                    + A65 * self.k5[i]);
        }
        self.eval(problem, x + h, StageSlot::K6, Source::Stage)?;

        for i in 0..y.len() {
            self.next[i] = y[i]
                + h * (B1 * self.k1[i]
                    + B3 * self.k3[i]
                    + B4 * self.k4[i]
                    + B5 * self.k5[i]
                    + B6 * self.k6[i]);
        }
        self.eval(problem, x + h, StageSlot::K7, Source::Next)?;

        let mut sum = 0.0;
        for i in 0..y.len() {
            let local = h
                * (E1 * self.k1[i]
                    + E3 * self.k3[i]
                    + E4 * self.k4[i]
                    + E5 * self.k5[i]
                    + E6 * self.k6[i]
                    + E7 * self.k7[i]);
            let scale = config.scale(y[i].abs().max(self.next[i].abs()));
            sum += (local / scale).powi(2);
        }

        #[allow(clippy::cast_precision_loss)]
        let err = (sum / y.len() as f64).sqrt();
        Ok(err)
    }

    /// Builds the continuous extension of the step just attempted from `(x, y)`.
    ///
    /// Call only after an accepted [`attempt`](Self::attempt) and before
    /// [`advance`](Self::advance).
    pub(super) fn dense_output(&self, x: f64, y: &[f64], h: f64) -> DenseOutput {
        let n = y.len();
        let mut coefficients = vec![0.0; 5 * n];
        let (c0, rest) = coefficients.split_at_mut(n);
        let (c1, rest) = rest.split_at_mut(n);
        let (c2, rest) = rest.split_at_mut(n);
        let (c3, c4) = rest.split_at_mut(n);

        for i in 0..n {
            let diff = self.next[i] - y[i];
            let bspl = h * self.k1[i] - diff;
            c0[i] = y[i];
            c1[i] = diff;
            c2[i] = bspl;
            c3[i] = diff - h * self.k7[i] - bspl;
            c4[i] = h
                * (D1 * self.k1[i]
                    + D3 * self.k3[i]
                    + D4 * self.k4[i]
                    + D5 * self.k5[i]
                    + D6 * self.k6[i]
                    + D7 * self.k7[i]);
        }

        DenseOutput {
            start: x,
            step: h,
            dimension: n,
            coefficients,
        }
    }

    /// Moves to the end of an accepted step: the next step starts from the
    /// slope at the new point.
    pub(super) fn advance(&mut self, y: &mut [f64]) {
        y.copy_from_slice(&self.next);
        std::mem::swap(&mut self.k1, &mut self.k7);
    }

    fn eval<F: VectorField>(
        &mut self,
        problem: &OdeProblem<F>,
        time: f64,
        slot: StageSlot,
        source: Source<'_>,
    ) -> Result<(), Error> {
        let state = match source {
            Source::State(state) => state,
            Source::Stage => self.stage.as_slice(),
            Source::Next => self.next.as_slice(),
        };
        let out = match slot {
            StageSlot::K1 => &mut self.k1,
            StageSlot::K2 => &mut self.k2,
            StageSlot::K3 => &mut self.k3,
            StageSlot::K4 => &mut self.k4,
            StageSlot::K5 => &mut self.k5,
            StageSlot::K6 => &mut self.k6,
            StageSlot::K7 => &mut self.k7,
        };

        self.evaluations += 1;
        evaluate(problem, time, state, out).map_err(|err| Error::field(time, err))
    }
}

#[derive(Clone, Copy)]
enum StageSlot {
    K1,
    K2,
    K3,
    K4,
    K5,
    K6,
    K7,
}

enum Source<'a> {
    State(&'a [f64]),
    Stage,
    Next,
}

/// Fourth-order interpolant over one accepted step `[start, start + step]`.
#[derive(Debug, Clone)]
pub(super) struct DenseOutput {
    start: f64,
    step: f64,
    dimension: usize,
    coefficients: Vec<f64>,
}

impl DenseOutput {
    /// Writes the interpolated state at `time` into `out`.
    pub(super) fn interpolate(&self, time: f64, out: &mut [f64]) {
        let n = self.dimension;
        let c = &self.coefficients;
        let theta = (time - self.start) / self.step;
        let theta1 = 1.0 - theta;

        for (i, value) in out.iter_mut().enumerate().take(n) {
            *value = c[i]
                + theta
                    * (c[n + i]
                        + theta1
                            * (c[2 * n + i] + theta * (c[3 * n + i] + theta1 * c[4 * n + i])));
        }
    }
}
