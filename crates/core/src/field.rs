/// The right-hand side of a first-order ODE system, `dy/dt = f(t, y, params)`.
///
/// A vector field must be deterministic and free of side effects: solvers call
/// it many times per step and rely on identical inputs producing identical
/// derivatives.
///
/// Parameters are an associated type so that each model names its own
/// coefficients (transmission rate, recovery rate, ...) instead of accepting an
/// open-ended list. Solvers forward them unmodified on every evaluation.
pub trait VectorField {
    type Params;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of state components this field expects.
    fn dimension(&self) -> usize;

    /// Writes the derivative at `(time, state)` into `out`.
    ///
    /// Both `state` and `out` have exactly [`dimension`](Self::dimension)
    /// components.
    ///
    /// # Errors
    ///
    /// Each field defines its own `Error` type to represent domain-specific failures.
    fn derivative(
        &self,
        time: f64,
        state: &[f64],
        params: &Self::Params,
        out: &mut [f64],
    ) -> Result<(), Self::Error>;
}

impl<F: VectorField + ?Sized> VectorField for &F {
    type Params = F::Params;
    type Error = F::Error;

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn derivative(
        &self,
        time: f64,
        state: &[f64],
        params: &Self::Params,
        out: &mut [f64],
    ) -> Result<(), Self::Error> {
        (**self).derivative(time, state, params, out)
    }
}
