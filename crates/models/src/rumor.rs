use std::convert::Infallible;

use epiflow_core::VectorField;

use crate::error::{ParamsError, rate};

/// Rates of the general rumor model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RumorParams {
    lambda: f64,
    delta: f64,
    alpha: f64,
}

impl RumorParams {
    /// Creates rumor rates.
    ///
    /// - `lambda`: spreading rate on contact between an ignorant and a spreader
    /// - `delta`: rate at which spreaders forget
    /// - `alpha`: rate at which spreaders stop after meeting someone who
    ///   already knows
    ///
    /// # Errors
    ///
    /// Returns an error if any rate is negative or non-finite.
    pub fn new(lambda: f64, delta: f64, alpha: f64) -> Result<Self, ParamsError> {
        Ok(Self {
            lambda: rate("lambda", lambda)?,
            delta: rate("delta", delta)?,
            alpha: rate("alpha", alpha)?,
        })
    }

    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RumorParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            lambda: f64,
            delta: f64,
            alpha: f64,
        }

        let Raw {
            lambda,
            delta,
            alpha,
        } = Raw::deserialize(deserializer)?;
        Self::new(lambda, delta, alpha).map_err(serde::de::Error::custom)
    }
}

/// Rates of the Maki–Thompson model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MakiThompsonParams {
    lambda: f64,
    alpha: f64,
}

impl MakiThompsonParams {
    /// Creates Maki–Thompson rates.
    ///
    /// # Errors
    ///
    /// Returns an error if either rate is negative or non-finite.
    pub fn new(lambda: f64, alpha: f64) -> Result<Self, ParamsError> {
        Ok(Self {
            lambda: rate("lambda", lambda)?,
            alpha: rate("alpha", alpha)?,
        })
    }

    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MakiThompsonParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            lambda: f64,
            alpha: f64,
        }

        let Raw { lambda, alpha } = Raw::deserialize(deserializer)?;
        Self::new(lambda, alpha).map_err(serde::de::Error::custom)
    }
}

impl From<MakiThompsonParams> for RumorParams {
    /// Maki–Thompson is the general model without forgetting.
    fn from(params: MakiThompsonParams) -> Self {
        Self {
            lambda: params.lambda,
            delta: 0.0,
            alpha: params.alpha,
        }
    }
}

/// Rumor spreading over ignorant (`X`) and spreader (`Y`) fractions.
///
/// ```text
/// dX/dt = -lambda X Y
/// dY/dt =  lambda X Y - delta Y - alpha Y (1 - X)
/// ```
///
/// The stifler fraction is `1 - X - Y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralRumor;

impl VectorField for GeneralRumor {
    type Params = RumorParams;
    type Error = Infallible;

    fn dimension(&self) -> usize {
        2
    }

    fn derivative(
        &self,
        _time: f64,
        state: &[f64],
        params: &RumorParams,
        out: &mut [f64],
    ) -> Result<(), Self::Error> {
        let (x, y) = (state[0], state[1]);
        let spread = params.lambda * x * y;

        out[0] = -spread;
        out[1] = spread - params.delta * y - params.alpha * y * (1.0 - x);
        Ok(())
    }
}

/// The Maki–Thompson rumor model: spreaders only stop on meeting someone who
/// already knows.
///
/// ```text
/// dX/dt = -lambda X Y
/// dY/dt =  lambda X Y - alpha Y (1 - X)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MakiThompson;

impl VectorField for MakiThompson {
    type Params = MakiThompsonParams;
    type Error = Infallible;

    fn dimension(&self) -> usize {
        2
    }

    fn derivative(
        &self,
        _time: f64,
        state: &[f64],
        params: &MakiThompsonParams,
        out: &mut [f64],
    ) -> Result<(), Self::Error> {
        let (x, y) = (state[0], state[1]);
        let spread = params.lambda * x * y;

        out[0] = -spread;
        out[1] = spread - params.alpha * y * (1.0 - x);
        Ok(())
    }
}
