use std::convert::Infallible;

use epiflow_core::VectorField;

use crate::error::{ParamsError, rate};

/// Rates of the SIR model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SirParams {
    beta: f64,
    gamma: f64,
}

impl SirParams {
    /// Creates SIR rates from the transmission rate `beta` and the recovery
    /// rate `gamma`.
    ///
    /// # Errors
    ///
    /// Returns an error if either rate is negative or non-finite.
    pub fn new(beta: f64, gamma: f64) -> Result<Self, ParamsError> {
        Ok(Self {
            beta: rate("beta", beta)?,
            gamma: rate("gamma", gamma)?,
        })
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns `R0 = beta / gamma`, infinite when nobody recovers.
    #[must_use]
    pub fn basic_reproduction_number(&self) -> f64 {
        self.beta / self.gamma
    }

    fn infection(&self, s: f64, i: f64) -> f64 {
        self.beta * s * i
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SirParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            beta: f64,
            gamma: f64,
        }

        let Raw { beta, gamma } = Raw::deserialize(deserializer)?;
        Self::new(beta, gamma).map_err(serde::de::Error::custom)
    }
}

/// SIR epidemic over susceptible and infected fractions.
///
/// ```text
/// dS/dt = -beta S I
/// dI/dt =  beta S I - gamma I
/// ```
///
/// The recovered fraction is `1 - S - I`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sir;

impl VectorField for Sir {
    type Params = SirParams;
    type Error = Infallible;

    fn dimension(&self) -> usize {
        2
    }

    fn derivative(
        &self,
        _time: f64,
        state: &[f64],
        params: &SirParams,
        out: &mut [f64],
    ) -> Result<(), Self::Error> {
        let (s, i) = (state[0], state[1]);
        let infection = params.infection(s, i);

        out[0] = -infection;
        out[1] = infection - params.gamma * i;
        Ok(())
    }
}

/// SIR epidemic with the recovered fraction carried explicitly.
///
/// Adds `dR/dt = gamma I` to [`Sir`], so `S + I + R` is conserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SirFull;

impl VectorField for SirFull {
    type Params = SirParams;
    type Error = Infallible;

    fn dimension(&self) -> usize {
        3
    }

    fn derivative(
        &self,
        _time: f64,
        state: &[f64],
        params: &SirParams,
        out: &mut [f64],
    ) -> Result<(), Self::Error> {
        let (s, i) = (state[0], state[1]);
        let infection = params.infection(s, i);
        let recovery = params.gamma * i;

        out[0] = -infection;
        out[1] = infection - recovery;
        out[2] = recovery;
        Ok(())
    }
}
