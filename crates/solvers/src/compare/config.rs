use thiserror::Error;

use crate::adaptive;

/// Which part of the state the error metric looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selector {
    /// A single state component, by index.
    Component(usize),

    /// Every component: the error is the Euclidean norm over all components
    /// and all samples.
    Norm,
}

impl Default for Selector {
    /// Component 1, the infected (or informed) fraction in the bundled models.
    fn default() -> Self {
        Self::Component(1)
    }
}

/// How the reference is evaluated on a fixed-step method's time grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceSampling {
    /// Linearly interpolate the reference trajectory, clamping past its last
    /// sample.
    #[default]
    Interpolated,

    /// Solve the reference again directly at the method's grid times.
    ///
    /// Removes interpolation error from the metric, at the cost of one extra
    /// adaptive solve per method. If the grid overruns the end of the span,
    /// the reference is extended to cover it.
    Dense,
}

/// Configuration for a method comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    adaptive: adaptive::Config,
    points: usize,
    sampling: ReferenceSampling,
    selector: Selector,
}

/// Errors that can occur when validating a comparison config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the reference grid needs at least 2 points, got {0}")]
    Points(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adaptive: adaptive::Config::default(),
            points: 1001,
            sampling: ReferenceSampling::default(),
            selector: Selector::default(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Config {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            adaptive: adaptive::Config,
            points: usize,
            sampling: ReferenceSampling,
            selector: Selector,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.adaptive, raw.points, raw.sampling, raw.selector)
            .map_err(serde::de::Error::custom)
    }
}

impl Config {
    /// Creates a new comparison config.
    ///
    /// `points` is the number of evenly spaced samples in the reference
    /// trajectory, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns an error if `points < 2`.
    pub fn new(
        adaptive: adaptive::Config,
        points: usize,
        sampling: ReferenceSampling,
        selector: Selector,
    ) -> Result<Self, ConfigError> {
        if points < 2 {
            return Err(ConfigError::Points(points));
        }

        Ok(Self {
            adaptive,
            points,
            sampling,
            selector,
        })
    }

    /// Returns a copy with a different reference solver config.
    #[must_use]
    pub fn with_adaptive(self, adaptive: adaptive::Config) -> Self {
        Self { adaptive, ..self }
    }

    /// Returns a copy with a different reference grid size.
    ///
    /// # Errors
    ///
    /// Returns an error if `points < 2`.
    pub fn with_points(self, points: usize) -> Result<Self, ConfigError> {
        Self::new(self.adaptive, points, self.sampling, self.selector)
    }

    /// Returns a copy with a different reference sampling mode.
    #[must_use]
    pub fn with_sampling(self, sampling: ReferenceSampling) -> Self {
        Self { sampling, ..self }
    }

    /// Returns a copy with a different selector.
    #[must_use]
    pub fn with_selector(self, selector: Selector) -> Self {
        Self { selector, ..self }
    }

    #[must_use]
    pub fn adaptive(&self) -> &adaptive::Config {
        &self.adaptive
    }

    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    #[must_use]
    pub fn sampling(&self) -> ReferenceSampling {
        self.sampling
    }

    #[must_use]
    pub fn selector(&self) -> Selector {
        self.selector
    }
}
