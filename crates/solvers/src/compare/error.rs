use epiflow_core::ProblemError;

use crate::{adaptive, fixed_step};

use super::{ConfigError, InterpError};

/// Errors that can occur while comparing methods.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid comparison config")]
    Config(#[from] ConfigError),

    #[error("selector component {index} is out of range for a {dimension}-component state")]
    SelectorOutOfRange { index: usize, dimension: usize },

    #[error("invalid reference span")]
    Span(#[from] ProblemError),

    #[error("reference solve failed")]
    Reference(#[from] adaptive::Error),

    #[error("fixed-step solve failed")]
    FixedStep(#[from] fixed_step::Error),

    #[error("failed to interpolate the reference")]
    Interpolation(#[from] InterpError),
}
