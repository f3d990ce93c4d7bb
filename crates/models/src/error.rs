use thiserror::Error;

/// Errors raised when a model parameter is out of its domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// Checks that a rate is finite and non-negative.
pub(crate) fn rate(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NonFinite { name, value });
    }
    if value < 0.0 {
        return Err(ParamsError::Negative { name, value });
    }
    Ok(value)
}
