//! Effect configuration errors.
//!
//! ┌ [`LayoutError`] : layout constants rejected before any effect is built
//! │   ├ non-positive or non-finite lengths
//! │   ├ negative spacing
//! │   ├ empty carousel
//! │   └ out-of-range scale/opacity factors
//! │
//! └ wraps [`InterpolationError`] raised by the underlying interpolants

use thiserror::Error;
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid `{field}`: must be finite and > 0. got {got}")]
    InvalidLength { field: &'static str, got: f64 },

    #[error("invalid `spacing`: must be finite and >= 0. got {got}")]
    InvalidSpacing { got: f64 },

    #[error("carousel has no items")]
    EmptyCarousel,

    #[error("invalid `{field}`: must be finite and >= 0. got {got}")]
    InvalidFactor { field: &'static str, got: f64 },

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}


pub(crate) fn check_length(field: &'static str, got: f64) -> Result<f64, LayoutError> {
    if got.is_finite() && got > 0.0 {
        Ok(got)
    } else {
        Err(rejected(LayoutError::InvalidLength { field, got }))
    }
}

pub(crate) fn check_factor(field: &'static str, got: f64) -> Result<f64, LayoutError> {
    if got.is_finite() && got >= 0.0 {
        Ok(got)
    } else {
        Err(rejected(LayoutError::InvalidFactor { field, got }))
    }
}

pub(crate) fn rejected(err: LayoutError) -> LayoutError {
    tracing::warn!(error = %err, "rejected layout");
    err
}
