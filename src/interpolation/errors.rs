//! Interpolation configuration errors.
//!
//! All variants are raised while validating breakpoint/output pairs.
//! Evaluation itself never fails: zero-width segments are steps and
//! out-of-range inputs follow the configured [`Extrapolation`].
//!
//! [`Extrapolation`]: crate::interpolation::extrapolation::Extrapolation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("unequal length: breakpoints has {x_len} elements, outputs has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("breakpoints must be non-decreasing: x[{idx}]={next} is below the preceding {prev}")]
    NonMonotonic { idx: usize, prev: f64, next: f64 },
}
