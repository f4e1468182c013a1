//! Shared configuration for interpolants.
//!
//! Provides [`CommonCfg`], the breakpoint/output pair every interpolant is
//! built from, and the validation applied to it.
//!
//! [`CommonCfg`] — universal fields
//! - `x` : breakpoints, non-decreasing
//! - `y` : outputs, one per breakpoint
//!
//! Validation happens in the setters so that a malformed pair is rejected
//! before any evaluation. Equal adjacent breakpoints are accepted and
//! evaluate as a step.

use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x: &'a [f64],
    pub(crate) y: &'a [f64],
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self { x: &[], y: &[] }
    }

    /// Sets the breakpoints.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] on an empty slice
    /// - [`InterpolationError::NonFiniteVec`] on NaN or infinite entries
    /// - [`InterpolationError::InsufficientPoints`] with fewer than 2 entries
    /// - [`InterpolationError::NonMonotonic`] if an entry drops below its predecessor
    /// - [`InterpolationError::UnequalLength`] if outputs were set with another length
    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        check_breakpoints(v).map_err(rejected)?;

        // symmetric with set_y
        let y_len = self.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(rejected(InterpolationError::UnequalLength { x_len: v.len(), y_len }));
        }

        self.x = v;
        Ok(self)
    }

    /// Sets the outputs.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] on an empty slice
    /// - [`InterpolationError::NonFiniteVec`] on NaN or infinite entries
    /// - [`InterpolationError::UnequalLength`] if breakpoints were set with another length
    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(rejected(InterpolationError::EmptyInput));
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(rejected(InterpolationError::NonFiniteVec { idx }));
        }

        let x_len = self.x.len();
        if x_len != 0 && x_len != v.len() {
            return Err(rejected(InterpolationError::UnequalLength { x_len, y_len: v.len() }));
        }

        self.y = v;
        Ok(self)
    }

    /// Final check before building: both sides set and of equal length.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        check_pair(self.x, self.y).map_err(rejected)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
}


/// Full validation of a breakpoint/output pair on the one-shot path.
///
/// Runs on every call, so a rejection is only logged at `debug`.
pub(crate) fn validate_pair(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    check_pair(x, y).map_err(|err| {
        tracing::debug!(error = %err, "rejected interpolation pair");
        err
    })
}


fn check_pair(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    check_breakpoints(x)?;
    if let Some(idx) = non_finite_idx(y) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    Ok(())
}


fn check_breakpoints(x: &[f64]) -> Result<(), InterpolationError> {
    if x.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    for i in 1..x.len() {
        if x[i] < x[i - 1] {
            return Err(InterpolationError::NonMonotonic { idx: i, prev: x[i - 1], next: x[i] });
        }
    }
    Ok(())
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


fn rejected(err: InterpolationError) -> InterpolationError {
    tracing::warn!(error = %err, "rejected interpolation config");
    err
}
