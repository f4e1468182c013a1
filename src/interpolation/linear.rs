//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment. Inputs lying within `[x[i], x[i+1]]` are interpolated
//! linearly between the two end points. Inputs outside `[x[0], x[n-1]]`
//! follow the configured [`Extrapolation`] for that side.
//!
//! Equal adjacent breakpoints form a zero-width segment, i.e. a step. An
//! input sitting exactly on a repeated breakpoint takes the output of the
//! last point sharing that value.

use crate::interpolation::config::{validate_pair, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::extrapolation::{Extrapolation, ExtrapolationCfg};
use crate::interpolation::traits::Interpolator;


/// Linear interpolation configuration
///
/// # Fields
/// - `common`        : [`CommonCfg`]
/// - `extrapolation` : [`ExtrapolationCfg`], one policy per side
///
/// # Construction
/// - Use [`LinearCfg::new`], the setters, then [`LinearCfg::build`].
///
/// # Defaults
/// - [`Extrapolation::Clamp`] on both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
    extrapolation: ExtrapolationCfg,
}

impl<'a> LinearCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), extrapolation: ExtrapolationCfg::default() }
    }

    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common = self.common.set_x(v)?;
        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common = self.common.set_y(v)?;
        Ok(self)
    }

    /// Same policy on both sides.
    pub fn set_extrapolation(mut self, mode: impl Into<ExtrapolationCfg>) -> Self {
        self.extrapolation = mode.into();
        self
    }

    pub fn set_left(mut self, mode: Extrapolation) -> Self {
        self.extrapolation.left = mode;
        self
    }

    pub fn set_right(mut self, mode: Extrapolation) -> Self {
        self.extrapolation.right = mode;
        self
    }

    /// Copies the validated pair into an immutable [`LinearInterpolant`].
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if either side was never set.
    pub fn build(self) -> Result<LinearInterpolant, InterpolationError> {
        self.common.validate()?;

        let x = self.common.x();
        tracing::debug!(
            n_points = x.len(),
            x_min = x[0],
            x_max = x[x.len() - 1],
            left = %self.extrapolation.left,
            right = %self.extrapolation.right,
            "built linear interpolant"
        );

        Ok(LinearInterpolant {
            x: x.into(),
            y: self.common.y().into(),
            extrapolation: self.extrapolation,
        })
    }
}


/// A validated piecewise-linear mapping.
///
/// Immutable once built; cheap to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    x: Box<[f64]>,
    y: Box<[f64]>,
    extrapolation: ExtrapolationCfg,
}

impl LinearInterpolant {
    pub fn breakpoints(&self) -> &[f64] { &self.x }
    pub fn outputs(&self) -> &[f64] { &self.y }
    pub fn extrapolation(&self) -> ExtrapolationCfg { self.extrapolation }
}

impl Interpolator for LinearInterpolant {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        evaluate(x, &self.x, &self.y, self.extrapolation)
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}


/// One-shot interpolation of `value` through `(breakpoints, outputs)`.
///
/// Validates the pair on every call. For a mapping evaluated once per
/// frame, build a [`LinearInterpolant`] once and call
/// [`Interpolator::eval`] instead.
///
/// # Errors
/// Any [`InterpolationError`] raised by [`CommonCfg`] validation. The pair
/// is rechecked on every call; rejections are logged at `debug` only.
pub fn interpolate(
    value: f64,
    breakpoints: &[f64],
    outputs: &[f64],
    mode: impl Into<ExtrapolationCfg>,
) -> Result<f64, InterpolationError> {
    validate_pair(breakpoints, outputs)?;
    Ok(evaluate(value, breakpoints, outputs, mode.into()))
}


/// `a + t * (b - a)`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Fractional position of `v` in `[a, b]`.
/// A degenerate range resolves to the upper end, `1.0`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    if b == a { 1.0 } else { (v - a) / (b - a) }
}


/// Evaluates a pair that is already known to be valid.
fn evaluate(value: f64, x: &[f64], y: &[f64], extrapolation: ExtrapolationCfg) -> f64 {
    let n = x.len();

    // number of breakpoints <= value
    // the last of a run of equal breakpoints wins
    let upper = x.partition_point(|&xi| xi <= value);

    if upper == 0 {
        return extrapolate(value, (x[0], x[1]), (y[0], y[1]), y[0], extrapolation.left);
    }

    let i = upper - 1;
    if x[i] == value {
        return y[i];
    }
    if upper == n {
        return extrapolate(
            value,
            (x[n - 2], x[n - 1]),
            (y[n - 2], y[n - 1]),
            y[n - 1],
            extrapolation.right,
        );
    }

    // x[i] < value < x[i + 1], so the segment has non-zero width
    lerp(y[i], y[i + 1], inverse_lerp(x[i], x[i + 1], value))
}


#[inline]
fn extrapolate(
    value: f64,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    edge: f64,
    mode: Extrapolation,
) -> f64 {
    match mode {
        Extrapolation::Clamp    => edge,
        Extrapolation::Identity => value,
        // zero-width end segment has no slope: hold the edge
        Extrapolation::Extend if x1 == x0 => edge,
        Extrapolation::Extend   => lerp(y0, y1, inverse_lerp(x0, x1, value)),
    }
}
