//! Header effects driven by the vertical scroll offset.
//!
//! [`HeaderFade`]     : header background opacity, `0` at rest, `1` once
//!                      the content has scrolled `fade_distance`; values
//!                      past the ends are left for the renderer to saturate
//! [`ParallaxHeader`] : header image translation and scale around `[-H, 0, H]`
//!
//! Negative offsets are overscroll (pull-down bounce). The image follows
//! the pull at half rate and zooms in; on regular scroll it drifts up at
//! three quarters of the scroll rate.
//!
//! Both effects extend their end slopes past the outer breakpoints by
//! default ([`EFFECT_EXTRAPOLATION`]): scrolled beyond `H` the image keeps
//! drifting at a quarter of the scroll rate relative to the content.

use crate::effects::errors::{check_length, LayoutError};
use crate::effects::layout::{HeaderLayout, EFFECT_EXTRAPOLATION};
use crate::interpolation::{Extrapolation, Interpolator, LinearCfg, LinearInterpolant};


/// Opacity of the header background.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFade {
    opacity: LinearInterpolant,
}

impl HeaderFade {
    pub fn new(fade_distance: f64) -> Result<Self, LayoutError> {
        Self::with_extrapolation(fade_distance, EFFECT_EXTRAPOLATION)
    }

    pub fn with_extrapolation(fade_distance: f64, mode: Extrapolation) -> Result<Self, LayoutError> {
        let h = check_length("fade_distance", fade_distance)?;
        let opacity = LinearCfg::new()
            .set_x(&[0.0, h])?
            .set_y(&[0.0, 1.0])?
            .set_extrapolation(mode)
            .build()?;

        tracing::debug!(fade_distance = h, %mode, "built header fade");
        Ok(Self { opacity })
    }

    pub fn from_layout(layout: &HeaderLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Self::with_extrapolation(layout.fade_distance, layout.extrapolation)
    }

    #[inline]
    pub fn opacity(&self, scroll_offset: f64) -> f64 {
        self.opacity.eval(scroll_offset)
    }
}


/// Transform applied to a parallax element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self { translate_y: 0.0, scale: 1.0 }
    }
}


/// Parallax translation and zoom of a header element of height `H`.
///
/// | offset | translate_y | scale |
/// |--------|-------------|-------|
/// | `-H`   | `-H/2`      | `2`   |
/// | `0`    | `0`         | `1`   |
/// | `H`    | `0.75 H`    | `1`   |
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxHeader {
    height: f64,
    translate: LinearInterpolant,
    scale: LinearInterpolant,
}

impl ParallaxHeader {
    pub fn new(height: f64) -> Result<Self, LayoutError> {
        Self::with_extrapolation(height, EFFECT_EXTRAPOLATION)
    }

    pub fn with_extrapolation(height: f64, mode: Extrapolation) -> Result<Self, LayoutError> {
        let h = check_length("height", height)?;
        let x = [-h, 0.0, h];

        let translate = LinearCfg::new()
            .set_x(&x)?
            .set_y(&[-h / 2.0, 0.0, h * 0.75])?
            .set_extrapolation(mode)
            .build()?;
        let scale = LinearCfg::new()
            .set_x(&x)?
            .set_y(&[2.0, 1.0, 1.0])?
            .set_extrapolation(mode)
            .build()?;

        tracing::debug!(height = h, %mode, "built parallax header");
        Ok(Self { height: h, translate, scale })
    }

    pub fn from_layout(layout: &HeaderLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Self::with_extrapolation(layout.height, layout.extrapolation)
    }

    pub fn height(&self) -> f64 { self.height }

    #[inline]
    pub fn transform(&self, scroll_offset: f64) -> ImageTransform {
        ImageTransform {
            translate_y: self.translate.eval(scroll_offset),
            scale: self.scale.eval(scroll_offset),
        }
    }
}
