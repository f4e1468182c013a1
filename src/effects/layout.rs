//! Layout constants owned by the rendering side.
//!
//! All structs deserialize with `#[serde(default)]`, so a partial document
//! only overrides what it names. Defaults follow a 390pt wide phone
//! viewport.

use serde::{Deserialize, Serialize};
use crate::effects::errors::{check_factor, check_length, rejected, LayoutError};
use crate::interpolation::extrapolation::Extrapolation;


pub const DEFAULT_VIEWPORT_WIDTH: f64 = 390.0;

/// Horizontal inset subtracted from the viewport to get the item width.
pub const CAROUSEL_INSET: f64 = 40.0;

/// Out-of-range policy of every effect unless a layout says otherwise.
/// Effects keep their end slopes past the outer breakpoints.
pub const EFFECT_EXTRAPOLATION: Extrapolation = Extrapolation::Extend;


/// Vertical header geometry.
/// - `height`        : header image height, also the parallax reference
/// - `fade_distance` : scroll distance over which the header background fades in
/// - `extrapolation` : policy past `[-height, height]` and `[0, fade_distance]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLayout {
    pub height: f64,
    pub fade_distance: f64,
    pub extrapolation: Extrapolation,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::with_height(600.0)
    }
}

impl HeaderLayout {
    /// Fade completes after two thirds of the header height.
    pub fn with_height(height: f64) -> Self {
        Self { height, fade_distance: height / 1.5, extrapolation: EFFECT_EXTRAPOLATION }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_length("height", self.height)?;
        check_length("fade_distance", self.fade_distance)?;
        Ok(())
    }
}


/// Horizontal carousel geometry.
/// - `item_width`  : width of one item
/// - `spacing`     : gap after each item
/// - `item_count`  : number of items
/// - `height`      : container height, parallax reference in mixed screens
/// - `min_scale`   : scale of an item one pitch away from focus
/// - `min_opacity` : opacity of an item one pitch away from focus
/// - `extrapolation` : policy more than one pitch away from focus,
///                   also used by the container parallax in mixed screens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselLayout {
    pub item_width: f64,
    pub spacing: f64,
    pub item_count: usize,
    pub height: f64,
    pub min_scale: f64,
    pub min_opacity: f64,
    pub extrapolation: Extrapolation,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self::for_viewport(DEFAULT_VIEWPORT_WIDTH)
    }
}

impl CarouselLayout {
    pub fn for_viewport(width: f64) -> Self {
        Self {
            item_width: width - CAROUSEL_INSET,
            spacing: 10.0,
            item_count: 4,
            height: 300.0,
            min_scale: 0.8,
            min_opacity: 0.5,
            extrapolation: EFFECT_EXTRAPOLATION,
        }
    }

    /// Distance between the leading edges of neighbouring items.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.item_width + self.spacing
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_length("item_width", self.item_width)?;
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(rejected(LayoutError::InvalidSpacing { got: self.spacing }));
        }
        if self.item_count == 0 {
            return Err(rejected(LayoutError::EmptyCarousel));
        }
        check_length("height", self.height)?;
        check_factor("min_scale", self.min_scale)?;
        check_factor("min_opacity", self.min_opacity)?;
        Ok(())
    }
}


/// Everything a [`crate::effects::scene::Scene`] needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLayout {
    pub header: HeaderLayout,
    pub carousel: CarouselLayout,
}

impl SceneLayout {
    pub fn for_viewport(width: f64) -> Self {
        Self {
            header: HeaderLayout::default(),
            carousel: CarouselLayout::for_viewport(width),
        }
    }
}
