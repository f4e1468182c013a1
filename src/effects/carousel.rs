//! Focus carousel driven by the horizontal scroll offset.
//!
//! Item `k` sits at offset `k * P`, where the pitch `P` is item width plus
//! spacing. Each item maps the offset through `[(k-1)P, kP, (k+1)P]`:
//! full scale and opacity when centred, `min_scale` / `min_opacity` one
//! pitch away. Further out the slope continues by default
//! ([`EFFECT_EXTRAPOLATION`]), so items two pitches away shrink and fade
//! further.
//!
//! Scrolling snaps to multiples of `P`; [`Carousel::snap_offset`] gives
//! the resting offset for a release point.

use crate::effects::errors::{check_factor, check_length, LayoutError};
use crate::effects::layout::{CarouselLayout, EFFECT_EXTRAPOLATION};
use crate::interpolation::{Extrapolation, Interpolator, LinearCfg, LinearInterpolant};


/// Per-item output for one scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub scale: f64,
    pub opacity: f64,
}


#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
    index: usize,
    scale: LinearInterpolant,
    opacity: LinearInterpolant,
}

impl CarouselItem {
    pub fn new(
        index: usize,
        pitch: f64,
        min_scale: f64,
        min_opacity: f64,
    ) -> Result<Self, LayoutError> {
        Self::with_extrapolation(index, pitch, min_scale, min_opacity, EFFECT_EXTRAPOLATION)
    }

    pub fn with_extrapolation(
        index: usize,
        pitch: f64,
        min_scale: f64,
        min_opacity: f64,
        mode: Extrapolation,
    ) -> Result<Self, LayoutError> {
        let p = check_length("pitch", pitch)?;
        let min_scale = check_factor("min_scale", min_scale)?;
        let min_opacity = check_factor("min_opacity", min_opacity)?;

        let k = index as f64;
        let x = [(k - 1.0) * p, k * p, (k + 1.0) * p];

        let scale = LinearCfg::new()
            .set_x(&x)?
            .set_y(&[min_scale, 1.0, min_scale])?
            .set_extrapolation(mode)
            .build()?;
        let opacity = LinearCfg::new()
            .set_x(&x)?
            .set_y(&[min_opacity, 1.0, min_opacity])?
            .set_extrapolation(mode)
            .build()?;

        Ok(Self { index, scale, opacity })
    }

    pub fn index(&self) -> usize { self.index }

    #[inline]
    pub fn style(&self, scroll_x: f64) -> ItemStyle {
        ItemStyle {
            scale: self.scale.eval(scroll_x),
            opacity: self.opacity.eval(scroll_x),
        }
    }
}


/// All items of one carousel, sharing a pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    pitch: f64,
    items: Vec<CarouselItem>,
}

impl Carousel {
    pub fn new(layout: &CarouselLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let pitch = layout.pitch();

        let items = (0..layout.item_count)
            .map(|k| {
                CarouselItem::with_extrapolation(
                    k,
                    pitch,
                    layout.min_scale,
                    layout.min_opacity,
                    layout.extrapolation,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            item_count = items.len(),
            pitch,
            min_scale = layout.min_scale,
            min_opacity = layout.min_opacity,
            extrapolation = %layout.extrapolation,
            "built carousel"
        );
        Ok(Self { pitch, items })
    }

    pub fn pitch(&self) -> f64 { self.pitch }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn item(&self, index: usize) -> Option<&CarouselItem> { self.items.get(index) }
    pub fn items(&self) -> &[CarouselItem] { &self.items }

    /// Scrollable content width, trailing spacing included.
    pub fn content_width(&self) -> f64 {
        self.items.len() as f64 * self.pitch
    }

    /// Largest offset at which an item is centred.
    pub fn max_offset(&self) -> f64 {
        self.items.len().saturating_sub(1) as f64 * self.pitch
    }

    pub fn styles(&self, scroll_x: f64) -> Vec<ItemStyle> {
        let mut out = Vec::with_capacity(self.items.len());
        self.styles_into(scroll_x, &mut out);
        out
    }

    /// Like [`Carousel::styles`], reusing the caller's buffer across ticks.
    pub fn styles_into(&self, scroll_x: f64, out: &mut Vec<ItemStyle>) {
        out.clear();
        out.extend(self.items.iter().map(|item| item.style(scroll_x)));
    }

    /// Index of the item nearest to `scroll_x`.
    pub fn focused_index(&self, scroll_x: f64) -> usize {
        let last = self.items.len().saturating_sub(1);
        let pos = (scroll_x / self.pitch).round();
        if pos.is_nan() || pos <= 0.0 {
            0
        } else {
            (pos as usize).min(last)
        }
    }

    /// Resting offset after a release at `scroll_x`.
    pub fn snap_offset(&self, scroll_x: f64) -> f64 {
        self.focused_index(scroll_x) as f64 * self.pitch
    }
}
