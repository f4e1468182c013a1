//! Screens as compositions of effects.
//!
//! Each [`Screen`] picks the effects it uses; a [`Scene`] builds them once
//! from a [`SceneLayout`] and [`Scene::frame`] evaluates all of them for
//! the latest pair of scroll offsets.
//!
//! - [`Screen::Parallax`] : header fade + parallax header image
//! - [`Screen::Carousel`] : focus carousel
//! - [`Screen::Mix`]      : parallax on the carousel container + focus carousel

use serde::{Deserialize, Serialize};
use crate::effects::carousel::{Carousel, ItemStyle};
use crate::effects::errors::LayoutError;
use crate::effects::header::{HeaderFade, ImageTransform, ParallaxHeader};
use crate::effects::layout::SceneLayout;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Parallax,
    Carousel,
    Mix,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Parallax, Screen::Carousel, Screen::Mix];

    /// Tab title.
    pub const fn title(self) -> &'static str {
        match self {
            Screen::Parallax => "Parallax",
            Screen::Carousel => "Carousel",
            Screen::Mix      => "Mix",
        }
    }

    const fn fades_header(self) -> bool {
        matches!(self, Screen::Parallax)
    }

    const fn has_carousel(self) -> bool {
        matches!(self, Screen::Carousel | Screen::Mix)
    }
}
impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}


/// Outputs of one scroll tick. Effects a screen does not use are `None`
/// or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub header_opacity: Option<f64>,
    pub parallax: Option<ImageTransform>,
    pub items: Vec<ItemStyle>,
}


#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    screen: Screen,
    fade: Option<HeaderFade>,
    parallax: Option<ParallaxHeader>,
    carousel: Option<Carousel>,
}

impl Scene {
    pub fn new(screen: Screen, layout: &SceneLayout) -> Result<Self, LayoutError> {
        let fade = if screen.fades_header() {
            Some(HeaderFade::from_layout(&layout.header)?)
        } else {
            None
        };

        let parallax = match screen {
            Screen::Parallax => Some(ParallaxHeader::from_layout(&layout.header)?),
            Screen::Mix      => Some(ParallaxHeader::with_extrapolation(
                layout.carousel.height,
                layout.carousel.extrapolation,
            )?),
            Screen::Carousel => None,
        };

        let carousel = if screen.has_carousel() {
            Some(Carousel::new(&layout.carousel)?)
        } else {
            None
        };

        tracing::debug!(%screen, "built scene");
        Ok(Self { screen, fade, parallax, carousel })
    }

    pub fn screen(&self) -> Screen { self.screen }
    pub fn fade(&self) -> Option<&HeaderFade> { self.fade.as_ref() }
    pub fn parallax(&self) -> Option<&ParallaxHeader> { self.parallax.as_ref() }
    pub fn carousel(&self) -> Option<&Carousel> { self.carousel.as_ref() }

    /// Evaluates every effect of the screen.
    /// - `scroll_y` : vertical offset of the page
    /// - `scroll_x` : horizontal offset of the carousel, ignored without one
    pub fn frame(&self, scroll_y: f64, scroll_x: f64) -> Frame {
        let mut frame = Frame::default();
        self.frame_into(scroll_y, scroll_x, &mut frame);
        frame
    }

    /// Like [`Scene::frame`], reusing `frame`'s item buffer.
    pub fn frame_into(&self, scroll_y: f64, scroll_x: f64, frame: &mut Frame) {
        frame.header_opacity = self.fade.as_ref().map(|f| f.opacity(scroll_y));
        frame.parallax = self.parallax.as_ref().map(|p| p.transform(scroll_y));
        match &self.carousel {
            Some(c) => c.styles_into(scroll_x, &mut frame.items),
            None    => frame.items.clear(),
        }
    }
}
