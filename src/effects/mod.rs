//! Visual effects built on [`crate::interpolation`].
//!
//! Every effect validates its layout once and then evaluates as plain
//! function calls per scroll tick.

pub mod errors;
pub mod layout;

pub mod carousel;
pub mod header;
pub mod scene;

pub use carousel::{Carousel, CarouselItem, ItemStyle};
pub use errors::LayoutError;
pub use header::{HeaderFade, ImageTransform, ParallaxHeader};
pub use layout::{CarouselLayout, HeaderLayout, SceneLayout};
pub use scene::{Frame, Scene, Screen};
