pub mod config; 
pub mod errors; 
pub mod extrapolation; 
pub mod traits;
pub use traits::Interpolator;

pub mod linear; 

pub use errors::InterpolationError;
pub use extrapolation::{Extrapolation, ExtrapolationCfg};
pub use linear::{interpolate, LinearCfg, LinearInterpolant};
