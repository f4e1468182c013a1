//! Scroll-driven interpolation.
//!
//! [`interpolation`] maps a scalar scroll offset through ordered breakpoints
//! to output values. [`effects`] builds the parallax header, header fade and
//! carousel focus transforms on top of it.

pub mod effects;
pub mod interpolation;
