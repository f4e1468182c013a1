//! Out-of-range policy.
//!
//! [`Extrapolation`] decides what an interpolant returns for inputs
//! below the first breakpoint or above the last one. [`ExtrapolationCfg`]
//! holds one policy per side.

use serde::{Deserialize, Serialize};

/// Policy for inputs outside `[x[0], x[n-1]]`.
/// - [`Extrapolation::Clamp`]    pin to the nearest endpoint output
/// - [`Extrapolation::Extend`]   continue the end segment's slope
/// - [`Extrapolation::Identity`] return the input unchanged
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    #[default]
    Clamp,
    Extend,
    Identity,
}

impl Extrapolation {
    pub const fn name(self) -> &'static str {
        match self {
            Extrapolation::Clamp    => "clamp",
            Extrapolation::Extend   => "extend",
            Extrapolation::Identity => "identity",
        }
    }
}
impl std::fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-side out-of-range policy.
///
/// Built from a single [`Extrapolation`] via `From`, which applies it to
/// both ends.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrapolationCfg {
    pub left : Extrapolation,
    pub right: Extrapolation,
}

impl ExtrapolationCfg {
    pub const fn both(mode: Extrapolation) -> Self {
        Self { left: mode, right: mode }
    }
}

impl From<Extrapolation> for ExtrapolationCfg {
    fn from(mode: Extrapolation) -> Self {
        Self::both(mode)
    }
}
