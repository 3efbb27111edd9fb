//! Star data as seen on the galaxy map.
//!
//! A star is deliberately small: its on-screen size and palette color. The
//! planets orbiting it live in the `planetary` crate and are derived later.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use super::stellar_color::StellarColor;

/// The star at the heart of an occupied sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Star {
    /// Diameter in map units, in `[10, 40)`
    pub diameter: f64,
    /// Palette color
    pub color: StellarColor,
}

impl Star {
    pub fn new(diameter: f64, color: StellarColor) -> Self {
        Self { diameter, color }
    }
}
