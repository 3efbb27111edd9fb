//! Planetary composition types
//!
//! Composition is tracked as surface fractions of four components that
//! always sum to 1.0 after construction.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Temperature (°) at which foliage peaks
pub const FOLIAGE_OPTIMUM_TEMP: f64 = 20.0;

/// Width of the foliage bell curve; larger means a narrower habitable band
pub const FOLIAGE_FALLOFF: f64 = 0.02;

/// Mineral scale: a planet of diameter 20 has one unit of raw minerals
pub const MINERAL_SCALE: f64 = 400.0;

/// Bulk composition as normalized fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Composition {
    /// Vegetation cover
    pub foliage: f64,
    /// Rock and ore
    pub minerals: f64,
    /// Surface water
    pub water: f64,
    /// Atmospheric gases
    pub gases: f64,
}

impl Composition {
    /// Create a new composition, normalizing fractions to sum to 1.0
    ///
    /// A zero, negative or non-finite total falls back to [`Composition::uniform`].
    pub fn new(foliage: f64, minerals: f64, water: f64, gases: f64) -> Self {
        let total = foliage + minerals + water + gases;
        if !total.is_finite() || total <= 0.0 {
            return Self::uniform();
        }
        Self {
            foliage: foliage / total,
            minerals: minerals / total,
            water: water / total,
            gases: gases / total,
        }
    }

    /// Equal quarter shares
    pub fn uniform() -> Self {
        Self {
            foliage: 0.25,
            minerals: 0.25,
            water: 0.25,
            gases: 0.25,
        }
    }

    /// Derive composition from surface temperature and diameter
    ///
    /// Foliage is a Gaussian in temperature centred on 20°. Minerals scale
    /// with surface area (diameter² / 400). Water and gases track foliage
    /// one-for-one before normalization.
    ///
    /// # Example
    /// ```
    /// use planetary::Composition;
    ///
    /// let temperate = Composition::from_environment(20.0, 20.0);
    /// // foliage, water and gases are all 1.0 raw, minerals 1.0 raw
    /// assert!((temperate.foliage - 0.25).abs() < 1e-12);
    /// ```
    pub fn from_environment(temperature: f64, diameter: f64) -> Self {
        let foliage = foliage_index(temperature);
        let minerals = diameter.powi(2) / MINERAL_SCALE;

        Self::new(foliage, minerals, foliage, foliage)
    }

    /// Sum of the four fractions (1.0 up to rounding)
    pub fn total(&self) -> f64 {
        self.foliage + self.minerals + self.water + self.gases
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Raw foliage index in (0, 1], peaking at [`FOLIAGE_OPTIMUM_TEMP`]
pub fn foliage_index(temperature: f64) -> f64 {
    (-FOLIAGE_FALLOFF * (temperature - FOLIAGE_OPTIMUM_TEMP).powi(2)).exp()
}
