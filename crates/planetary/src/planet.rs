//! Planet representation
//!
//! A planet is fixed by four drawn quantities (orbit, diameter, population,
//! ring) plus its moons. Temperature and composition are derived from the
//! drawn values, never drawn themselves.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::composition::Composition;

/// Surface temperature at zero orbital distance
pub const BASE_TEMPERATURE: f64 = 1000.0;

/// Temperature lost per unit of orbital distance
pub const TEMPERATURE_FALLOFF: f64 = 3.0;

/// A fully derived planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Planet {
    /// Orbital distance from the star
    pub distance: f64,
    /// Planet diameter
    pub diameter: f64,
    /// Surface fractions
    pub composition: Composition,
    /// Surface temperature (°)
    pub temperature: f64,
    /// Inhabitants
    pub population: u64,
    /// Has a ring system?
    pub ring: bool,
    /// Moon diameters, innermost first
    pub moons: Vec<f64>,
}

impl Planet {
    /// Create a planet, deriving temperature and composition
    pub fn new(distance: f64, diameter: f64, population: u64, ring: bool, moons: Vec<f64>) -> Self {
        let temperature = temperature_at(distance);
        let composition = Composition::from_environment(temperature, diameter);

        Self {
            distance,
            diameter,
            composition,
            temperature,
            population,
            ring,
            moons,
        }
    }

    pub fn moon_count(&self) -> usize {
        self.moons.len()
    }

    pub fn is_inhabited(&self) -> bool {
        self.population > 0
    }

    /// Ordered `name: value` dump, one field per line
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "distance: {}", self.distance)?;
        writeln!(f, "diameter: {}", self.diameter)?;
        writeln!(f, "foliage: {}", self.composition.foliage)?;
        writeln!(f, "minerals: {}", self.composition.minerals)?;
        writeln!(f, "water: {}", self.composition.water)?;
        writeln!(f, "gases: {}", self.composition.gases)?;
        writeln!(f, "temperature: {}", self.temperature)?;
        writeln!(f, "population: {}", self.population)?;
        writeln!(f, "ring: {}", self.ring)?;
        writeln!(f, "moons: {:?}", self.moons)
    }
}

/// Surface temperature at an orbital distance
///
/// Linear falloff: `1000 - 3 × distance`.
pub fn temperature_at(distance: f64) -> f64 {
    BASE_TEMPERATURE - TEMPERATURE_FALLOFF * distance
}
