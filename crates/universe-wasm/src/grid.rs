//! WASM bindings for grid and star system generation.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use wasm_bindgen::prelude::*;

use universe::{Grid, StarSystem, UniverseConfig};

use crate::{from_js, to_js};

fn grid_from_js(config: JsValue) -> Result<UniverseConfig, JsError> {
    let config: UniverseConfig = from_js(config)?;
    config
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(config)
}

/// The default universe configuration (32×32 sectors of 50 units).
#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsError> {
    to_js(&UniverseConfig::default())
}

/// Generate a universe grid.
///
/// # Arguments
/// * `config` - A `UniverseConfig` object; missing fields take defaults
#[wasm_bindgen]
pub fn generate_universe(config: JsValue) -> Result<JsValue, JsError> {
    let config = grid_from_js(config)?;
    let grid = Grid::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&grid)
}

/// Generate a universe grid with seeded entropy mixed into every sector.
///
/// The same `seed` reproduces the same grid; different seeds give different
/// universes over the same layout.
///
/// # Arguments
/// * `config` - A `UniverseConfig` object
/// * `seed` - Entropy seed
#[wasm_bindgen]
pub fn generate_universe_with_entropy(config: JsValue, seed: u64) -> Result<JsValue, JsError> {
    let config = grid_from_js(config)?;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let grid = Grid::generate_with_entropy(
        config.sectors_x as usize,
        config.sectors_y as usize,
        config.sector_size,
        config.expand_full,
        &mut rng,
    );
    to_js(&grid)
}

/// Generate the fully expanded star system at world coordinates `(x, y)`.
#[wasm_bindgen]
pub fn star_system(x: i64, y: i64) -> Result<JsValue, JsError> {
    to_js(&StarSystem::generate(x, y, true))
}

/// Text dump of the star system at `(x, y)` followed by each planet.
#[wasm_bindgen]
pub fn star_system_text(x: i64, y: i64) -> String {
    let system = StarSystem::generate(x, y, true);
    let planets = system.planets().unwrap_or_default();

    std::iter::once(system.to_text())
        .chain(planets.iter().map(|p| p.to_text()))
        .collect::<Vec<_>>()
        .join("\n")
}
