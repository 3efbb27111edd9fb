//! WASM bindings for the procedural universe.
//!
//! This crate exposes the read surface a JavaScript presentation layer needs:
//! whole grids for the galaxy map, single expanded systems for the detail
//! view, and the text dumps used for debugging.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { default_config, generate_universe, star_system } from 'universe-wasm';
//!
//! await init();
//!
//! const config = { ...default_config(), expandFull: false };
//! const grid = generate_universe(config);
//! const detail = star_system(0, 51);
//! console.log(`${detail.primary.planets.length} planets`);
//! ```

use wasm_bindgen::prelude::*;

mod grid;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
