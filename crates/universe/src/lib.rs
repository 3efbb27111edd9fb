//! Deterministic procedural universe
//!
//! A [`Grid`] of sectors, each holding a [`StarSystem`] derived purely from
//! its world coordinates. Rebuilding a grid with the same dimensions and
//! sector size reproduces it exactly.
//!
//! ```
//! use universe::{Grid, UniverseConfig};
//!
//! let config = UniverseConfig::new(16, 16, 50);
//! let a = Grid::from_config(&config).unwrap();
//! let b = Grid::from_config(&config).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod config;
pub mod error;
pub mod grid;

pub use config::UniverseConfig;
pub use error::UniverseError;
pub use grid::Grid;

// Re-export the generator types consumers read from cells
pub use planetary::{Composition, Planet};
pub use star_system::{StarSystem, SystemMetadata};
pub use stellar::{STAR_PALETTE, Star, StellarColor};

#[cfg(test)]
mod config_test;
