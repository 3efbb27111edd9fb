//! Planet derivation
//!
//! This crate provides the planet and composition types and derives a star's
//! planets from the sector stream it was sampled from.

pub mod composition;
pub mod generation;
pub mod planet;

// Re-export key types at crate root
pub use composition::Composition;
pub use generation::generate_planets;
pub use planet::Planet;

#[cfg(test)]
mod planet_test;
