//! Star systems generated from sector coordinates
//!
//! Each sector of the universe maps to exactly one [`StarSystem`]. The star is
//! sampled eagerly; its planets are derived on demand from the same stream.

pub mod metadata;
pub mod system;

// Re-export main types at crate root
pub use metadata::SystemMetadata;
pub use system::{Primary, StarSystem};

// Re-export stellar and planetary types for convenience
pub use planetary::{Composition, Planet};
pub use stellar::{Star, StellarColor};

#[cfg(test)]
mod system_test;
