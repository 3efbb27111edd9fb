//! Sector seeding, the Lehmer stream and star sampling.

pub mod generation;
pub mod sampling;
pub mod stellar_color;
pub mod stellar_objects;


// Re-export types
pub use sampling::{LehmerStream, sector_seed, sector_seed_with_entropy};
pub use stellar_color::{STAR_PALETTE, StellarColor};
pub use stellar_objects::Star;

// Re-export generation functions
pub use generation::{sample_sector, sample_star, star_exists};
