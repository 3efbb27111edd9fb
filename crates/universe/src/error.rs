//! Errors raised while configuring a universe.

use thiserror::Error;

/// Configuration errors
///
/// Generation itself never fails; only the parameters handed to it can be
/// invalid.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("grid must have at least one sector along each axis, got {sectors_x}x{sectors_y}")]
    EmptyGrid { sectors_x: u32, sectors_y: u32 },

    #[error("sector size must be positive, got {0}")]
    InvalidSectorSize(i64),

    #[error("screen dimension {dimension} is not a multiple of sector size {sector_size}")]
    IndivisibleScreen { dimension: u32, sector_size: i64 },

    #[error("{sectors_x}x{sectors_y} sectors of size {sector_size} overflow world coordinates")]
    TooLarge {
        sectors_x: u64,
        sectors_y: u64,
        sector_size: i64,
    },

    #[error("invalid universe config: {0}")]
    Parse(#[from] serde_json::Error),
}
