//! Universe configuration
//!
//! Defaults reproduce the classic layout: an 800×800 screen cut into 50-unit
//! sectors, with a universe twice the screen in each direction.

use serde::{Deserialize, Serialize};

use crate::error::UniverseError;

/// Screen width the default layout is derived from
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;

/// Screen height the default layout is derived from
pub const DEFAULT_SCREEN_HEIGHT: u32 = 800;

/// Sector edge length in world units
pub const DEFAULT_SECTOR_SIZE: i64 = 50;

/// How many screens the universe spans along each axis
pub const DEFAULT_UNIVERSE_SIZE: u32 = 2;

/// Parameters for building a [`Grid`](crate::Grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UniverseConfig {
    /// Sectors along x
    pub sectors_x: u32,
    /// Sectors along y
    pub sectors_y: u32,
    /// Sector edge length in world units
    pub sector_size: i64,
    /// Derive planets for every star up front
    pub expand_full: bool,
}

impl UniverseConfig {
    pub fn new(sectors_x: u32, sectors_y: u32, sector_size: i64) -> Self {
        Self {
            sectors_x,
            sectors_y,
            sector_size,
            expand_full: true,
        }
    }

    /// Derive a layout from screen dimensions
    ///
    /// Each screen axis must be a whole number of sectors; the universe then
    /// spans `universe_size` screens along both axes.
    ///
    /// # Example
    /// ```
    /// use universe::UniverseConfig;
    ///
    /// let config = UniverseConfig::for_screen(800, 600, 50, 2).unwrap();
    /// assert_eq!((config.sectors_x, config.sectors_y), (32, 24));
    /// ```
    pub fn for_screen(
        width: u32,
        height: u32,
        sector_size: i64,
        universe_size: u32,
    ) -> Result<Self, UniverseError> {
        if sector_size <= 0 {
            return Err(UniverseError::InvalidSectorSize(sector_size));
        }

        let sectors_along = |dimension: u32| -> Result<u64, UniverseError> {
            if i64::from(dimension) % sector_size != 0 {
                return Err(UniverseError::IndivisibleScreen {
                    dimension,
                    sector_size,
                });
            }
            // at most u32::MAX screens of u32::MAX sectors, which fits u64
            Ok((i64::from(dimension) / sector_size) as u64 * u64::from(universe_size))
        };

        let (sectors_x, sectors_y) = (sectors_along(width)?, sectors_along(height)?);
        let (Ok(x), Ok(y)) = (u32::try_from(sectors_x), u32::try_from(sectors_y)) else {
            return Err(UniverseError::TooLarge {
                sectors_x,
                sectors_y,
                sector_size,
            });
        };

        let config = Self::new(x, y, sector_size);
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, UniverseError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, UniverseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject empty grids, non-positive sector sizes, and layouts whose
    /// farthest sector or cell count does not fit the integer types
    pub fn validate(&self) -> Result<(), UniverseError> {
        if self.sectors_x == 0 || self.sectors_y == 0 {
            return Err(UniverseError::EmptyGrid {
                sectors_x: self.sectors_x,
                sectors_y: self.sectors_y,
            });
        }
        if self.sector_size <= 0 {
            return Err(UniverseError::InvalidSectorSize(self.sector_size));
        }

        let farthest = |sectors: u32| i64::from(sectors - 1).checked_mul(self.sector_size);
        let fits = farthest(self.sectors_x).is_some()
            && farthest(self.sectors_y).is_some()
            && usize::try_from(self.sectors_x)
                .ok()
                .zip(usize::try_from(self.sectors_y).ok())
                .and_then(|(x, y)| x.checked_mul(y))
                .is_some();
        if !fits {
            return Err(UniverseError::TooLarge {
                sectors_x: u64::from(self.sectors_x),
                sectors_y: u64::from(self.sectors_y),
                sector_size: self.sector_size,
            });
        }
        Ok(())
    }

    /// Total number of sectors
    pub fn cell_count(&self) -> usize {
        self.sectors_x as usize * self.sectors_y as usize
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        let sectors_x = DEFAULT_SCREEN_WIDTH / DEFAULT_SECTOR_SIZE as u32 * DEFAULT_UNIVERSE_SIZE;
        let sectors_y = DEFAULT_SCREEN_HEIGHT / DEFAULT_SECTOR_SIZE as u32 * DEFAULT_UNIVERSE_SIZE;
        Self::new(sectors_x, sectors_y, DEFAULT_SECTOR_SIZE)
    }
}
