//! Rectangular lattice of star systems
//!
//! Cell `(i, j)` sits at world coordinates `(i × sector_size, j × sector_size)`.
//! Cells are stored and enumerated row-major with `i` as the outer index, so
//! `iter()` yields `(0, 0), (0, 1), .., (1, 0), ..`.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use planetary::Planet;
use star_system::StarSystem;

use crate::config::UniverseConfig;
use crate::error::UniverseError;

/// A fixed-size grid of sectors, each holding one [`StarSystem`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    sectors_x: usize,
    sectors_y: usize,
    sector_size: i64,
    cells: Vec<StarSystem>,
}

impl Grid {
    /// Build a grid with every star fully expanded
    ///
    /// # Panics
    /// If the cell count or the farthest world coordinate overflows; use
    /// [`Grid::from_config`] for unchecked input.
    ///
    /// # Example
    /// ```
    /// use universe::Grid;
    ///
    /// let grid = Grid::new(2, 2, 50);
    /// let positions: Vec<(i64, i64)> = grid.iter().map(|s| (s.x, s.y)).collect();
    /// assert_eq!(positions, vec![(0, 0), (0, 50), (50, 0), (50, 50)]);
    /// ```
    pub fn new(sectors_x: usize, sectors_y: usize, sector_size: i64) -> Self {
        Self::with_expansion(sectors_x, sectors_y, sector_size, true)
    }

    /// Build a grid, optionally leaving planets for [`expand`](Self::expand)
    pub fn with_expansion(
        sectors_x: usize,
        sectors_y: usize,
        sector_size: i64,
        expand_full: bool,
    ) -> Self {
        Self::build(sectors_x, sectors_y, sector_size, |x, y| {
            StarSystem::generate(x, y, expand_full)
        })
    }

    /// Build a grid with entropy from `rng` mixed into every cell's seed
    ///
    /// One entropy value is drawn per cell in row-major order, so equally
    /// seeded generators produce equal grids.
    pub fn generate_with_entropy(
        sectors_x: usize,
        sectors_y: usize,
        sector_size: i64,
        expand_full: bool,
        rng: &mut impl Rng,
    ) -> Self {
        Self::build(sectors_x, sectors_y, sector_size, |x, y| {
            StarSystem::generate_with_entropy(x, y, expand_full, &mut *rng)
        })
    }

    /// Build a grid from a config, validating it first
    ///
    /// Unlike the other constructors this never panics: layouts that would
    /// overflow are rejected with [`UniverseError::TooLarge`].
    pub fn from_config(config: &UniverseConfig) -> Result<Self, UniverseError> {
        config.validate()?;
        Ok(Self::with_expansion(
            config.sectors_x as usize,
            config.sectors_y as usize,
            config.sector_size,
            config.expand_full,
        ))
    }

    /// Build a grid on the rayon thread pool
    ///
    /// Cells are independent, and the parallel collect keeps row-major
    /// order, so the result equals [`Grid::with_expansion`].
    #[cfg(feature = "parallel")]
    pub fn generate_parallel(
        sectors_x: usize,
        sectors_y: usize,
        sector_size: i64,
        expand_full: bool,
    ) -> Self {
        use rayon::prelude::*;

        let cells: Vec<StarSystem> = (0..sectors_x * sectors_y)
            .into_par_iter()
            .map(|index| {
                let (x, y) = world_position(index / sectors_y, index % sectors_y, sector_size);
                StarSystem::generate(x, y, expand_full)
            })
            .collect();

        Self::from_cells(sectors_x, sectors_y, sector_size, cells)
    }

    fn build(
        sectors_x: usize,
        sectors_y: usize,
        sector_size: i64,
        mut generate: impl FnMut(i64, i64) -> StarSystem,
    ) -> Self {
        let mut cells = Vec::with_capacity(sectors_x * sectors_y);
        for i in 0..sectors_x {
            for j in 0..sectors_y {
                let (x, y) = world_position(i, j, sector_size);
                cells.push(generate(x, y));
            }
        }

        Self::from_cells(sectors_x, sectors_y, sector_size, cells)
    }

    fn from_cells(
        sectors_x: usize,
        sectors_y: usize,
        sector_size: i64,
        cells: Vec<StarSystem>,
    ) -> Self {
        let grid = Self {
            sectors_x,
            sectors_y,
            sector_size,
            cells,
        };
        debug!(
            sectors_x,
            sectors_y,
            sector_size,
            stars = grid.star_count(),
            "generated universe grid"
        );
        grid
    }

    pub fn sectors_x(&self) -> usize {
        self.sectors_x
    }

    pub fn sectors_y(&self) -> usize {
        self.sectors_y
    }

    pub fn sector_size(&self) -> i64 {
        self.sector_size
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.sectors_x && j < self.sectors_y).then(|| i * self.sectors_y + j)
    }

    /// The system in sector `(i, j)`, or `None` outside the grid
    pub fn cell_at(&self, i: usize, j: usize) -> Option<&StarSystem> {
        self.index(i, j).map(|k| &self.cells[k])
    }

    pub fn cell_at_mut(&mut self, i: usize, j: usize) -> Option<&mut StarSystem> {
        self.index(i, j).map(|k| &mut self.cells[k])
    }

    /// Planets of sector `(i, j)`, deriving them on first request
    ///
    /// `None` outside the grid; an empty slice for empty sectors.
    pub fn expand(&mut self, i: usize, j: usize) -> Option<&[Planet]> {
        self.cell_at_mut(i, j).map(StarSystem::expand)
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &StarSystem> {
        self.cells.iter()
    }

    /// Occupied cells with their sector indices, in row-major order
    pub fn stars(&self) -> impl Iterator<Item = ((usize, usize), &StarSystem)> {
        let sectors_y = self.sectors_y;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, system)| system.exists())
            .map(move |(k, system)| ((k / sectors_y, k % sectors_y), system))
    }

    pub fn star_count(&self) -> usize {
        self.cells.iter().filter(|s| s.exists()).count()
    }

    /// World coordinates of sector `(i, j)`
    pub fn world_position(&self, i: usize, j: usize) -> (i64, i64) {
        world_position(i, j, self.sector_size)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a StarSystem;
    type IntoIter = std::slice::Iter<'a, StarSystem>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

fn world_position(i: usize, j: usize, sector_size: i64) -> (i64, i64) {
    (i as i64 * sector_size, j as i64 * sector_size)
}
