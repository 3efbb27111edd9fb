//! Star system entity with lazily derived planets
//!
//! A [`StarSystem`] is created for every sector. Empty sectors carry only
//! their coordinates and seed. Occupied sectors carry a [`Primary`]: the
//! star, the stream state right after the star was sampled, and the planets
//! once they have been derived from that state.

use rand::Rng;
use serde::Serialize;
use tracing::trace;

use planetary::{Planet, generate_planets};
use stellar::{
    LehmerStream, Star, StellarColor, sample_sector, sector_seed, sector_seed_with_entropy,
};

use crate::metadata::SystemMetadata;

/// The star of an occupied sector and its planetary detail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Primary {
    pub star: Star,
    /// Stream state after the star draws; expansion always starts here
    #[serde(skip)]
    stream: LehmerStream,
    /// `None` until expanded
    planets: Option<Vec<Planet>>,
}

impl Primary {
    fn new(star: Star, stream: LehmerStream) -> Self {
        Self {
            star,
            stream,
            planets: None,
        }
    }

    /// Derived planets, computing them on first use
    pub fn expand(&mut self) -> &[Planet] {
        let stream = self.stream;
        self.planets.get_or_insert_with(|| {
            let mut stream = stream;
            generate_planets(&mut stream)
        })
    }

    /// Cached planets, if already expanded
    pub fn planets(&self) -> Option<&[Planet]> {
        self.planets.as_deref()
    }

    pub fn is_expanded(&self) -> bool {
        self.planets.is_some()
    }
}

/// One sector of the universe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    /// World x coordinate
    pub x: i64,
    /// World y coordinate
    pub y: i64,
    /// Stream seed the sector was generated from
    pub seed: u64,
    /// `None` for empty sectors
    primary: Option<Primary>,
}

impl StarSystem {
    /// Generate the system at world coordinates `(x, y)`
    ///
    /// With `expand_full` the planets are derived immediately. Otherwise they
    /// are derived by the first call to [`expand`](Self::expand), with
    /// identical results.
    ///
    /// # Example
    /// ```
    /// use star_system::StarSystem;
    ///
    /// let mut overview = StarSystem::generate(0, 51, false);
    /// let full = StarSystem::generate(0, 51, true);
    ///
    /// assert!(overview.exists());
    /// assert_eq!(overview.expand(), full.planets().unwrap());
    /// ```
    pub fn generate(x: i64, y: i64, expand_full: bool) -> Self {
        Self::from_seed(x, y, sector_seed(x, y), expand_full)
    }

    /// Generate the system at `(x, y)` with entropy from `rng` mixed into the seed
    ///
    /// Only reproducible when `rng` is, e.g. a seeded `ChaChaRng`.
    pub fn generate_with_entropy(x: i64, y: i64, expand_full: bool, rng: &mut impl Rng) -> Self {
        Self::from_seed(x, y, sector_seed_with_entropy(x, y, rng), expand_full)
    }

    /// Generate a system at `(x, y)` from an explicit seed
    pub fn from_seed(x: i64, y: i64, seed: u64, expand_full: bool) -> Self {
        let mut stream = LehmerStream::new(seed);
        let primary = sample_sector(&mut stream).map(|star| Primary::new(star, stream));

        let mut system = Self {
            x,
            y,
            seed,
            primary,
        };
        if expand_full {
            system.expand();
        }
        system
    }

    /// Does this sector hold a star?
    pub fn exists(&self) -> bool {
        self.primary.is_some()
    }

    pub fn primary(&self) -> Option<&Primary> {
        self.primary.as_ref()
    }

    pub fn star(&self) -> Option<&Star> {
        self.primary.as_ref().map(|p| &p.star)
    }

    pub fn diameter(&self) -> Option<f64> {
        self.star().map(|s| s.diameter)
    }

    pub fn color(&self) -> Option<StellarColor> {
        self.star().map(|s| s.color)
    }

    /// Derived planets, innermost first
    ///
    /// Derives and caches them on the first call; later calls return the
    /// cached list. Empty sectors have no planets.
    pub fn expand(&mut self) -> &[Planet] {
        let (x, y) = (self.x, self.y);
        match self.primary.as_mut() {
            Some(primary) => {
                if !primary.is_expanded() {
                    trace!(x, y, "expanding star system");
                }
                primary.expand()
            }
            None => &[],
        }
    }

    /// Cached planets, or `None` if empty or not yet expanded
    pub fn planets(&self) -> Option<&[Planet]> {
        self.primary.as_ref().and_then(Primary::planets)
    }

    pub fn is_expanded(&self) -> bool {
        self.primary.as_ref().is_some_and(Primary::is_expanded)
    }

    /// Catalog identity of this sector
    pub fn metadata(&self) -> SystemMetadata {
        SystemMetadata::for_sector(self.x, self.y, self.seed)
    }

    /// Ordered `name: value` dump, one field per line
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for StarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)?;
        writeln!(f, "seed: {}", self.seed)?;
        writeln!(f, "exists: {}", self.exists())?;

        let Some(primary) = &self.primary else {
            return Ok(());
        };
        writeln!(f, "name: {}", self.metadata().catalog_name)?;
        writeln!(f, "diameter: {}", primary.star.diameter)?;
        writeln!(f, "color: {}", primary.star.color)?;
        match primary.planets() {
            Some(planets) => writeln!(f, "planets: {}", planets.len()),
            None => writeln!(f, "planets: unexpanded"),
        }
    }
}
