//! Sector seeding and the Lehmer (Park-Miller) stream
//!
//! Every sector of the universe owns a tiny multiplicative congruential
//! generator seeded from its coordinates. The recurrence is fixed so that a
//! sector always expands to the same star system, on any platform.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lehmer modulus, the Mersenne prime 2³¹ − 1
pub const LEHMER_MODULUS: u64 = 2_147_483_647;

/// Park-Miller "minimal standard" multiplier (1993 revision)
pub const LEHMER_MULTIPLIER: u64 = 48_271;

/// Bits of the x coordinate kept in the seed
pub const SECTOR_X_MASK: i64 = 0xFFFF;

/// Bits of the y coordinate kept in the seed
pub const SECTOR_Y_MASK: i64 = 0xFFF;

/// Pack sector coordinates into a stream seed
///
/// `(x & 0xFFFF) << 16 | (y & 0xFFF)`. Negative coordinates wrap through
/// their two's complement low bits, so the mapping is total.
///
/// # Example
/// ```
/// use stellar::sampling::sector_seed;
///
/// assert_eq!(sector_seed(0, 0), 0);
/// assert_eq!(sector_seed(1, 2), 65_538);
/// ```
pub fn sector_seed(x: i64, y: i64) -> u64 {
    (((x & SECTOR_X_MASK) << 16) | (y & SECTOR_Y_MASK)) as u64
}

/// Pack sector coordinates and mix in caller-supplied entropy
///
/// The result is only reproducible if `rng` is. Use [`sector_seed`] for the
/// coordinate-only universe.
pub fn sector_seed_with_entropy(x: i64, y: i64, rng: &mut impl Rng) -> u64 {
    sector_seed(x, y) ^ rng.random_range(0..LEHMER_MODULUS)
}

/// Lehmer pseudo-random stream
///
/// `state = state × 48271 mod (2³¹ − 1)`. A zero state is a fixed point:
/// every draw returns zero, which callers treat as an empty sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LehmerStream {
    state: u64,
}

impl LehmerStream {
    /// Create a stream positioned at `seed`
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a stream for the sector at `(x, y)`
    pub fn for_sector(x: i64, y: i64) -> Self {
        Self::new(sector_seed(x, y))
    }

    /// Current state (the last value returned by [`advance`](Self::advance))
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Step the recurrence and return the new state
    ///
    /// The state is reduced before multiplying, which yields the same value
    /// as `state * 48271 % M` without overflowing for any `u64` seed.
    pub fn advance(&mut self) -> u64 {
        self.state = (self.state % LEHMER_MODULUS) * LEHMER_MULTIPLIER % LEHMER_MODULUS;
        self.state
    }

    /// Integer draw in `[lo, hi)`
    ///
    /// Computed as `advance() % (hi - lo) + lo`, so a negative `lo` biases
    /// the result below zero for callers that clamp afterwards.
    pub fn next_int(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(hi > lo, "empty range {lo}..{hi}");
        let span = hi.saturating_sub(lo).max(1) as u64;
        (self.advance() % span) as i64 + lo
    }

    /// Floating point draw in `[lo, hi)`
    pub fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (self.advance() as f64 / LEHMER_MODULUS as f64) * (hi - lo)
    }
}
