//! Star sampling from a sector stream.
//!
//! Draw order is part of the contract: existence takes the first draw, then
//! diameter, then palette index. Planet derivation continues from whatever
//! state the stream is left in.

use super::sampling::LehmerStream;
use super::stellar_color::{STAR_PALETTE, StellarColor};
use super::stellar_objects::Star;

/// A sector holds a star when its first draw out of this many hits
pub const STAR_OCCURRENCE_DRAWS: i64 = 20;

/// Smallest star diameter (inclusive)
pub const MIN_STAR_DIAMETER: f64 = 10.0;

/// Largest star diameter (exclusive)
pub const MAX_STAR_DIAMETER: f64 = 40.0;

/// Decide whether the sector holds a star
///
/// Consumes exactly one draw. About one sector in twenty is occupied.
pub fn star_exists(stream: &mut LehmerStream) -> bool {
    stream.next_int(0, STAR_OCCURRENCE_DRAWS) == 1
}

/// Sample the star's diameter and color
///
/// Consumes exactly two draws. The palette index is drawn over the full
/// palette length so every color can appear.
pub fn sample_star(stream: &mut LehmerStream) -> Star {
    let diameter = stream.next_f64(MIN_STAR_DIAMETER, MAX_STAR_DIAMETER);
    let index = stream.next_int(0, STAR_PALETTE.len() as i64);

    Star::new(diameter, StellarColor::from_palette(index as usize))
}

/// Run the existence check and, on a hit, sample the star
///
/// Returns `None` for empty sectors, which leaves the stream one draw in.
///
/// # Example
/// ```
/// use stellar::sampling::LehmerStream;
/// use stellar::generation::sample_sector;
///
/// let mut stream = LehmerStream::for_sector(0, 11);
/// let star = sample_sector(&mut stream).expect("sector (0, 11) is occupied");
/// assert!((10.0..40.0).contains(&star.diameter));
/// ```
pub fn sample_sector(stream: &mut LehmerStream) -> Option<Star> {
    star_exists(stream).then(|| sample_star(stream))
}
