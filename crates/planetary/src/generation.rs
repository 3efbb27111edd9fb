//! Planet derivation from a sector stream
//!
//! Continues the stream a star was sampled from. The draw order below is
//! what makes a lazily expanded system identical to an eagerly expanded one:
//!
//! 1. innermost orbit
//! 2. planet count
//! 3. per planet: orbit increment, diameter, population, ring, moon count,
//!    then one diameter per moon

use stellar::LehmerStream;

use crate::planet::Planet;

/// Innermost orbit range `[lo, hi)`
const FIRST_ORBIT: (f64, f64) = (60.0, 200.0);

/// Gap between consecutive orbits `[lo, hi)`
const ORBIT_SPACING: (f64, f64) = (20.0, 200.0);

/// Planet count range `[lo, hi)`
const PLANET_COUNT: (i64, i64) = (0, 10);

/// Planet diameter range `[lo, hi)`
const PLANET_DIAMETER: (f64, f64) = (4.0, 20.0);

/// Population draw `[lo, hi)`; the negative floor leaves a fifth of planets empty
const POPULATION: (i64, i64) = (-5_000_000, 20_000_000);

/// One ring in this many planets
const RING_ODDS: i64 = 10;

/// Moon count draw `[lo, hi)`; negative results mean no moons
const MOON_COUNT: (i64, i64) = (-5, 5);

/// Moon diameter range `[lo, hi)`
const MOON_DIAMETER: (f64, f64) = (1.0, 5.0);

/// Upper bound on moons per planet
pub const MAX_MOONS: usize = 5;

/// Derive the planets orbiting a star, innermost first
///
/// # Example
/// ```
/// use stellar::{LehmerStream, sample_sector};
/// use planetary::generate_planets;
///
/// let mut stream = LehmerStream::for_sector(0, 51);
/// sample_sector(&mut stream).expect("sector (0, 51) is occupied");
///
/// let planets = generate_planets(&mut stream);
/// assert_eq!(planets.len(), 8);
/// ```
pub fn generate_planets(stream: &mut LehmerStream) -> Vec<Planet> {
    let mut distance = stream.next_f64(FIRST_ORBIT.0, FIRST_ORBIT.1);
    let count = stream.next_int(PLANET_COUNT.0, PLANET_COUNT.1);

    let mut planets = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let orbit = distance;
        distance += stream.next_f64(ORBIT_SPACING.0, ORBIT_SPACING.1);

        planets.push(sample_planet(stream, orbit));
    }

    planets
}

/// Sample one planet at a known orbit
fn sample_planet(stream: &mut LehmerStream, distance: f64) -> Planet {
    let diameter = stream.next_f64(PLANET_DIAMETER.0, PLANET_DIAMETER.1);
    let population = stream.next_int(POPULATION.0, POPULATION.1).max(0) as u64;
    let ring = stream.next_int(0, RING_ODDS) == 1;

    let moon_count = stream.next_int(MOON_COUNT.0, MOON_COUNT.1).max(0) as usize;
    let moons = (0..moon_count.min(MAX_MOONS))
        .map(|_| stream.next_f64(MOON_DIAMETER.0, MOON_DIAMETER.1))
        .collect();

    Planet::new(distance, diameter, population, ring, moons)
}
