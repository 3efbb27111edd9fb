//! Integration tests for the full generation pipeline.
//!
//! These tests exercise the grid, star systems and planets together through
//! the public API only.

use approx::assert_relative_eq;
use universe::{Grid, STAR_PALETTE, StarSystem, UniverseConfig};

#[test]
fn universe_is_reproducible_across_constructions() {
    let config = UniverseConfig::default();

    let first = Grid::from_config(&config).unwrap();
    let second = Grid::from_config(&config).unwrap();

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.to_text(), b.to_text());
    }
}

#[test]
fn existence_rate_converges_over_ten_thousand_sectors() {
    let grid = Grid::with_expansion(100, 100, 50, false);
    let rate = grid.star_count() as f64 / grid.len() as f64;

    println!("Existence rate over {} sectors: {:.4}", grid.len(), rate);
    assert!(
        (rate - 0.05).abs() < 0.01,
        "existence rate {} outside tolerance",
        rate
    );
}

#[test]
fn grid_cells_match_standalone_systems() {
    let grid = Grid::new(6, 6, 50);

    for i in 0..6 {
        for j in 0..6 {
            let cell = grid.cell_at(i, j).unwrap();
            let (x, y) = grid.world_position(i, j);
            assert_eq!(cell, &StarSystem::generate(x, y, true));
        }
    }
}

#[test]
fn reference_star_detail_view() {
    // world (0, 51) is not on the 50-unit lattice, so build a 1-unit grid
    let mut grid = Grid::with_expansion(1, 52, 1, false);
    let star = grid.cell_at(0, 51).unwrap();

    assert!(star.exists());
    assert_eq!(star.color(), Some(STAR_PALETTE[1]));
    assert_relative_eq!(star.diameter().unwrap(), 20.0996471895369, epsilon = 1e-9);

    let planets = grid.expand(0, 51).unwrap();
    assert_eq!(planets.len(), 8);

    println!("{}", grid.cell_at(0, 51).unwrap().to_text());
    for planet in grid.cell_at(0, 51).unwrap().planets().unwrap() {
        println!("{}", planet.to_text());
    }
}

#[test]
fn every_planet_respects_invariants() {
    let grid = Grid::new(64, 64, 50);
    let mut planets_seen = 0;

    for (_, system) in grid.stars() {
        let planets = system.planets().unwrap();
        for pair in planets.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
        for planet in planets {
            let c = planet.composition;
            assert_relative_eq!(c.foliage + c.minerals + c.water + c.gases, 1.0, epsilon = 1e-9);
            assert!(planet.moons.len() <= 5);
            planets_seen += 1;
        }
    }

    assert!(planets_seen > 0);
}
