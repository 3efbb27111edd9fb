use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::STAR_PALETTE;

use crate::system::StarSystem;

#[test]
fn test_empty_sector_carries_no_star() {
    let mut system = StarSystem::generate(0, 0, true);

    assert_eq!(system.seed, 0);
    assert!(!system.exists());
    assert!(system.star().is_none());
    assert!(system.diameter().is_none());
    assert!(system.planets().is_none());
    assert!(system.expand().is_empty());
    assert!(!system.is_expanded());
}

#[test]
fn test_reference_star_attributes() {
    let system = StarSystem::generate(0, 11, false);

    assert!(system.exists());
    assert_relative_eq!(system.diameter().unwrap(), 38.06070821735109, epsilon = 1e-9);
    assert_eq!(system.color(), Some(STAR_PALETTE[4]));
    assert!(!system.is_expanded());
}

#[test]
fn test_independent_constructions_agree() {
    for (x, y) in [(0, 11), (0, 51), (50, 100), (-350, 900)] {
        let a = StarSystem::generate(x, y, true);
        let b = StarSystem::generate(x, y, true);

        assert_eq!(a, b, "sector ({}, {}) is not deterministic", x, y);
    }
}

#[test]
fn test_lazy_expansion_matches_eager_expansion() {
    let eager = StarSystem::generate(0, 51, true);
    let mut lazy = StarSystem::generate(0, 51, false);

    assert!(eager.is_expanded());
    assert!(lazy.planets().is_none());

    let planets = lazy.expand().to_vec();
    assert_eq!(planets.len(), 8);
    assert_eq!(Some(planets.as_slice()), eager.planets());
    assert_eq!(lazy, eager);
}

#[test]
fn test_expansion_is_cached() {
    let mut system = StarSystem::generate(0, 51, false);

    let first = system.expand().to_vec();
    let second = system.expand().to_vec();

    assert_eq!(first, second);
    assert!(system.is_expanded());
}

#[test]
fn test_entropy_is_reproducible_with_seeded_rng() {
    let mut rng_a = ChaChaRng::seed_from_u64(2024);
    let mut rng_b = ChaChaRng::seed_from_u64(2024);

    for i in 0..50 {
        let a = StarSystem::generate_with_entropy(i * 50, 0, true, &mut rng_a);
        let b = StarSystem::generate_with_entropy(i * 50, 0, true, &mut rng_b);
        assert_eq!(a, b);
    }
}

#[test]
fn test_from_seed_ignores_coordinates_for_content() {
    let here = StarSystem::from_seed(0, 0, 51, true);
    let there = StarSystem::generate(0, 51, true);

    assert_eq!(here.star(), there.star());
    assert_eq!(here.planets(), there.planets());
}

#[test]
fn test_to_text_for_empty_sector() {
    let system = StarSystem::generate(3, 4, false);

    assert_eq!(system.to_text(), "x: 3\ny: 4\nseed: 196612\nexists: false\n");
}

#[test]
fn test_to_text_lists_star_fields_in_order() {
    let mut system = StarSystem::generate(0, 11, false);

    let text = system.to_text();
    let names: Vec<&str> = text
        .lines()
        .map(|line| line.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(
        names,
        vec!["x", "y", "seed", "exists", "name", "diameter", "color", "planets"]
    );
    assert!(text.contains("color: (54, 77, 231)\n"));
    assert!(text.ends_with("planets: unexpanded\n"));

    system.expand();
    assert!(system.to_text().ends_with("planets: 1\n"));
}

#[test]
fn test_existence_rate_near_five_percent() {
    let occupied = (0..100)
        .flat_map(|i| (0..100).map(move |j| (i * 50, j * 50)))
        .filter(|&(x, y)| StarSystem::generate(x, y, false).exists())
        .count();
    let rate = occupied as f64 / 10_000.0;

    assert!(
        (rate - 0.05).abs() < 0.01,
        "existence rate {} should be near 0.05",
        rate
    );
}
