use approx::assert_relative_eq;

use crate::planet::{Planet, temperature_at};

#[test]
fn test_temperature_falls_with_distance() {
    assert_relative_eq!(temperature_at(0.0), 1000.0);
    assert_relative_eq!(temperature_at(100.0), 700.0);
    assert_relative_eq!(temperature_at(400.0), -200.0);
}

#[test]
fn test_new_derives_temperature_and_composition() {
    // distance 326.666.. puts the surface at the 20° optimum
    let planet = Planet::new(980.0 / 3.0, 20.0, 1_000, true, vec![2.0]);

    assert_relative_eq!(planet.temperature, 20.0, epsilon = 1e-9);
    assert_relative_eq!(planet.composition.foliage, 0.25, epsilon = 1e-9);
    assert_relative_eq!(planet.composition.minerals, 0.25, epsilon = 1e-9);
    assert!(planet.is_inhabited());
    assert_eq!(planet.moon_count(), 1);
}

#[test]
fn test_to_text_lists_fields_in_order() {
    let planet = Planet::new(100.0, 10.0, 0, false, vec![1.5, 2.5]);
    let text = planet.to_text();

    let names: Vec<&str> = text
        .lines()
        .map(|line| line.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(
        names,
        vec![
            "distance",
            "diameter",
            "foliage",
            "minerals",
            "water",
            "gases",
            "temperature",
            "population",
            "ring",
            "moons"
        ]
    );

    assert!(text.starts_with("distance: 100\n"));
    assert!(text.contains("population: 0\n"));
    assert!(text.contains("ring: false\n"));
    assert!(text.ends_with("moons: [1.5, 2.5]\n"));
}
