use crate::config::UniverseConfig;
use crate::error::UniverseError;

#[test]
fn test_default_matches_classic_layout() {
    let config = UniverseConfig::default();

    assert_eq!(config.sectors_x, 32);
    assert_eq!(config.sectors_y, 32);
    assert_eq!(config.sector_size, 50);
    assert!(config.expand_full);
    assert_eq!(config.cell_count(), 1024);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_grid() {
    let config = UniverseConfig::new(0, 4, 50);

    assert!(matches!(
        config.validate(),
        Err(UniverseError::EmptyGrid {
            sectors_x: 0,
            sectors_y: 4
        })
    ));
}

#[test]
fn test_validate_rejects_non_positive_sector_size() {
    assert!(matches!(
        UniverseConfig::new(4, 4, 0).validate(),
        Err(UniverseError::InvalidSectorSize(0))
    ));
    assert!(matches!(
        UniverseConfig::new(4, 4, -50).validate(),
        Err(UniverseError::InvalidSectorSize(-50))
    ));
}

#[test]
fn test_for_screen_requires_whole_sectors() {
    let config = UniverseConfig::for_screen(800, 800, 50, 2).unwrap();
    assert_eq!(config, UniverseConfig::default());

    let err = UniverseConfig::for_screen(810, 800, 50, 2).unwrap_err();
    assert!(matches!(
        err,
        UniverseError::IndivisibleScreen {
            dimension: 810,
            sector_size: 50
        }
    ));
    assert_eq!(
        err.to_string(),
        "screen dimension 810 is not a multiple of sector size 50"
    );
}

#[test]
fn test_for_screen_rejects_zero_universe_size() {
    assert!(matches!(
        UniverseConfig::for_screen(800, 800, 50, 0),
        Err(UniverseError::EmptyGrid { .. })
    ));
}

#[test]
fn test_from_json_fills_defaults() {
    let config = UniverseConfig::from_json(r#"{ "sectorsX": 4, "expandFull": false }"#).unwrap();

    assert_eq!(config.sectors_x, 4);
    assert_eq!(config.sectors_y, 32);
    assert_eq!(config.sector_size, 50);
    assert!(!config.expand_full);
}

#[test]
fn test_from_json_validates() {
    assert!(matches!(
        UniverseConfig::from_json(r#"{ "sectorSize": 0 }"#),
        Err(UniverseError::InvalidSectorSize(0))
    ));
    assert!(matches!(
        UniverseConfig::from_json("not json"),
        Err(UniverseError::Parse(_))
    ));
}

#[test]
fn test_json_round_trip() {
    let config = UniverseConfig::new(7, 9, 25);
    let json = config.to_json().unwrap();

    assert!(json.contains("\"sectorSize\": 25"));
    assert_eq!(UniverseConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_validate_rejects_coordinate_overflow() {
    // sector 3 would sit at 3 × (i64::MAX / 2)
    let config = UniverseConfig::new(4, 1, i64::MAX / 2);

    assert!(matches!(
        config.validate(),
        Err(UniverseError::TooLarge {
            sectors_x: 4,
            sectors_y: 1,
            ..
        })
    ));
}

#[test]
fn test_validate_accepts_farthest_sector_at_limit() {
    // the farthest sector of a 2-wide grid sits exactly at i64::MAX
    assert!(UniverseConfig::new(2, 1, i64::MAX).validate().is_ok());
    assert!(UniverseConfig::new(1, 1, i64::MAX).validate().is_ok());
}

#[test]
fn test_for_screen_rejects_sector_count_overflow() {
    let err = UniverseConfig::for_screen(800, 800, 1, u32::MAX).unwrap_err();

    assert!(matches!(
        err,
        UniverseError::TooLarge {
            sectors_x: 3_435_973_836_000,
            sectors_y: 3_435_973_836_000,
            sector_size: 1
        }
    ));
}
