//! Tests for elevator configuration.

use super::*;
use elevators_core::{BigUint, BoundKind};

#[test]
fn test_toml_parsing() {
    let toml = r#"
        grades = [1, 1, 2, 3]
        degree = 3
        lower_bounds = [0, 0, 0, 0]
        upper_bounds = [1, 1, 1, 1]
        environment_mode = "full_assert"
    "#;

    let config = ElevatorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.grades, vec![1, 1, 2, 3]);
    assert_eq!(config.degree, 3);
    assert_eq!(config.upper_bounds, Some(vec![1, 1, 1, 1]));
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);

    let elevator = config.build().unwrap();
    assert_eq!(elevator.count(), BigUint::from(3u32));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        grades: [1, 2, 2]
        degree: 4
        lower_bounds: [0, 1, 0]
    "#;

    let config = ElevatorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.grades, vec![1, 2, 2]);
    assert_eq!(config.lower_bounds, Some(vec![0, 1, 0]));
    assert_eq!(config.upper_bounds, None);
    assert_eq!(config.environment_mode, EnvironmentMode::Fast);

    // 2+2 with index 1 at least once: [1, 1], [1, 2]; 2+1+1: [0, 0, 1]
    let elevator = config.build().unwrap();
    assert_eq!(elevator.count(), BigUint::from(3u32));
}

#[test]
fn test_builder() {
    let config = ElevatorConfig::new(vec![1, 1, 1], 2)
        .with_upper_bounds(vec![1, 1, 1])
        .with_environment_mode(EnvironmentMode::FullAssert);

    assert!(config.environment_mode.is_asserted());
    let elevator = config.build().unwrap();
    assert_eq!(elevator.iter().count(), 3);
}

#[test]
fn test_defaults() {
    let config = ElevatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, ElevatorConfig::default());

    // the empty list has exactly the empty elevation in degree zero
    assert_eq!(config.build().unwrap().count(), BigUint::from(1u32));
}

#[test]
fn test_rejected_by_elevator() {
    let config = ElevatorConfig::new(vec![2, 1], 3);
    let err = config.build().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Elevator(ConfigurationError::UnsortedGrades { index: 1, .. })
    ));

    let config = ElevatorConfig::new(vec![1, 2], 3).with_lower_bounds(vec![0, 0, 0]);
    assert!(matches!(
        config.build().unwrap_err(),
        ConfigError::Elevator(ConfigurationError::BoundsLength {
            kind: BoundKind::Lower,
            ..
        })
    ));
}

#[test]
fn test_empty_bounds_are_invalid() {
    let config = ElevatorConfig::new(vec![1, 2], 3).with_upper_bounds(vec![]);
    assert!(matches!(config.build().unwrap_err(), ConfigError::Invalid(_)));
}

#[test]
fn test_invalid_toml() {
    assert!(matches!(
        ElevatorConfig::from_toml_str("degree = \"three\"").unwrap_err(),
        ConfigError::Toml(_)
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        ElevatorConfig::load("/nonexistent/elevator.toml").unwrap_err(),
        ConfigError::Io(_)
    ));
}
