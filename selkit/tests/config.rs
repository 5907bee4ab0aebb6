//! Tests for widget configuration.

use selkit::config::{validate_options, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_TAGS, DEFAULT_MIN_HEIGHT_TO_OPEN};
use selkit::{ConfigError, Direction, PlacementConfig, SelectConfig, TagInputConfig};

#[test]
fn test_select_config_defaults() {
    let config = SelectConfig::default();
    assert_eq!(config.placeholder, "Select...");
    assert!(!config.disabled);
    assert_eq!(config.max_height, DEFAULT_MAX_HEIGHT);
    assert_eq!(config.reveal_margin, 10);
    assert_eq!(config.placement.min_height_to_open, DEFAULT_MIN_HEIGHT_TO_OPEN);
    assert!(!config.placement.prefer_up);
    assert_eq!(config.placement.force_direction, None);
}

#[test]
fn test_select_config_builder() {
    let config = SelectConfig::new()
        .placeholder("Rating")
        .max_height(4)
        .prefer_up(true)
        .min_height_to_open(3)
        .force_direction(Direction::Up);
    assert_eq!(config.placeholder, "Rating");
    assert_eq!(config.max_height, 4);
    assert_eq!(
        config.placement,
        PlacementConfig {
            min_height_to_open: 3,
            prefer_up: true,
            force_direction: Some(Direction::Up),
        }
    );
}

#[test]
fn test_select_config_from_json() {
    let config: SelectConfig = serde_json::from_str(
        r#"{ "placeholder": "Rating", "prefer_up": true, "force_direction": "down" }"#,
    )
    .unwrap();
    assert_eq!(config.placeholder, "Rating");
    assert!(config.placement.prefer_up);
    assert_eq!(config.placement.force_direction, Some(Direction::Down));
    // Unspecified fields keep their defaults
    assert_eq!(config.max_height, DEFAULT_MAX_HEIGHT);
    assert_eq!(config.placement.min_height_to_open, DEFAULT_MIN_HEIGHT_TO_OPEN);
}

#[test]
fn test_empty_json_is_default() {
    let config: SelectConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SelectConfig::default());

    let config: TagInputConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, TagInputConfig::default());
    assert_eq!(config.max, DEFAULT_MAX_TAGS);
}

#[test]
fn test_tag_input_config_from_json() {
    let config: TagInputConfig =
        serde_json::from_str(r#"{ "max": 5, "min_height_to_open": 2 }"#).unwrap();
    assert_eq!(config.max, 5);
    assert_eq!(config.placement.min_height_to_open, 2);
}

#[test]
fn test_unknown_direction_rejected() {
    let result: Result<SelectConfig, _> =
        serde_json::from_str(r#"{ "force_direction": "sideways" }"#);
    assert!(result.is_err());
}

#[test]
fn test_validate_max_height() {
    assert_eq!(SelectConfig::new().validate(), Ok(()));
    assert_eq!(
        SelectConfig::new().max_height(0).validate(),
        Err(ConfigError::ZeroMaxHeight)
    );
    assert_eq!(
        TagInputConfig::new().max_height(0).validate(),
        Err(ConfigError::ZeroMaxHeight)
    );
}

#[test]
fn test_validate_options() {
    let unique: Vec<String> = vec!["G".into(), "PG".into()];
    assert_eq!(validate_options(&unique), Ok(()));

    let duplicated: Vec<String> = vec!["G".into(), "PG".into(), "G".into()];
    assert_eq!(
        validate_options(&duplicated),
        Err(ConfigError::DuplicateOption("G".into()))
    );
}

#[test]
fn test_error_display() {
    let display = ConfigError::DuplicateOption("Drama".into()).to_string();
    assert!(display.contains("Drama"));
}
