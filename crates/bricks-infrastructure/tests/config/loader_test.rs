//! Configuration Loader Tests

use bricks_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};
use bricks_infrastructure::constants::{
    DEFAULT_DEFINITION_POOL_CAPACITY, DEFAULT_LOG_LEVEL, DEFAULT_SHAPE_CACHE_CAPACITY,
};
use bricks_infrastructure::di::Registry;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));
    let config = loader.load().unwrap();

    assert_eq!(
        config.registry.definition_pool_capacity,
        DEFAULT_DEFINITION_POOL_CAPACITY
    );
    assert_eq!(config.registry.shape_cache_capacity, DEFAULT_SHAPE_CACHE_CAPACITY);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bricks.toml");
    fs::write(&config_path, "[registry]\nshape_cache_capacity = 8\n").unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.registry.shape_cache_capacity, 8);
    assert_eq!(
        config.registry.definition_pool_capacity,
        DEFAULT_DEFINITION_POOL_CAPACITY
    );
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_definition_pool_capacity(12)
        .with_logging(LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
        })
        .build();

    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();
    let loaded = loader.reload().unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_zero_capacity_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bricks.toml");
    fs::write(&config_path, "[registry]\ndefinition_pool_capacity = 0\n").unwrap();

    let error = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap_err();
    assert_eq!(error.key(), "config.invalid");
    assert!(error.to_string().contains("Definition pool capacity"));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bricks.toml");
    fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    assert!(
        ConfigLoader::new()
            .with_config_path(&config_path)
            .load()
            .is_err()
    );
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bricks.toml");
    fs::write(&config_path, "[registry\n").unwrap();

    let error = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap_err();
    assert_eq!(error.key(), "config.invalid");
}

#[test]
fn test_registry_sized_from_config() {
    let config = ConfigBuilder::new().with_definition_pool_capacity(3).build();
    let registry = Registry::from_config(&config.registry);
    assert_eq!(registry.definition_pool_capacity(), 3);
}
