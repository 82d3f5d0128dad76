//! Constants Tests

use bricks_infrastructure::constants::*;

#[test]
fn test_config_constants() {
    assert_eq!(DEFAULT_CONFIG_FILENAME, "bricks.toml");
    assert_eq!(DEFAULT_CONFIG_DIR, "bricks");
    assert_eq!(CONFIG_ENV_PREFIX, "BRICKS");
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
}

#[test]
fn test_registry_constants() {
    assert_eq!(DEFAULT_DEFINITION_POOL_CAPACITY, 100);
    assert_eq!(DEFAULT_SHAPE_CACHE_CAPACITY, 256);
}

#[test]
fn test_log_env_var_uses_config_prefix() {
    assert!(LOG_ENV_VAR.starts_with(CONFIG_ENV_PREFIX));
}
