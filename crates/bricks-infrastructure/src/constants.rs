//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Identity constants are defined in `bricks_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bricks.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bricks";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BRICKS";

/// Separator between nested keys in environment variables
/// (`BRICKS_REGISTRY__SHAPE_CACHE_CAPACITY`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// REGISTRY CONSTANTS
// ============================================================================

/// Container definitions whose instance caches stay pooled
pub const DEFAULT_DEFINITION_POOL_CAPACITY: usize = 100;

/// Services whose dependency keys stay memoized
pub const DEFAULT_SHAPE_CACHE_CAPACITY: usize = 256;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "BRICKS_LOG";
