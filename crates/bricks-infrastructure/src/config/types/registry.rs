//! Registry configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Capacities of the bounded registry pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Container definitions kept in the definition pool
    pub definition_pool_capacity: usize,

    /// Services kept in the dependency-shape cache
    pub shape_cache_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            definition_pool_capacity: DEFAULT_DEFINITION_POOL_CAPACITY,
            shape_cache_capacity: DEFAULT_SHAPE_CACHE_CAPACITY,
        }
    }
}
