//! Configuration
//!
//! Defaults, an optional `bricks.toml` and `BRICKS_*` environment variables,
//! merged with figment in that order.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
