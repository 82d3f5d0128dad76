//! # Bricks Domain
//!
//! Component identity for the Bricks toolkit: content hashing, tags,
//! deterministic ids and the envelope every higher level construct (values,
//! events, ports, services...) acquires its identity through.
//!
//! ```ignore
//! use bricks_domain::identity::{TagRegistry, component};
//! use bricks_domain::value_objects::Tag;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TagRegistry::new());
//! let money = component(&registry, Tag::Value, serde_json::json!({"currency": "EUR"}))?;
//! assert!(money.id().as_str().starts_with("value:"));
//! ```

pub mod constants;
pub mod error;
pub mod hashing;
pub mod identity;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use hashing::Sha256ContentHasher;
pub use identity::{Component, ComponentInfo, ComponentTree, Envelope, TagRegistry, component};
pub use ports::ContentHasher;
pub use value_objects::{Category, ComponentId, Content, Metadata, Tag};
