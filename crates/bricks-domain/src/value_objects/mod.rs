//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Tag`] | Closed set of component tags |
//! | [`Category`] | Function or object target |
//! | [`ComponentId`] | Deterministic `tag:hash` identifier |
//! | [`Content`] | Structural input of the content hasher |
//! | [`Metadata`] | Set-once descriptive metadata |

/// Component identifiers
pub mod component_id;
/// Hashable content model
pub mod content;
/// Component metadata
pub mod metadata;
/// Tags and categories
pub mod tag;

pub use component_id::ComponentId;
pub use content::Content;
pub use metadata::Metadata;
pub use tag::{Category, Tag};
