//! Domain layer constants

/// Separator between the tag prefix and the content hash in component ids
pub const ID_SEPARATOR: &str = ":";

/// Separator between an object key and its value hash
pub const KEY_VALUE_SEPARATOR: &str = ":";

/// Number of hex characters kept from the SHA-256 digest
pub const HASH_DIGEST_LENGTH: usize = 16;

/// Tracing target used by the tracer collaborator
pub const TRACE_TARGET: &str = "bricks::trace";
