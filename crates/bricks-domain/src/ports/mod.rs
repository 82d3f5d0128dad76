//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ContentHasher`] | Deterministic digest used for every component identity |

/// Content hashing port
pub mod hasher;

pub use hasher::{ContentHasher, hash_content};
