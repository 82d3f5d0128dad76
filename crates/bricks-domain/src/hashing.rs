//! Default content hasher

use crate::constants::HASH_DIGEST_LENGTH;
use crate::ports::ContentHasher;
use sha2::{Digest, Sha256};

/// SHA-256 content hasher producing a truncated hex digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256ContentHasher;

impl Sha256ContentHasher {
    /// Create the hasher
    pub fn new() -> Self {
        Self
    }
}

impl ContentHasher for Sha256ContentHasher {
    fn digest(&self, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let mut encoded = hex::encode(hasher.finalize());
        encoded.truncate(HASH_DIGEST_LENGTH);
        encoded
    }
}
