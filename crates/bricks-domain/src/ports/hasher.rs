//! Content hashing port

use crate::constants::KEY_VALUE_SEPARATOR;
use crate::value_objects::Content;

/// Deterministic digest of structural content
///
/// Implementors only provide [`ContentHasher::digest`] over text. The
/// structural walk in [`ContentHasher::hash`] is shared: scalars and function
/// sources are digested as text, arrays digest the concatenation of their
/// element hashes, objects digest `key:hash(value)` over sorted keys.
///
/// Equal content always yields equal hashes. Different content may collide;
/// callers that need identity must compare the content too.
pub trait ContentHasher: Send + Sync {
    /// Digest a piece of text
    fn digest(&self, text: &str) -> String;

    /// Hash structural content
    fn hash(&self, content: &Content) -> String {
        hash_content(self, content)
    }
}

/// Structural hash of `content` using `hasher` for every digest
pub fn hash_content<H: ContentHasher + ?Sized>(hasher: &H, content: &Content) -> String {
    match content {
        Content::Null => hasher.digest("null"),
        Content::Bool(b) => hasher.digest(&b.to_string()),
        Content::Number(n) => hasher.digest(&n.to_string()),
        Content::Str(s) => hasher.digest(s),
        Content::Function(source) => hasher.digest(source),
        Content::Array(items) => {
            let joined: String = items.iter().map(|item| hash_content(hasher, item)).collect();
            hasher.digest(&joined)
        }
        Content::Object(entries) => {
            let joined: String = entries
                .iter()
                .map(|(key, value)| {
                    format!("{key}{KEY_VALUE_SEPARATOR}{}", hash_content(hasher, value))
                })
                .collect();
            hasher.digest(&joined)
        }
    }
}
