use sha2::{Digest, Sha256};
use symwire_core::{Term, ValidationError};

use crate::encode::encode;

/// Computes the canonical hash of a tree: SHA-256 over its wire bytes, as
/// lower-case hex.
///
/// Structurally equal trees hash equal; `Add(x, 0)` and `x` do not.
pub fn canonical_hash(term: &Term) -> Result<String, ValidationError> {
    let bytes = encode(term)?;
    Ok(hash_bytes(&bytes))
}

pub(crate) fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
