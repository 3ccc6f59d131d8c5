use serde::{Deserialize, Serialize};
use symwire_core::{ErrorInfo, SchemaVersion, Term};

use crate::decode::{decode_with, DecodeOptions};
use crate::encode::encode;
use crate::errors::StoreError;
use crate::hash::hash_bytes;

/// Envelope the persistence layer keeps for each expression.
///
/// The wire payload is carried opaquely next to the schema it was written
/// under and its SHA-256, so a reader can reject foreign or damaged payloads
/// before decoding them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredExpression {
    /// Schema of the wire payload.
    pub schema_version: SchemaVersion,
    /// Lower-case hex SHA-256 of `payload`.
    pub sha256: String,
    /// Wire bytes produced by [`encode`](crate::encode()).
    pub payload: Vec<u8>,
}

impl StoredExpression {
    /// Encodes a validated tree into a new envelope.
    pub fn from_term(term: &Term) -> Result<Self, StoreError> {
        let payload = encode(term)?;
        Ok(Self {
            schema_version: SchemaVersion::CURRENT,
            sha256: hash_bytes(&payload),
            payload,
        })
    }

    /// Checks schema and hash, then decodes the payload.
    pub fn to_term(&self) -> Result<Term, StoreError> {
        self.to_term_with(DecodeOptions::default())
    }

    /// Like [`to_term`](Self::to_term), decoding under explicit limits.
    pub fn to_term_with(&self, options: DecodeOptions) -> Result<Term, StoreError> {
        if !SchemaVersion::CURRENT.can_read(&self.schema_version) {
            return Err(StoreError::SchemaMismatch {
                found: self.schema_version,
                supported: SchemaVersion::CURRENT,
            });
        }
        let computed = hash_bytes(&self.payload);
        if computed != self.sha256 {
            return Err(StoreError::HashMismatch {
                expected: self.sha256.clone(),
                computed,
            });
        }
        Ok(decode_with(&self.payload, options)?)
    }
}

/// Serializes a tree into a compact envelope blob using `bincode`.
pub fn to_stored_bytes(term: &Term) -> Result<Vec<u8>, StoreError> {
    let stored = StoredExpression::from_term(term)?;
    bincode::serialize(&stored)
        .map_err(|err| StoreError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a tree from an envelope blob.
pub fn from_stored_bytes(bytes: &[u8]) -> Result<Term, StoreError> {
    from_stored_bytes_with(bytes, DecodeOptions::default())
}

/// Rehydrates a tree from an envelope blob under explicit decode limits.
pub fn from_stored_bytes_with(bytes: &[u8], options: DecodeOptions) -> Result<Term, StoreError> {
    let stored: StoredExpression = bincode::deserialize(bytes)
        .map_err(|err| StoreError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    stored.to_term_with(options)
}
