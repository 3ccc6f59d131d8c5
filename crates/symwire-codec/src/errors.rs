use symwire_core::{ErrorInfo, ErrorKind, SchemaVersion, ValidationError};
use thiserror::Error;

/// Failure reported by [`decode`](crate::decode()).
///
/// The three variants are reported separately so callers can tell a damaged
/// byte stream from a well-framed message that breaks the tree rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Truncated input, bad framing, unknown enum value, or excessive nesting.
    #[error("malformed input: {0}")]
    Malformed(ErrorInfo),
    /// A oneof group had zero or more than one populated member.
    #[error("oneof violation: {0}")]
    Oneof(ErrorInfo),
    /// The bytes framed a tree that fails validation.
    #[error("decoded tree is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

impl DecodeError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Malformed(_) | DecodeError::Oneof(_) => ErrorKind::Structural,
            DecodeError::Invalid(err) => err.kind(),
        }
    }

    /// Returns the stable machine readable code.
    pub fn code(&self) -> &str {
        match self {
            DecodeError::Malformed(info) | DecodeError::Oneof(info) => &info.code,
            DecodeError::Invalid(err) => err.code(),
        }
    }
}

/// Failure while writing or reading JSON and stored envelopes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The tree failed validation before it could be written.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The wire payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// JSON or bincode framing failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// The envelope was written under an incompatible schema.
    #[error("schema {found} cannot be read by schema {supported}")]
    SchemaMismatch {
        /// Version recorded in the envelope.
        found: SchemaVersion,
        /// Version spoken by this build.
        supported: SchemaVersion,
    },
    /// The payload does not match its recorded hash.
    #[error("payload hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        /// Hash recorded in the envelope.
        expected: String,
        /// Hash of the payload as read.
        computed: String,
    },
}

impl StoreError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Invalid(err) => err.kind(),
            StoreError::Decode(err) => err.kind(),
            _ => ErrorKind::Structural,
        }
    }
}
