#![deny(missing_docs)]
#![doc = "Field-tagged wire codec, JSON form, and stored envelopes for symwire expression trees."]

//! `decode(encode(t)) == t` holds for every tree that passes
//! [`symwire_core::validate`]. Unknown fields written by newer producers are
//! skipped, so older readers keep working as the schema grows.

mod decode;
mod encode;
mod errors;
mod hash;
mod json;
mod schema;
mod store;
mod wire;

pub use decode::{decode, decode_with, DecodeOptions, DEFAULT_MAX_DEPTH};
pub use encode::encode;
pub use errors::{DecodeError, StoreError};
pub use hash::canonical_hash;
pub use json::{from_json, to_json};
pub use store::{from_stored_bytes, from_stored_bytes_with, to_stored_bytes, StoredExpression};
