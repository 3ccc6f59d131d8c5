#![deny(missing_docs)]
#![doc = "Expression tree model, validator, and shared error types for symwire."]

//! A tree is a [`Term`] whose ordered [`Operand`]s are either nested terms or
//! leaf [`Parameter`]s. Trees are built once, treated as immutable, and every
//! operation in the workspace takes them by shared reference.

mod display;
pub mod errors;
mod function;
pub mod provenance;
pub mod sampler;
mod types;
mod validate;

pub use errors::{ErrorInfo, ErrorKind, ValidationError};
pub use function::{Arity, ConstSymbol, Function};
pub use provenance::SchemaVersion;
pub use sampler::{SamplerConfig, TermSampler};
pub use types::{Operand, Parameter, Rational, Term};
pub use validate::{validate, validate_operand, validate_parameter, NodePath};
