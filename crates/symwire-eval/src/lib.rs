#![deny(missing_docs)]
#![doc = "Numeric and partial-symbolic evaluation of symwire expression trees."]

//! Evaluation validates its input first, then reduces the tree bottom-up.
//! Subtrees whose leaves all resolve collapse to numbers; anything left over
//! is returned as a residual tree in non-strict mode.

mod bindings;
mod errors;
mod evaluator;
mod symbols;
mod value;

pub use bindings::Bindings;
pub use errors::EvalError;
pub use evaluator::{evaluate, evaluate_strict, Evaluator};
pub use symbols::{free_symbols, substitute, unbound_symbols};
pub use value::{exact_literal, literal, Value};
