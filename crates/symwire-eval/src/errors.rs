use symwire_core::{ErrorInfo, ErrorKind, ValidationError};
use thiserror::Error;

/// Failure reported by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The tree failed validation and was not evaluated.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Strict evaluation met a symbol with no binding.
    #[error("symbol `{name}` has no binding")]
    UnboundSymbol {
        /// Name of the unresolved symbol.
        name: String,
    },
    /// A divisor evaluated to exactly zero.
    #[error("division by zero: {0}")]
    DivisionByZero(ErrorInfo),
    /// Strict evaluation met a value with no real representation.
    #[error("non-real value: {0}")]
    NonReal(ErrorInfo),
}

impl EvalError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Invalid(err) => err.kind(),
            EvalError::UnboundSymbol { .. } => ErrorKind::UnboundSymbol,
            EvalError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            EvalError::NonReal(_) => ErrorKind::NonReal,
        }
    }

    /// Returns whether supplying more bindings could make a retry succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EvalError::UnboundSymbol { .. })
    }
}
