//! Structured error types shared across symwire crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::function::{Arity, Function};
use crate::validate::NodePath;

/// Structured payload attached to structural error variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, field numbers, offsets).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Coarse error taxonomy shared by validation, decoding and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed tree or byte stream; fatal to the call.
    Structural,
    /// Wrong operand count for a function; fatal to the call.
    Arity,
    /// Strict evaluation met a symbol with no binding; retry with more bindings.
    UnboundSymbol,
    /// A divisor evaluated to exactly zero.
    DivisionByZero,
    /// Strict evaluation met a value with no real representation.
    NonReal,
}

/// Failure reported by [`validate`](crate::validate()).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ValidationError {
    /// Reserved sentinel, empty symbol, or literal zero denominator.
    #[error("structural error: {0}")]
    Structural(ErrorInfo),
    /// Operand count does not match the function's rule.
    #[error("arity error: {function} expects {expected} operand(s), found {found} at {path}")]
    Arity {
        /// Function whose rule was violated.
        function: Function,
        /// Rule the function imposes.
        expected: Arity,
        /// Observed operand count.
        found: usize,
        /// Location of the offending term.
        path: NodePath,
    },
}

impl ValidationError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Structural(_) => ErrorKind::Structural,
            ValidationError::Arity { .. } => ErrorKind::Arity,
        }
    }

    /// Returns the stable machine readable code.
    pub fn code(&self) -> &str {
        match self {
            ValidationError::Structural(info) => &info.code,
            ValidationError::Arity { .. } => "arity",
        }
    }
}
