//! Structural well-formedness checks for expression trees.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ValidationError};
use crate::function::Function;
use crate::types::{Operand, Parameter, Term};

/// Child indices leading from the root to a node.
///
/// Operands are indexed by position; a rational's numerator is child `0`
/// and its denominator child `1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the root node.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the child indices.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    fn child(&self, idx: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(idx);
        Self(indices)
    }
}

impl Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for idx in &self.0 {
            write!(f, "/{idx}")?;
        }
        Ok(())
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Checks that `term` and everything beneath it is well formed.
///
/// Children are checked before their parent, so the reported error is the
/// deepest, left-most violation.
pub fn validate(term: &Term) -> Result<(), ValidationError> {
    check_term(term, &NodePath::root())
}

/// Checks a tree edge, which may be a bare leaf.
pub fn validate_operand(operand: &Operand) -> Result<(), ValidationError> {
    check_operand(operand, &NodePath::root())
}

/// Checks a leaf value, including the parts of a rational.
pub fn validate_parameter(parameter: &Parameter) -> Result<(), ValidationError> {
    check_parameter(parameter, &NodePath::root())
}

fn check_term(term: &Term, path: &NodePath) -> Result<(), ValidationError> {
    for (idx, operand) in term.operands.iter().enumerate() {
        check_operand(operand, &path.child(idx))?;
    }
    if term.function == Function::None {
        return Err(ValidationError::Structural(
            ErrorInfo::new(
                "reserved-function",
                "the NONE function tag may not appear on a term",
            )
            .with_context("path", path)
            .with_context("operands", term.operands.len())
            .with_hint("store bare values as parameter operands instead"),
        ));
    }
    let expected = term.function.arity();
    if !expected.accepts(term.operands.len()) {
        return Err(ValidationError::Arity {
            function: term.function,
            expected,
            found: term.operands.len(),
            path: path.clone(),
        });
    }
    Ok(())
}

fn check_operand(operand: &Operand, path: &NodePath) -> Result<(), ValidationError> {
    match operand {
        Operand::Term(term) => check_term(term, path),
        Operand::Parameter(parameter) => check_parameter(parameter, path),
    }
}

fn check_parameter(parameter: &Parameter, path: &NodePath) -> Result<(), ValidationError> {
    match parameter {
        Parameter::Symbol(name) if name.is_empty() => Err(ValidationError::Structural(
            ErrorInfo::new("empty-symbol", "symbol names must be non-empty").with_context("path", path),
        )),
        Parameter::ConstRat(rational) => {
            check_parameter(&rational.numerator, &path.child(0))?;
            check_parameter(&rational.denominator, &path.child(1))?;
            if rational.denominator.is_literal_zero() {
                return Err(ValidationError::Structural(
                    ErrorInfo::new("zero-denominator", "rational denominator is the literal zero")
                        .with_context("path", path),
                ));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
