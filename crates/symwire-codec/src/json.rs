use symwire_core::{validate, ErrorInfo, Operand, Parameter, Term, ValidationError};

use crate::errors::StoreError;

/// Deepest container nesting `serde_json` reads before reporting a
/// recursion limit.
const JSON_MAX_NESTING: usize = 127;

fn map_err(err: serde_json::Error, code: &str) -> StoreError {
    StoreError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a validated tree to pretty-printed JSON.
///
/// Trees whose JSON form would nest deeper than [`from_json`] can read are
/// refused with code `depth-exceeded`.
pub fn to_json(term: &Term) -> Result<String, StoreError> {
    validate(term)?;
    let depth = json_term_depth(term, 1);
    if depth > JSON_MAX_NESTING {
        return Err(ValidationError::Structural(
            ErrorInfo::new("depth-exceeded", "JSON nesting exceeds the reader limit")
                .with_context("depth", depth)
                .with_context("max_depth", JSON_MAX_NESTING),
        )
        .into());
    }
    serde_json::to_string_pretty(term).map_err(|err| map_err(err, "json-serialize"))
}

/// Restores a tree from JSON and validates it.
pub fn from_json(json: &str) -> Result<Term, StoreError> {
    let term: Term = serde_json::from_str(json).map_err(|err| map_err(err, "json-deserialize"))?;
    validate(&term)?;
    Ok(term)
}

// A term object holds an `operands` array whose entries are operand objects
// wrapping a term or parameter object.
fn json_term_depth(term: &Term, depth: usize) -> usize {
    term.operands
        .iter()
        .map(|operand| match operand {
            Operand::Term(inner) => json_term_depth(inner, depth + 3),
            Operand::Parameter(parameter) => json_parameter_depth(parameter, depth + 3),
        })
        .fold(depth + 1, usize::max)
}

fn json_parameter_depth(parameter: &Parameter, depth: usize) -> usize {
    match parameter {
        Parameter::ConstRat(rational) => json_parameter_depth(&rational.numerator, depth + 2)
            .max(json_parameter_depth(&rational.denominator, depth + 2)),
        _ => depth,
    }
}
