use std::collections::BTreeSet;
use std::fmt::{self, Display};

use symwire_core::{ConstSymbol, Operand, Parameter};

use crate::symbols::collect_operand;

/// Outcome of evaluating a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Fully reduced real number.
    Number(f64),
    /// Residual tree that still contains unresolved symbols or the imaginary
    /// unit. A fully numeric subtree inside it is collapsed to a literal when
    /// the literal holds its value exactly; otherwise the subtree is kept with
    /// its exactly representable bindings substituted.
    Symbolic(Operand),
}

impl Value {
    /// Returns the number, if the tree reduced completely.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            Value::Symbolic(_) => None,
        }
    }

    /// Returns whether unresolved parts remain.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Value::Symbolic(_))
    }

    /// Converts the value back into a tree edge.
    ///
    /// A number with no exact leaf goes through [`literal`] and may round.
    pub fn into_operand(self) -> Operand {
        match self {
            Value::Number(value) => Operand::Parameter(literal(value)),
            Value::Symbolic(operand) => operand,
        }
    }

    /// Names of the symbols still free in a residual value.
    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        if let Value::Symbolic(operand) = self {
            collect_operand(operand, &mut names);
        }
        names
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{value}"),
            Value::Symbolic(operand) => write!(f, "{operand}"),
        }
    }
}

/// Converts a number into the leaf that stores it on the wire.
///
/// Integral values within `i32` become `ConstInt`; positive infinity becomes
/// the named constant; everything else is narrowed to `ConstFloat`. The
/// narrowing may round, so a tiny nonzero value can come back as zero; use
/// [`exact_literal`] when the leaf has to evaluate to the same number.
pub fn literal(value: f64) -> Parameter {
    if value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        return Parameter::ConstInt(value as i32);
    }
    if value == f64::INFINITY {
        return Parameter::ConstSymbol(ConstSymbol::Infinity);
    }
    Parameter::ConstFloat(value as f32)
}

/// Returns the leaf that evaluates back to exactly `value`, if one exists.
pub fn exact_literal(value: f64) -> Option<Parameter> {
    if value.is_nan() {
        return Some(Parameter::ConstFloat(f32::NAN));
    }
    if value == 0.0 && value.is_sign_negative() {
        return Some(Parameter::ConstFloat(-0.0));
    }
    match literal(value) {
        Parameter::ConstFloat(narrowed) if f64::from(narrowed) != value => None,
        exact => Some(exact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_prefers_exact_forms() {
        assert_eq!(literal(1024.0), Parameter::ConstInt(1024));
        assert_eq!(literal(-3.0), Parameter::ConstInt(-3));
        assert_eq!(literal(0.5), Parameter::ConstFloat(0.5));
        assert_eq!(literal(4.0e10), Parameter::ConstFloat(4.0e10));
        assert_eq!(literal(f64::INFINITY), Parameter::ConstSymbol(ConstSymbol::Infinity));
    }

    #[test]
    fn exact_literal_refuses_rounding() {
        assert_eq!(exact_literal(3.0), Some(Parameter::ConstInt(3)));
        assert_eq!(exact_literal(0.5), Some(Parameter::ConstFloat(0.5)));
        assert_eq!(exact_literal(-0.0), Some(Parameter::ConstFloat(-0.0)));
        assert_eq!(
            exact_literal(f64::NEG_INFINITY),
            Some(Parameter::ConstFloat(f32::NEG_INFINITY))
        );
        assert!(matches!(exact_literal(f64::NAN), Some(Parameter::ConstFloat(v)) if v.is_nan()));
        for lossy in [1e-50, -1e-50, 0.1, 1e300, f64::MAX] {
            assert_eq!(exact_literal(lossy), None, "{lossy}");
        }
        assert_eq!(literal(1e-50), Parameter::ConstFloat(0.0));
    }
}
