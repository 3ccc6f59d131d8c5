use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::function::{ConstSymbol, Function};

/// Leaf value of an expression tree.
///
/// Exactly one variant is populated at a time. Equality is structural:
/// floats compare by bit pattern so that `Eq` and `Hash` stay lawful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Signed 32-bit integer constant.
    ConstInt(i32),
    /// Free variable identified by name.
    Symbol(String),
    /// Exact fraction whose parts may themselves be symbolic.
    ConstRat(Rational),
    /// Approximate 32-bit float constant.
    ConstFloat(f32),
    /// Named mathematical constant.
    ConstSymbol(ConstSymbol),
}

impl Parameter {
    /// Integer constant.
    pub fn int(value: i32) -> Self {
        Parameter::ConstInt(value)
    }

    /// Free symbol with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Parameter::Symbol(name.into())
    }

    /// Fraction `numerator / denominator`.
    pub fn rational(numerator: impl Into<Parameter>, denominator: impl Into<Parameter>) -> Self {
        Parameter::ConstRat(Rational::new(numerator, denominator))
    }

    /// Float constant.
    pub fn float(value: f32) -> Self {
        Parameter::ConstFloat(value)
    }

    /// Named constant.
    pub fn constant(symbol: ConstSymbol) -> Self {
        Parameter::ConstSymbol(symbol)
    }

    /// Returns whether this leaf is the literal zero (`0` or `±0.0`).
    pub fn is_literal_zero(&self) -> bool {
        match self {
            Parameter::ConstInt(value) => *value == 0,
            Parameter::ConstFloat(value) => *value == 0.0,
            _ => false,
        }
    }

    /// Number of leaf parameters in this value, counting rational parts.
    pub fn node_count(&self) -> usize {
        match self {
            Parameter::ConstRat(rational) => {
                1 + rational.numerator.node_count() + rational.denominator.node_count()
            }
            _ => 1,
        }
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Parameter::ConstInt(a), Parameter::ConstInt(b)) => a == b,
            (Parameter::Symbol(a), Parameter::Symbol(b)) => a == b,
            (Parameter::ConstRat(a), Parameter::ConstRat(b)) => a == b,
            (Parameter::ConstFloat(a), Parameter::ConstFloat(b)) => a.to_bits() == b.to_bits(),
            (Parameter::ConstSymbol(a), Parameter::ConstSymbol(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Parameter::ConstInt(value) => value.hash(state),
            Parameter::Symbol(name) => name.hash(state),
            Parameter::ConstRat(rational) => rational.hash(state),
            Parameter::ConstFloat(value) => value.to_bits().hash(state),
            Parameter::ConstSymbol(symbol) => symbol.hash(state),
        }
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::ConstInt(value)
    }
}

impl From<f32> for Parameter {
    fn from(value: f32) -> Self {
        Parameter::ConstFloat(value)
    }
}

impl From<&str> for Parameter {
    fn from(name: &str) -> Self {
        Parameter::Symbol(name.to_owned())
    }
}

impl From<ConstSymbol> for Parameter {
    fn from(symbol: ConstSymbol) -> Self {
        Parameter::ConstSymbol(symbol)
    }
}

impl From<Rational> for Parameter {
    fn from(rational: Rational) -> Self {
        Parameter::ConstRat(rational)
    }
}

/// Exact fraction with parameter-valued numerator and denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    /// Dividend of the fraction.
    pub numerator: Box<Parameter>,
    /// Divisor of the fraction; never the literal zero on a valid tree.
    pub denominator: Box<Parameter>,
}

impl Rational {
    /// Builds `numerator / denominator`.
    pub fn new(numerator: impl Into<Parameter>, denominator: impl Into<Parameter>) -> Self {
        Self {
            numerator: Box::new(numerator.into()),
            denominator: Box::new(denominator.into()),
        }
    }
}

/// Edge of the tree: either a nested application or a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// Nested function application.
    Term(Term),
    /// Leaf value.
    Parameter(Parameter),
}

impl Operand {
    /// Returns the nested term, if this edge is internal.
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Operand::Term(term) => Some(term),
            Operand::Parameter(_) => None,
        }
    }

    /// Returns the leaf parameter, if this edge terminates.
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Operand::Term(_) => None,
            Operand::Parameter(parameter) => Some(parameter),
        }
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Operand::Term(term) => term.depth(),
            Operand::Parameter(_) => 1,
        }
    }

    /// Number of terms and parameters in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        match self {
            Operand::Term(term) => term.node_count(),
            Operand::Parameter(parameter) => parameter.node_count(),
        }
    }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Operand::Term(term)
    }
}

impl From<Parameter> for Operand {
    fn from(parameter: Parameter) -> Self {
        Operand::Parameter(parameter)
    }
}

macro_rules! operand_from_leaf {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Parameter(Parameter::from(value))
                }
            }
        )*
    };
}

operand_from_leaf!(i32, f32, &str, ConstSymbol, Rational);

/// Internal tree node: a function applied to an ordered operand list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Term {
    /// Operation applied to the operands.
    #[serde(default)]
    pub function: Function,
    /// Ordered operands; order is meaningful for `Pow`, `Mod` and `Log`.
    #[serde(default)]
    pub operands: Vec<Operand>,
}

impl Term {
    /// Builds an application from any operand-convertible values.
    pub fn new<I, O>(function: Function, operands: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Operand>,
    {
        Self {
            function,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// `a + b + ...`
    pub fn add<I: IntoIterator<Item = Operand>>(operands: I) -> Self {
        Self::new(Function::Add, operands)
    }

    /// `a * b * ...`
    pub fn mul<I: IntoIterator<Item = Operand>>(operands: I) -> Self {
        Self::new(Function::Mul, operands)
    }

    /// `max(a, b, ...)`
    pub fn max<I: IntoIterator<Item = Operand>>(operands: I) -> Self {
        Self::new(Function::Max, operands)
    }

    /// `min(a, b, ...)`
    pub fn min<I: IntoIterator<Item = Operand>>(operands: I) -> Self {
        Self::new(Function::Min, operands)
    }

    /// `base ^ exponent`
    pub fn pow(base: impl Into<Operand>, exponent: impl Into<Operand>) -> Self {
        Self::binary(Function::Pow, base, exponent)
    }

    /// `dividend mod modulus`
    pub fn modulo(dividend: impl Into<Operand>, modulus: impl Into<Operand>) -> Self {
        Self::binary(Function::Mod, dividend, modulus)
    }

    /// Natural logarithm.
    pub fn ln(value: impl Into<Operand>) -> Self {
        Self::unary(Function::Log, value)
    }

    /// Logarithm of `value` in `base`.
    pub fn log(value: impl Into<Operand>, base: impl Into<Operand>) -> Self {
        Self::binary(Function::Log, value, base)
    }

    /// Single-operand application such as `floor(x)` or `sin(x)`.
    pub fn unary(function: Function, operand: impl Into<Operand>) -> Self {
        Self {
            function,
            operands: vec![operand.into()],
        }
    }

    /// Two-operand application in stored order.
    pub fn binary(function: Function, first: impl Into<Operand>, second: impl Into<Operand>) -> Self {
        Self {
            function,
            operands: vec![first.into(), second.into()],
        }
    }

    /// Height of the tree; a term whose operands are all leaves has depth 2.
    pub fn depth(&self) -> usize {
        1 + self.operands.iter().map(Operand::depth).max().unwrap_or(0)
    }

    /// Number of terms and parameters in the tree.
    pub fn node_count(&self) -> usize {
        1 + self.operands.iter().map(Operand::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality_does_not_simplify() {
        let x_plus_zero = Term::add([Operand::from("x"), Operand::from(0)]);
        let x = Term::add([Operand::from("x")]);
        assert_ne!(x_plus_zero, x);
        assert_eq!(x_plus_zero.clone(), x_plus_zero);
    }

    #[test]
    fn floats_compare_by_bits() {
        assert_eq!(Parameter::float(f32::NAN), Parameter::float(f32::NAN));
        assert_ne!(Parameter::float(0.0), Parameter::float(-0.0));
        assert_ne!(Parameter::int(1), Parameter::float(1.0));
    }

    #[test]
    fn metrics_count_rational_parts() {
        let term = Term::pow(Parameter::rational("x", 2), 3);
        assert_eq!(term.node_count(), 5);
        assert_eq!(term.depth(), 2);
    }
}
