//! Conventional infix rendering of expression trees.

use std::fmt::{self, Display, Write};

use crate::function::Function;
use crate::types::{Operand, Parameter, Rational, Term};

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::ConstInt(value) => write!(f, "{value}"),
            Parameter::Symbol(name) => f.write_str(name),
            Parameter::ConstRat(rational) => write!(f, "{rational}"),
            Parameter::ConstFloat(value) => write!(f, "{value:?}"),
            Parameter::ConstSymbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.numerator, self.denominator)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Term(term) => write!(f, "{term}"),
            Operand::Parameter(parameter) => write!(f, "{parameter}"),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Function::Add => infix(f, " + ", &self.operands),
            Function::Mul => infix(f, "*", &self.operands),
            Function::Pow => infix(f, "^", &self.operands),
            Function::Mod => infix(f, " mod ", &self.operands),
            other => {
                write!(f, "{other}(")?;
                for (idx, operand) in self.operands.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{operand}")?;
                }
                f.write_char(')')
            }
        }
    }
}

fn infix(f: &mut fmt::Formatter<'_>, separator: &str, operands: &[Operand]) -> fmt::Result {
    f.write_char('(')?;
    for (idx, operand) in operands.iter().enumerate() {
        if idx > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{operand}")?;
    }
    f.write_char(')')
}
