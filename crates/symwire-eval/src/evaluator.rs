use symwire_core::{
    validate, validate_operand, validate_parameter, ErrorInfo, Function, NodePath, Operand,
    Parameter, Rational, Term, ValidationError,
};

use crate::bindings::Bindings;
use crate::errors::EvalError;
use crate::symbols::{substitute_operand, substitute_parameter};
use crate::value::{exact_literal, Value};

/// Evaluates a tree in non-strict mode: unresolved symbols stay symbolic.
pub fn evaluate(term: &Term, bindings: &Bindings) -> Result<Value, EvalError> {
    Evaluator::new().evaluate_term(term, bindings)
}

/// Evaluates a tree in strict mode: every symbol must be bound.
pub fn evaluate_strict(term: &Term, bindings: &Bindings) -> Result<Value, EvalError> {
    Evaluator::new().strict(true).evaluate_term(term, bindings)
}

/// Bottom-up reducer over validated trees.
///
/// The evaluator holds no state beyond its options, so one instance can be
/// shared across threads and reused for any number of trees and bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    strict: bool,
}

#[derive(Debug)]
enum Leaf {
    Number(f64),
    Symbolic(Parameter),
}

impl Leaf {
    /// Residual form of a leaf; `original` stands in when no literal holds
    /// the number exactly.
    fn into_residual(self, original: &Parameter, bindings: &Bindings) -> Parameter {
        match self {
            Leaf::Number(value) => exact_literal(value)
                .unwrap_or_else(|| substitute_parameter(original, bindings)),
            Leaf::Symbolic(parameter) => parameter,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Leaf::Number(value) => Value::Number(value),
            Leaf::Symbolic(parameter) => Value::Symbolic(Operand::Parameter(parameter)),
        }
    }
}

impl Evaluator {
    /// Creates a non-strict evaluator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict mode.
    ///
    /// In strict mode an unbound symbol fails with
    /// [`EvalError::UnboundSymbol`] and the imaginary unit with
    /// [`EvalError::NonReal`] instead of leaving a residual.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns whether strict mode is enabled.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validates and evaluates a tree.
    pub fn evaluate_term(&self, term: &Term, bindings: &Bindings) -> Result<Value, EvalError> {
        validate(term).map_err(refused)?;
        self.term(term, bindings)
    }

    /// Validates and evaluates a tree edge, which may be a bare leaf.
    pub fn evaluate_operand(
        &self,
        operand: &Operand,
        bindings: &Bindings,
    ) -> Result<Value, EvalError> {
        validate_operand(operand).map_err(refused)?;
        self.operand(operand, bindings)
    }

    /// Validates and evaluates a leaf value.
    pub fn evaluate_parameter(
        &self,
        parameter: &Parameter,
        bindings: &Bindings,
    ) -> Result<Value, EvalError> {
        validate_parameter(parameter).map_err(refused)?;
        Ok(self.parameter(parameter, bindings)?.into_value())
    }

    fn operand(&self, operand: &Operand, bindings: &Bindings) -> Result<Value, EvalError> {
        match operand {
            Operand::Term(term) => self.term(term, bindings),
            Operand::Parameter(parameter) => Ok(self.parameter(parameter, bindings)?.into_value()),
        }
    }

    fn term(&self, term: &Term, bindings: &Bindings) -> Result<Value, EvalError> {
        let values = term
            .operands
            .iter()
            .map(|operand| self.operand(operand, bindings))
            .collect::<Result<Vec<_>, _>>()?;
        check_divisors(term.function, &values)?;
        if values.iter().any(Value::is_symbolic) {
            return Ok(Value::Symbolic(Operand::Term(Term {
                function: term.function,
                operands: values
                    .into_iter()
                    .zip(&term.operands)
                    .map(|(value, original)| residual_operand(value, original, bindings))
                    .collect(),
            })));
        }
        let numbers: Vec<f64> = values.iter().filter_map(Value::as_number).collect();
        apply(term.function, &numbers).map(Value::Number)
    }

    fn parameter(&self, parameter: &Parameter, bindings: &Bindings) -> Result<Leaf, EvalError> {
        match parameter {
            Parameter::ConstInt(value) => Ok(Leaf::Number(f64::from(*value))),
            Parameter::ConstFloat(value) => Ok(Leaf::Number(f64::from(*value))),
            Parameter::ConstSymbol(symbol) => match symbol.real_value() {
                Some(value) => Ok(Leaf::Number(value)),
                None if self.strict => Err(EvalError::NonReal(
                    ErrorInfo::new("non-real-constant", "constant has no real value")
                        .with_context("constant", symbol),
                )),
                None => Ok(Leaf::Symbolic(parameter.clone())),
            },
            Parameter::Symbol(name) => match bindings.get(name) {
                Some(value) => Ok(Leaf::Number(value)),
                None if self.strict => Err(EvalError::UnboundSymbol { name: name.clone() }),
                None => {
                    tracing::debug!(symbol = %name, "symbol left unresolved");
                    Ok(Leaf::Symbolic(parameter.clone()))
                }
            },
            Parameter::ConstRat(rational) => self.rational(rational, bindings),
        }
    }

    fn rational(&self, rational: &Rational, bindings: &Bindings) -> Result<Leaf, EvalError> {
        let numerator = self.parameter(&rational.numerator, bindings)?;
        let denominator = self.parameter(&rational.denominator, bindings)?;
        if let Leaf::Number(value) = denominator {
            if value == 0.0 {
                return Err(EvalError::DivisionByZero(
                    ErrorInfo::new("zero-denominator", "rational denominator evaluated to zero")
                        .with_context("denominator", &rational.denominator),
                ));
            }
        }
        match (numerator, denominator) {
            (Leaf::Number(n), Leaf::Number(d)) => Ok(Leaf::Number(n / d)),
            (numerator, denominator) => Ok(Leaf::Symbolic(Parameter::ConstRat(Rational {
                numerator: Box::new(numerator.into_residual(&rational.numerator, bindings)),
                denominator: Box::new(denominator.into_residual(&rational.denominator, bindings)),
            }))),
        }
    }
}

fn residual_operand(value: Value, original: &Operand, bindings: &Bindings) -> Operand {
    match value {
        Value::Number(number) => match exact_literal(number) {
            Some(leaf) => Operand::Parameter(leaf),
            None => substitute_operand(original, bindings),
        },
        Value::Symbolic(operand) => operand,
    }
}

/// A literal zero denominator is a structural defect to the validator but a
/// division by zero to the evaluator.
fn refused(err: ValidationError) -> EvalError {
    match err {
        ValidationError::Structural(info) if info.code == "zero-denominator" => {
            EvalError::DivisionByZero(info)
        }
        other => EvalError::Invalid(other),
    }
}

/// Rejects zero divisors even when the other operand is still symbolic.
fn check_divisors(function: Function, values: &[Value]) -> Result<(), EvalError> {
    let second = values.get(1).and_then(Value::as_number);
    match (function, second) {
        (Function::Mod, Some(modulus)) if modulus == 0.0 => Err(EvalError::DivisionByZero(
            ErrorInfo::new("zero-modulus", "mod divisor evaluated to zero"),
        )),
        (Function::Log, Some(base)) if base == 1.0 => Err(EvalError::DivisionByZero(
            ErrorInfo::new("log-base-one", "log base 1 divides by ln(1) = 0"),
        )),
        (Function::Pow, Some(exponent)) if exponent < 0.0 => {
            match values.first().and_then(Value::as_number) {
                Some(base) if base == 0.0 => Err(EvalError::DivisionByZero(
                    ErrorInfo::new("zero-to-negative-power", "zero raised to a negative power")
                        .with_context("exponent", exponent),
                )),
                _ => Ok(()),
            }
        }
        _ => Ok(()),
    }
}

fn apply(function: Function, numbers: &[f64]) -> Result<f64, EvalError> {
    let value = match (function, numbers) {
        (Function::Add, [first, rest @ ..]) => rest.iter().fold(*first, |acc, value| acc + value),
        (Function::Mul, [first, rest @ ..]) => rest.iter().fold(*first, |acc, value| acc * value),
        (Function::Max, [first, rest @ ..]) => rest.iter().fold(*first, |acc, value| acc.max(*value)),
        (Function::Min, [first, rest @ ..]) => rest.iter().fold(*first, |acc, value| acc.min(*value)),
        (Function::Pow, [base, exponent]) => base.powf(*exponent),
        (Function::Mod, [dividend, modulus]) => floored_mod(*dividend, *modulus),
        (Function::Log, [value]) => value.ln(),
        (Function::Log, [value, base]) => value.ln() / base.ln(),
        (Function::Floor, [value]) => value.floor(),
        (Function::Ceiling, [value]) => value.ceil(),
        (Function::Sin, [value]) => value.sin(),
        (Function::Cos, [value]) => value.cos(),
        (Function::Tan, [value]) => value.tan(),
        (Function::None, _) => {
            return Err(ValidationError::Structural(ErrorInfo::new(
                "reserved-function",
                "the NONE function tag may not appear on a term",
            ))
            .into())
        }
        _ => {
            return Err(ValidationError::Arity {
                function,
                expected: function.arity(),
                found: numbers.len(),
                path: NodePath::root(),
            }
            .into())
        }
    };
    Ok(value)
}

/// Remainder that takes the sign of the modulus.
fn floored_mod(dividend: f64, modulus: f64) -> f64 {
    let remainder = dividend % modulus;
    if remainder != 0.0 && (remainder < 0.0) != (modulus < 0.0) {
        remainder + modulus
    } else {
        remainder
    }
}
