use symwire_core::{validate, ErrorInfo, Operand, Parameter, Rational, Term, ValidationError};

use crate::decode::DEFAULT_MAX_DEPTH;
use crate::schema;
use crate::wire::{put_bytes_field, put_fixed32_field, put_int32_field};

/// Serializes a validated tree to the field-tagged wire form.
///
/// The tree is validated first; a tree that fails validation is never
/// emitted, so the reserved `NONE` tag cannot reach the wire. A tree nested
/// deeper than [`DEFAULT_MAX_DEPTH`] messages is refused with code
/// `depth-exceeded`, since [`decode`](crate::decode()) would not accept it.
pub fn encode(term: &Term) -> Result<Vec<u8>, ValidationError> {
    validate(term)?;
    let depth = message_depth(term);
    if depth > DEFAULT_MAX_DEPTH {
        return Err(ValidationError::Structural(
            ErrorInfo::new("depth-exceeded", "message nesting exceeds the decode limit")
                .with_context("depth", depth)
                .with_context("max_depth", DEFAULT_MAX_DEPTH),
        ));
    }
    Ok(encode_unchecked(term))
}

/// Deepest message the decoder enters for `term`, counting the root as 1.
pub(crate) fn message_depth(term: &Term) -> usize {
    term_depth(term, 1)
}

fn term_depth(term: &Term, depth: usize) -> usize {
    term.operands
        .iter()
        .map(|operand| match operand {
            Operand::Term(inner) => term_depth(inner, depth + 2),
            Operand::Parameter(parameter) => parameter_depth(parameter, depth + 2),
        })
        .fold(depth, usize::max)
}

fn parameter_depth(parameter: &Parameter, depth: usize) -> usize {
    match parameter {
        Parameter::ConstRat(rational) => parameter_depth(&rational.numerator, depth + 2)
            .max(parameter_depth(&rational.denominator, depth + 2)),
        _ => depth,
    }
}

fn encode_unchecked(term: &Term) -> Vec<u8> {
    let mut buf = Vec::new();
    write_term(term, &mut buf);
    buf
}

fn write_term(term: &Term, buf: &mut Vec<u8>) {
    put_int32_field(buf, schema::term::FUNCTION, term.function.as_i32());
    for operand in &term.operands {
        let mut nested = Vec::new();
        write_operand(operand, &mut nested);
        put_bytes_field(buf, schema::term::OPERANDS, &nested);
    }
}

fn write_operand(operand: &Operand, buf: &mut Vec<u8>) {
    let mut nested = Vec::new();
    match operand {
        Operand::Term(term) => {
            write_term(term, &mut nested);
            put_bytes_field(buf, schema::operand::TERM, &nested);
        }
        Operand::Parameter(parameter) => {
            write_parameter(parameter, &mut nested);
            put_bytes_field(buf, schema::operand::PARAMETER, &nested);
        }
    }
}

fn write_parameter(parameter: &Parameter, buf: &mut Vec<u8>) {
    match parameter {
        Parameter::ConstInt(value) => put_int32_field(buf, schema::parameter::CONST_INT, *value),
        Parameter::Symbol(name) => {
            put_bytes_field(buf, schema::parameter::SYMBOL, name.as_bytes())
        }
        Parameter::ConstRat(rational) => {
            let mut nested = Vec::new();
            write_rational(rational, &mut nested);
            put_bytes_field(buf, schema::parameter::CONST_RAT, &nested);
        }
        Parameter::ConstFloat(value) => {
            put_fixed32_field(buf, schema::parameter::CONST_FLOAT, value.to_bits())
        }
        Parameter::ConstSymbol(symbol) => {
            put_int32_field(buf, schema::parameter::CONST_SYMBOL, symbol.as_i32())
        }
    }
}

fn write_rational(rational: &Rational, buf: &mut Vec<u8>) {
    let mut nested = Vec::new();
    write_parameter(&rational.numerator, &mut nested);
    put_bytes_field(buf, schema::rational::NUMERATOR, &nested);
    nested.clear();
    write_parameter(&rational.denominator, &mut nested);
    put_bytes_field(buf, schema::rational::DENOMINATOR, &nested);
}

#[cfg(test)]
mod tests {
    use super::*;
    use symwire_core::{ErrorKind, Function};

    #[test]
    fn known_bytes_for_small_tree() {
        let term = Term::add([Operand::from(2), Operand::from("x")]);
        let bytes = encode(&term).unwrap();
        let expected: Vec<u8> = vec![
            0x08, 0x01, // function = Add
            0x12, 0x04, 0x12, 0x02, 0x08, 0x02, // operand { parameter { const_int: 2 } }
            0x12, 0x05, 0x12, 0x03, 0x12, 0x01, b'x', // operand { parameter { symbol: "x" } }
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn message_depth_counts_every_wrapper() {
        assert_eq!(message_depth(&Term::pow(2, 3)), 3);
        assert_eq!(message_depth(&Term::pow(Parameter::rational(1, "x"), 3)), 5);
        assert_eq!(message_depth(&Term::unary(Function::Floor, Term::pow(2, 3))), 5);
    }

    #[test]
    fn sentinel_never_reaches_the_wire() {
        let term = Term::new(Function::None, [Operand::from(1)]);
        assert_eq!(encode(&term).unwrap_err().kind(), ErrorKind::Structural);
    }
}
