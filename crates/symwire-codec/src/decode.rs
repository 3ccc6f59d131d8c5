use symwire_core::{validate, ConstSymbol, ErrorInfo, Function, Operand, Parameter, Rational, Term};

use crate::errors::DecodeError;
use crate::schema;
use crate::wire::{Reader, WireType};

/// Default bound on nested messages accepted by [`decode`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while decoding untrusted bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested messages (terms, operands, parameters, rationals).
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Restores a tree from its wire form and validates it.
pub fn decode(bytes: &[u8]) -> Result<Term, DecodeError> {
    decode_with(bytes, DecodeOptions::default())
}

/// Restores a tree from its wire form under explicit limits.
///
/// Unknown fields are skipped. The result is a pure structural transform of
/// the input: nothing is evaluated or simplified.
pub fn decode_with(bytes: &[u8], options: DecodeOptions) -> Result<Term, DecodeError> {
    let decoder = Decoder { options };
    let term = decoder.term(bytes, 1).map_err(|err| {
        tracing::debug!(code = err.code(), "rejected wire payload");
        err
    })?;
    if let Err(err) = validate(&term) {
        tracing::debug!(%err, "decoded tree failed validation");
        return Err(err.into());
    }
    Ok(term)
}

struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    fn enter(&self, depth: usize) -> Result<(), DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::Malformed(
                ErrorInfo::new("depth-exceeded", "message nesting exceeds the decode limit")
                    .with_context("max_depth", self.options.max_depth),
            ));
        }
        Ok(())
    }

    fn term(&self, bytes: &[u8], depth: usize) -> Result<Term, DecodeError> {
        self.enter(depth)?;
        let mut reader = Reader::new(bytes);
        let mut function = Function::None;
        let mut operands = Vec::new();
        while !reader.is_empty() {
            let offset = reader.offset();
            let (field, wire_type) = reader.read_tag()?;
            match field {
                schema::term::FUNCTION => {
                    expect_wire_type("Term.function", field, wire_type, WireType::Varint, offset)?;
                    let raw = reader.read_int32()?;
                    function = Function::from_i32(raw).ok_or_else(|| {
                        DecodeError::Malformed(
                            ErrorInfo::new("unknown-function", "function value is not in the schema")
                                .with_context("value", raw)
                                .with_context("offset", offset),
                        )
                    })?;
                }
                schema::term::OPERANDS => {
                    expect_wire_type(
                        "Term.operands",
                        field,
                        wire_type,
                        WireType::LengthDelimited,
                        offset,
                    )?;
                    let payload = reader.read_length_delimited()?;
                    operands.push(self.operand(payload, depth + 1)?);
                }
                _ => reader.skip(field, wire_type)?,
            }
        }
        Ok(Term { function, operands })
    }

    fn operand(&self, bytes: &[u8], depth: usize) -> Result<Operand, DecodeError> {
        self.enter(depth)?;
        let mut reader = Reader::new(bytes);
        let mut slot = OneofSlot::new("Operand");
        while !reader.is_empty() {
            let offset = reader.offset();
            let (field, wire_type) = reader.read_tag()?;
            match field {
                schema::operand::TERM => {
                    expect_wire_type("Operand.term", field, wire_type, WireType::LengthDelimited, offset)?;
                    let payload = reader.read_length_delimited()?;
                    slot.fill(field, Operand::Term(self.term(payload, depth + 1)?))?;
                }
                schema::operand::PARAMETER => {
                    expect_wire_type(
                        "Operand.parameter",
                        field,
                        wire_type,
                        WireType::LengthDelimited,
                        offset,
                    )?;
                    let payload = reader.read_length_delimited()?;
                    slot.fill(field, Operand::Parameter(self.parameter(payload, depth + 1)?))?;
                }
                _ => reader.skip(field, wire_type)?,
            }
        }
        slot.finish()
    }

    fn parameter(&self, bytes: &[u8], depth: usize) -> Result<Parameter, DecodeError> {
        self.enter(depth)?;
        let mut reader = Reader::new(bytes);
        let mut slot = OneofSlot::new("Parameter");
        while !reader.is_empty() {
            let offset = reader.offset();
            let (field, wire_type) = reader.read_tag()?;
            match field {
                schema::parameter::CONST_INT => {
                    expect_wire_type("Parameter.const_int", field, wire_type, WireType::Varint, offset)?;
                    slot.fill(field, Parameter::ConstInt(reader.read_int32()?))?;
                }
                schema::parameter::SYMBOL => {
                    expect_wire_type(
                        "Parameter.symbol",
                        field,
                        wire_type,
                        WireType::LengthDelimited,
                        offset,
                    )?;
                    let payload = reader.read_length_delimited()?;
                    let name = std::str::from_utf8(payload).map_err(|err| {
                        DecodeError::Malformed(
                            ErrorInfo::new("invalid-utf8", "symbol name is not valid UTF-8")
                                .with_context("offset", offset)
                                .with_context("valid_up_to", err.valid_up_to()),
                        )
                    })?;
                    slot.fill(field, Parameter::Symbol(name.to_owned()))?;
                }
                schema::parameter::CONST_RAT => {
                    expect_wire_type(
                        "Parameter.const_rat",
                        field,
                        wire_type,
                        WireType::LengthDelimited,
                        offset,
                    )?;
                    let payload = reader.read_length_delimited()?;
                    slot.fill(field, Parameter::ConstRat(self.rational(payload, depth + 1)?))?;
                }
                schema::parameter::CONST_FLOAT => {
                    expect_wire_type(
                        "Parameter.const_float",
                        field,
                        wire_type,
                        WireType::Fixed32,
                        offset,
                    )?;
                    slot.fill(field, Parameter::ConstFloat(f32::from_bits(reader.read_fixed32()?)))?;
                }
                schema::parameter::CONST_SYMBOL => {
                    expect_wire_type(
                        "Parameter.const_symbol",
                        field,
                        wire_type,
                        WireType::Varint,
                        offset,
                    )?;
                    let raw = reader.read_int32()?;
                    let symbol = ConstSymbol::from_i32(raw).ok_or_else(|| {
                        DecodeError::Malformed(
                            ErrorInfo::new("unknown-const-symbol", "constant value is not in the schema")
                                .with_context("value", raw)
                                .with_context("offset", offset),
                        )
                    })?;
                    slot.fill(field, Parameter::ConstSymbol(symbol))?;
                }
                _ => reader.skip(field, wire_type)?,
            }
        }
        slot.finish()
    }

    fn rational(&self, bytes: &[u8], depth: usize) -> Result<Rational, DecodeError> {
        self.enter(depth)?;
        let mut reader = Reader::new(bytes);
        let mut numerator = None;
        let mut denominator = None;
        while !reader.is_empty() {
            let offset = reader.offset();
            let (field, wire_type) = reader.read_tag()?;
            let target = match field {
                schema::rational::NUMERATOR => &mut numerator,
                schema::rational::DENOMINATOR => &mut denominator,
                _ => {
                    reader.skip(field, wire_type)?;
                    continue;
                }
            };
            expect_wire_type("Rational part", field, wire_type, WireType::LengthDelimited, offset)?;
            let payload = reader.read_length_delimited()?;
            if target.is_some() {
                return Err(DecodeError::Malformed(
                    ErrorInfo::new("duplicate-field", "rational part appears more than once")
                        .with_context("field", field)
                        .with_context("offset", offset),
                ));
            }
            *target = Some(self.parameter(payload, depth + 1)?);
        }
        match (numerator, denominator) {
            (Some(numerator), Some(denominator)) => Ok(Rational {
                numerator: Box::new(numerator),
                denominator: Box::new(denominator),
            }),
            (numerator, _) => {
                let missing = if numerator.is_none() {
                    schema::rational::NUMERATOR
                } else {
                    schema::rational::DENOMINATOR
                };
                Err(DecodeError::Oneof(
                    ErrorInfo::new("empty-oneof", "rational part has no populated parameter")
                        .with_context("message", "Rational")
                        .with_context("field", missing),
                ))
            }
        }
    }
}

/// Tracks the single populated member of a oneof group.
struct OneofSlot<T> {
    message: &'static str,
    value: Option<(u32, T)>,
}

impl<T> OneofSlot<T> {
    fn new(message: &'static str) -> Self {
        Self {
            message,
            value: None,
        }
    }

    fn fill(&mut self, field: u32, value: T) -> Result<(), DecodeError> {
        if let Some((previous, _)) = &self.value {
            return Err(DecodeError::Oneof(
                ErrorInfo::new("multiple-variants", "more than one oneof member is populated")
                    .with_context("message", self.message)
                    .with_context("first_field", *previous)
                    .with_context("second_field", field),
            ));
        }
        self.value = Some((field, value));
        Ok(())
    }

    fn finish(self) -> Result<T, DecodeError> {
        self.value.map(|(_, value)| value).ok_or_else(|| {
            DecodeError::Oneof(
                ErrorInfo::new("empty-oneof", "no oneof member is populated")
                    .with_context("message", self.message),
            )
        })
    }
}

fn expect_wire_type(
    name: &str,
    field: u32,
    found: WireType,
    expected: WireType,
    offset: usize,
) -> Result<(), DecodeError> {
    if found == expected {
        return Ok(());
    }
    Err(DecodeError::Malformed(
        ErrorInfo::new("wire-type-mismatch", format!("{name} has the wrong wire type"))
            .with_context("field", field)
            .with_context("expected", format!("{expected:?}"))
            .with_context("found", format!("{found:?}"))
            .with_context("offset", offset),
    ))
}
