#![allow(dead_code)]

//! Hand-assembled wire messages for decoder tests.

pub fn varint(mut value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
    out
}

pub fn varint_field(field: u32, value: i64) -> Vec<u8> {
    let mut out = varint(u64::from(field) << 3);
    out.extend(varint(value as u64));
    out
}

pub fn bytes_field(field: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = varint((u64::from(field) << 3) | 2);
    out.extend(varint(payload.len() as u64));
    out.extend_from_slice(payload);
    out
}

pub fn fixed32_field(field: u32, bits: u32) -> Vec<u8> {
    let mut out = varint((u64::from(field) << 3) | 5);
    out.extend_from_slice(&bits.to_le_bytes());
    out
}

pub fn int_parameter(value: i32) -> Vec<u8> {
    varint_field(1, i64::from(value))
}

pub fn symbol_parameter(name: &str) -> Vec<u8> {
    bytes_field(2, name.as_bytes())
}

pub fn parameter_operand(parameter: &[u8]) -> Vec<u8> {
    bytes_field(2, parameter)
}

pub fn term_operand(term: &[u8]) -> Vec<u8> {
    bytes_field(1, term)
}

pub fn term(function: i32, operands: &[Vec<u8>]) -> Vec<u8> {
    let mut out = varint_field(1, i64::from(function));
    for operand in operands {
        out.extend(bytes_field(2, operand));
    }
    out
}

pub fn concat(parts: &[Vec<u8>]) -> Vec<u8> {
    parts.iter().flatten().copied().collect()
}
