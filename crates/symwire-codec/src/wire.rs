//! Low-level primitives of the field-tagged wire format.
//!
//! Every field is a varint tag `(field_number << 3) | wire_type` followed by a
//! payload whose framing depends on the wire type. Varints are little-endian
//! base-128 with the high bit of each byte as the continuation flag.

use symwire_core::ErrorInfo;

use crate::errors::DecodeError;

const MAX_VARINT_LEN: usize = 10;

/// Payload framing of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    StartGroup,
    EndGroup,
    Fixed32,
}

impl WireType {
    fn from_raw(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }

    const fn raw(self) -> u64 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::LengthDelimited => 2,
            WireType::StartGroup => 3,
            WireType::EndGroup => 4,
            WireType::Fixed32 => 5,
        }
    }
}

pub(crate) fn put_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

pub(crate) fn put_tag(buf: &mut Vec<u8>, field: u32, wire_type: WireType) {
    put_varint(buf, (u64::from(field) << 3) | wire_type.raw());
}

/// Writes an int32 the way the schema declares it: negative values are
/// sign-extended to 64 bits and therefore always take ten bytes.
pub(crate) fn put_int32_field(buf: &mut Vec<u8>, field: u32, value: i32) {
    put_tag(buf, field, WireType::Varint);
    put_varint(buf, i64::from(value) as u64);
}

pub(crate) fn put_bytes_field(buf: &mut Vec<u8>, field: u32, payload: &[u8]) {
    put_tag(buf, field, WireType::LengthDelimited);
    put_varint(buf, payload.len() as u64);
    buf.extend_from_slice(payload);
}

pub(crate) fn put_fixed32_field(buf: &mut Vec<u8>, field: u32, bits: u32) {
    put_tag(buf, field, WireType::Fixed32);
    buf.extend_from_slice(&bits.to_le_bytes());
}

/// Cursor over one message's bytes.
#[derive(Debug)]
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for idx in 0..MAX_VARINT_LEN {
            let byte = *self.bytes.get(self.pos).ok_or_else(|| self.truncated("varint"))?;
            self.pos += 1;
            if idx == MAX_VARINT_LEN - 1 && byte > 1 {
                break;
            }
            value |= u64::from(byte & 0x7f) << (7 * idx);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::Malformed(
            ErrorInfo::new("varint-overflow", "varint does not fit in 64 bits")
                .with_context("offset", self.pos),
        ))
    }

    /// Reads a field key, returning the field number and wire type.
    pub(crate) fn read_tag(&mut self) -> Result<(u32, WireType), DecodeError> {
        let start = self.pos;
        let key = self.read_varint()?;
        let field = key >> 3;
        if field == 0 || field > u64::from(u32::MAX >> 3) {
            return Err(DecodeError::Malformed(
                ErrorInfo::new("invalid-field-number", "field number out of range")
                    .with_context("offset", start)
                    .with_context("field", field),
            ));
        }
        let wire_type = WireType::from_raw(key & 0x7).ok_or_else(|| {
            DecodeError::Malformed(
                ErrorInfo::new("invalid-wire-type", "unknown wire type")
                    .with_context("offset", start)
                    .with_context("wire_type", key & 0x7),
            )
        })?;
        Ok((field as u32, wire_type))
    }

    pub(crate) fn read_int32(&mut self) -> Result<i32, DecodeError> {
        let start = self.pos;
        let raw = self.read_varint()? as i64;
        i32::try_from(raw).map_err(|_| {
            DecodeError::Malformed(
                ErrorInfo::new("int32-out-of-range", "varint does not encode a 32-bit integer")
                    .with_context("offset", start)
                    .with_context("value", raw),
            )
        })
    }

    pub(crate) fn read_fixed32(&mut self) -> Result<u32, DecodeError> {
        let chunk = self.take(4, "fixed32")?;
        Ok(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    pub(crate) fn read_length_delimited(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.read_varint()?;
        let len = usize::try_from(len).map_err(|_| self.truncated("length-delimited"))?;
        self.take(len, "length-delimited")
    }

    /// Skips the payload of a field this decoder does not know.
    pub(crate) fn skip(&mut self, field: u32, wire_type: WireType) -> Result<(), DecodeError> {
        tracing::trace!(field, ?wire_type, offset = self.pos, "skipping unknown field");
        match wire_type {
            WireType::Varint => self.read_varint().map(|_| ()),
            WireType::Fixed64 => self.take(8, "fixed64").map(|_| ()),
            WireType::LengthDelimited => self.read_length_delimited().map(|_| ()),
            WireType::Fixed32 => self.take(4, "fixed32").map(|_| ()),
            WireType::StartGroup | WireType::EndGroup => Err(DecodeError::Malformed(
                ErrorInfo::new("unsupported-wire-type", "group encoding is not supported")
                    .with_context("offset", self.pos)
                    .with_context("field", field),
            )),
        }
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| self.truncated(what))?;
        let chunk = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(chunk)
    }

    fn truncated(&self, what: &str) -> DecodeError {
        DecodeError::Malformed(
            ErrorInfo::new("truncated", format!("input ended inside a {what}"))
                .with_context("offset", self.pos)
                .with_context("available", self.bytes.len() - self.pos.min(self.bytes.len())),
        )
    }
}
