//! A closed set of memo value kinds with positional encode/decode helpers.
//!
//! A memo body is an ordered sequence of typed values with no per-value tags
//! on the wire. [`Value`] enumerates every kind this codec can carry and
//! [`Kind`] is the schema side of the same set: producers hand
//! [`write_values`] an ordered slice of values, consumers hand
//! [`read_values`] the matching ordered slice of kinds. How that ordering is
//! agreed on (flags, schema config, protocol negotiation) is the caller's
//! business.
//!
//! Record types with their own field layout implement
//! [`Write`]/[`Read`] directly instead and never pass through this module.

use crate::{Encode, Error, Read, Write};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// The declared kind of a single memo value.
///
/// The set is closed: a consumer schema is an ordered `&[Kind]`, and every
/// kind maps to exactly one wire shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Bool,
    String,
    Bytes,
    Decimal,
    Uuid,
    Timestamp,
}

/// A single memo value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Bool(bool),
    String(String),
    Bytes(Bytes),
    Decimal(Decimal),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Returns the kind this value travels as.
    pub fn kind(&self) -> Kind {
        match self {
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::Decimal(_) => Kind::Decimal,
            Value::Uuid(_) => Kind::Uuid,
            Value::Timestamp(_) => Kind::Timestamp,
        }
    }

    /// Reads a single value of the given kind.
    pub fn read(buf: &mut impl Buf, kind: Kind) -> Result<Self, Error> {
        Ok(match kind {
            Kind::I8 => Value::I8(i8::read(buf)?),
            Kind::I16 => Value::I16(i16::read(buf)?),
            Kind::I32 => Value::I32(i32::read(buf)?),
            Kind::I64 => Value::I64(i64::read(buf)?),
            Kind::U8 => Value::U8(u8::read(buf)?),
            Kind::U16 => Value::U16(u16::read(buf)?),
            Kind::U32 => Value::U32(u32::read(buf)?),
            Kind::U64 => Value::U64(u64::read(buf)?),
            Kind::Bool => Value::Bool(bool::read(buf)?),
            Kind::String => Value::String(String::read(buf)?),
            Kind::Bytes => Value::Bytes(Bytes::read(buf)?),
            Kind::Decimal => Value::Decimal(Decimal::read(buf)?),
            Kind::Uuid => Value::Uuid(Uuid::read(buf)?),
            Kind::Timestamp => Value::Timestamp(DateTime::<Utc>::read(buf)?),
        })
    }
}

impl Write for Value {
    fn write(&self, buf: &mut impl BufMut) {
        match self {
            Value::I8(v) => v.write(buf),
            Value::I16(v) => v.write(buf),
            Value::I32(v) => v.write(buf),
            Value::I64(v) => v.write(buf),
            Value::U8(v) => v.write(buf),
            Value::U16(v) => v.write(buf),
            Value::U32(v) => v.write(buf),
            Value::U64(v) => v.write(buf),
            Value::Bool(v) => v.write(buf),
            Value::String(v) => v.write(buf),
            Value::Bytes(v) => v.write(buf),
            Value::Decimal(v) => v.write(buf),
            Value::Uuid(v) => v.write(buf),
            Value::Timestamp(v) => v.write(buf),
        }
    }
}

impl Encode for Value {
    fn len_encoded(&self) -> usize {
        match self {
            Value::I8(v) => v.len_encoded(),
            Value::I16(v) => v.len_encoded(),
            Value::I32(v) => v.len_encoded(),
            Value::I64(v) => v.len_encoded(),
            Value::U8(v) => v.len_encoded(),
            Value::U16(v) => v.len_encoded(),
            Value::U32(v) => v.len_encoded(),
            Value::U64(v) => v.len_encoded(),
            Value::Bool(v) => v.len_encoded(),
            Value::String(v) => v.len_encoded(),
            Value::Bytes(v) => v.len_encoded(),
            Value::Decimal(v) => v.len_encoded(),
            Value::Uuid(v) => v.len_encoded(),
            Value::Timestamp(v) => v.len_encoded(),
        }
    }
}

/// Writes an ordered sequence of values, in order.
pub fn write_values(buf: &mut impl BufMut, values: &[Value]) {
    for value in values {
        value.write(buf);
    }
}

/// Encodes an ordered sequence of values to a fresh buffer.
///
/// Panics if any value violates its write contract (e.g. an oversize
/// string); nothing written before the violation is usable.
pub fn encode_values(values: &[Value]) -> BytesMut {
    let len = values.iter().map(Encode::len_encoded).sum();
    let mut buffer = BytesMut::with_capacity(len);
    write_values(&mut buffer, values);
    assert_eq!(buffer.len(), len, "write() did not write expected bytes");
    buffer
}

/// Reads an ordered sequence of values, one per kind, positionally.
///
/// Stops at the first failure: bytes consumed before the failure stay
/// consumed, and the buffer position is left wherever the failure occurred.
/// The caller owns cleanup of a partially-read buffer.
pub fn read_values(buf: &mut impl Buf, kinds: &[Kind]) -> Result<Vec<Value>, Error> {
    let mut values = Vec::with_capacity(kinds.len());
    for kind in kinds {
        values.push(Value::read(buf, *kind)?);
    }
    Ok(values)
}
