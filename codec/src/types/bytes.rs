//! Codec implementations for length-prefixed byte strings.
//!
//! A byte string travels as one unsigned length byte (0-255) followed by
//! that many raw bytes. The one-byte prefix is a format ceiling: encoding a
//! value longer than 255 bytes is a caller contract violation and panics
//! before any bytes are written. Strings use the same layout and must decode
//! to valid UTF-8.

use crate::{util::at_least, Encode, Error, Read, Write};
use bytes::{Buf, BufMut, Bytes};

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let len = u8::try_from(self.len()).expect("byte string length exceeds u8");
        buf.put_u8(len);
        buf.put_slice(self);
    }
}

impl Read for Bytes {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = u8::read(buf)? as usize;
        at_least(buf, len)?;
        Ok(buf.copy_to_bytes(len))
    }
}

impl Encode for Bytes {
    #[inline]
    fn len_encoded(&self) -> usize {
        1 + self.len()
    }
}

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let len = u8::try_from(self.len()).expect("string length exceeds u8");
        buf.put_u8(len);
        buf.put_slice(self.as_bytes());
    }
}

impl Read for String {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let bytes = Bytes::read(buf)?;
        String::from_utf8(bytes.into())
            .map_err(|_| Error::InvalidData("String".into(), "invalid utf-8".into()))
    }
}

impl Encode for String {
    #[inline]
    fn len_encoded(&self) -> usize {
        1 + self.len()
    }
}
