//! Codec implementation for 16-byte identifiers.
//!
//! A [`Uuid`] is written as its 16 raw bytes, with no length prefix. The nil
//! (all-zero) UUID is a valid value here; record formats that treat it as a
//! presence sentinel handle that at their own layer.

use crate::{Encode, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use uuid::Uuid;

impl Write for Uuid {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(self.as_bytes());
    }
}

impl Read for Uuid {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        <[u8; 16]>::read(buf).map(Uuid::from_bytes)
    }
}

impl FixedSize for Uuid {
    const LEN_ENCODED: usize = 16;
}

impl Encode for Uuid {
    #[inline]
    fn len_encoded(&self) -> usize {
        Self::LEN_ENCODED
    }
}
