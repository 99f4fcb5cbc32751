//! Codec implementations for Rust primitive types.
//!
//! All fixed-width integers are written big-endian to avoid host-endian
//! ambiguity. Signed integers reuse the byte pattern of their unsigned width
//! (a two's-complement bit-reinterpretation), so a signed value never
//! sign-extends across widths on the wire.
//!
//! Booleans occupy exactly one byte: 0 for false and 1 for true on encode;
//! any nonzero byte decodes as true.

use crate::{util::at_least, Encode, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const LEN_ENCODED: usize = std::mem::size_of::<$type>();
        }

        impl Encode for $type {
            #[inline]
            fn len_encoded(&self) -> usize {
                Self::LEN_ENCODED
            }
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16, put_u16);
impl_numeric!(u32, get_u32, put_u32);
impl_numeric!(u64, get_u64, put_u64);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16, put_i16);
impl_numeric!(i32, get_i32, put_i32);
impl_numeric!(i64, get_i64, put_i64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(if *self { 1 } else { 0 });
    }
}

impl Read for bool {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Ok(u8::read(buf)? != 0)
    }
}

impl FixedSize for bool {
    const LEN_ENCODED: usize = 1;
}

impl Encode for bool {
    #[inline]
    fn len_encoded(&self) -> usize {
        Self::LEN_ENCODED
    }
}

// Constant-size array implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const LEN_ENCODED: usize = N;
}

impl<const N: usize> Encode for [u8; N] {
    #[inline]
    fn len_encoded(&self) -> usize {
        N
    }
}
